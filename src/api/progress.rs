// ABOUTME: Bindings for /api/v1/progress: weekly and monthly summaries, streak, and consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::{ApiClient, ApiRequest};
use chrono::NaiveDate;
use runfuel_core::constants::endpoints::progress;
use runfuel_core::constants::limits::DEFAULT_CONSISTENCY_PERIOD;
use runfuel_core::errors::{AppError, AppResult};
use runfuel_core::models::{ConsistencyData, StreakData, WeeklySummary};

/// Progress endpoints
#[derive(Clone, Copy)]
pub struct ProgressApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProgressApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Summary of the week containing `date`, or the current week
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn weekly(&self, date: Option<NaiveDate>) -> AppResult<WeeklySummary> {
        let request = ApiRequest::get(progress::WEEKLY).query_opt("date", date);
        self.client.send_json(request).await
    }

    /// Summary of a calendar month
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a month outside 1-12, otherwise the backend error
    pub async fn monthly(&self, month: u32, year: i32) -> AppResult<WeeklySummary> {
        if !(1..=12).contains(&month) {
            return Err(AppError::invalid_input(format!(
                "Month must be between 1 and 12, got {month}"
            )));
        }
        let request = ApiRequest::get(progress::MONTHLY)
            .query("month", month)
            .query("year", year);
        self.client.send_json(request).await
    }

    /// Current and longest logging streak
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn streak(&self) -> AppResult<StreakData> {
        self.client.send_json(ApiRequest::get(progress::STREAK)).await
    }

    /// Consistency score over a period like `"30d"`, defaulting to 30 days
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn consistency(&self, period: Option<&str>) -> AppResult<ConsistencyData> {
        let request = ApiRequest::get(progress::CONSISTENCY)
            .query("period", period.unwrap_or(DEFAULT_CONSISTENCY_PERIOD));
        self.client.send_json(request).await
    }
}
