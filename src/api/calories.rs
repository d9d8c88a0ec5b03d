// ABOUTME: Bindings for /api/v1/calories: daily logs, date ranges, and entry edits
// ABOUTME: Dates go out as ISO calendar days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::api::require_id;
use crate::client::{ApiClient, ApiRequest};
use chrono::NaiveDate;
use runfuel_core::constants::endpoints::calories;
use runfuel_core::errors::{AppError, AppResult};
use runfuel_core::models::{
    CalorieLog, CalorieLogSummary, FoodEntry, FoodEntryUpdate, MessageResponse,
};

/// Calorie log endpoints
#[derive(Clone, Copy)]
pub struct CaloriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CaloriesApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Today's log with its entries
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn today(&self) -> AppResult<CalorieLog> {
        self.client.send_json(ApiRequest::get(calories::TODAY)).await
    }

    /// Log for a given day
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn by_date(&self, date: NaiveDate) -> AppResult<CalorieLog> {
        let path = calories::by_date(&date.to_string());
        self.client.send_json(ApiRequest::get(path)).await
    }

    /// Daily totals between two days, inclusive
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `end` precedes `start`, otherwise the backend error
    pub async fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<CalorieLogSummary>> {
        if end < start {
            return Err(AppError::invalid_input(format!(
                "Range end {end} is before start {start}"
            )));
        }
        let request = ApiRequest::get(calories::RANGE)
            .query("start", start)
            .query("end", end);
        self.client.send_json(request).await
    }

    /// Edit an entry
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed id, `ResourceNotFound` for unknown entries
    pub async fn update_entry(
        &self,
        entry_id: &str,
        update: &FoodEntryUpdate,
    ) -> AppResult<FoodEntry> {
        let path = calories::entry(require_id("entry", entry_id)?);
        let request = ApiRequest::put(path).json(update)?;
        self.client.send_json(request).await
    }

    /// Delete an entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown entries
    pub async fn delete_entry(&self, entry_id: &str) -> AppResult<MessageResponse> {
        let path = calories::entry(require_id("entry", entry_id)?);
        self.client.send_json(ApiRequest::delete(path)).await
    }
}
