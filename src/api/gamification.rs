// ABOUTME: Bindings for /api/v1/gamification: stats, badges, daily score, and badge checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::{ApiClient, ApiRequest};
use chrono::NaiveDate;
use runfuel_core::constants::endpoints::gamification;
use runfuel_core::errors::AppResult;
use runfuel_core::models::{AwardedBadge, DailyScore, UserBadgeInfo, UserStats};

/// Gamification endpoints
#[derive(Clone, Copy)]
pub struct GamificationApi<'a> {
    client: &'a ApiClient,
}

impl<'a> GamificationApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// XP, level, and streak totals
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn stats(&self) -> AppResult<UserStats> {
        self.client
            .send_json(ApiRequest::get(gamification::STATS))
            .await
    }

    /// Badge catalogue with earned flags
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn badges(&self) -> AppResult<Vec<UserBadgeInfo>> {
        self.client
            .send_json(ApiRequest::get(gamification::BADGES))
            .await
    }

    /// Score for a day, today by default
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn daily_score(&self, log_date: Option<NaiveDate>) -> AppResult<DailyScore> {
        let request = ApiRequest::get(gamification::DAILY_SCORE).query_opt("log_date", log_date);
        self.client.send_json(request).await
    }

    /// Award any badges the user now qualifies for
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn check_badges(&self) -> AppResult<Vec<AwardedBadge>> {
        self.client
            .send_json(ApiRequest::post(gamification::CHECK_BADGES))
            .await
    }
}
