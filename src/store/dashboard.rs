// ABOUTME: Cached today's calorie log for the dashboard view
// ABOUTME: Mutations go to the backend and the log is refetched rather than patched locally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::ApiClient;
use runfuel_core::errors::AppResult;
use runfuel_core::models::CalorieLog;
use tracing::warn;

const LOAD_FAILED: &str = "Failed to load dashboard";

/// Today's calorie log with loading and error state
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    today_log: Option<CalorieLog>,
    is_loading: bool,
    error: Option<String>,
}

impl DashboardStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached log
    #[must_use]
    pub const fn today_log(&self) -> Option<&CalorieLog> {
        self.today_log.as_ref()
    }

    /// Whether a load is running
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message from the last failed load
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Store a fresh log and clear any previous error
    pub fn set_today_log(&mut self, log: Option<CalorieLog>) {
        self.today_log = log;
        self.error = None;
    }

    /// Mark a load as running or finished
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Record a failure and stop loading
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
        self.is_loading = false;
    }

    /// Forget everything, e.g. after sign-out
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fetch today's log
    ///
    /// On failure the previous log is kept and the user-facing message is
    /// stored in [`Self::error`].
    ///
    /// # Errors
    ///
    /// Returns the API error
    pub async fn load_today(&mut self, client: &ApiClient) -> AppResult<&CalorieLog> {
        self.set_loading(true);
        match client.calories().today().await {
            Ok(log) => {
                self.error = None;
                self.set_loading(false);
                Ok(&*self.today_log.insert(log))
            }
            Err(e) => {
                warn!(error = %e, "dashboard load failed");
                self.set_error(Some(e.user_message(LOAD_FAILED)));
                Err(e)
            }
        }
    }

    /// Delete an entry and reload the log
    ///
    /// # Errors
    ///
    /// Returns the delete or reload error
    pub async fn delete_entry(&mut self, client: &ApiClient, entry_id: &str) -> AppResult<()> {
        client.calories().delete_entry(entry_id).await?;
        self.load_today(client).await.map(drop)
    }

    /// Flip an entry's favorite flag and reload the log
    ///
    /// # Errors
    ///
    /// Returns the toggle or reload error
    pub async fn toggle_favorite(&mut self, client: &ApiClient, entry_id: &str) -> AppResult<()> {
        client.food().toggle_favorite(entry_id).await?;
        self.load_today(client).await.map(drop)
    }
}
