// ABOUTME: Typed bindings for the RunFuel REST resources, one module per backend router
// ABOUTME: Each binding borrows the ApiClient and maps calls to endpoint paths and DTOs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Resource bindings
//!
//! Bindings are thin: they build an [`ApiRequest`](crate::client::ApiRequest),
//! hand it to the client, and decode the reply. Anything that also touches
//! the session lives in [`crate::account`] instead.

use runfuel_core::constants::endpoints::is_valid_segment;
use runfuel_core::errors::{AppError, AppResult};

/// `/api/v1/auth`
pub mod auth;
/// `/api/v1/calories`
pub mod calories;
/// `/api/v1/food`
pub mod food;
/// `/api/v1/gamification`
pub mod gamification;
/// `/health`
pub mod health;
/// `/api/v1/progress`
pub mod progress;
/// `/api/v1/training`
pub mod training;
/// `/api/v1/users`
pub mod users;

pub use auth::AuthApi;
pub use calories::CaloriesApi;
pub use food::{FoodApi, PhotoUpload};
pub use gamification::GamificationApi;
pub use health::HealthApi;
pub use progress::ProgressApi;
pub use training::TrainingApi;
pub use users::UsersApi;

/// Reject ids that cannot name a single resource in a path
pub(crate) fn require_id<'a>(kind: &str, id: &'a str) -> AppResult<&'a str> {
    if is_valid_segment(id) {
        Ok(id)
    } else {
        Err(AppError::invalid_input(format!("Invalid {kind} id '{id}'")))
    }
}
