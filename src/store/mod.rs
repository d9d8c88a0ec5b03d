// ABOUTME: Client-side state containers passed explicitly to the code that uses them
// ABOUTME: AI analysis review buffer and cached today's calorie dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ephemeral view state
//!
//! Neither store is persisted. Synchronous setters change local state only;
//! the async methods take the [`ApiClient`](crate::ApiClient) they should use.

/// Cached today's calorie log
pub mod dashboard;
/// Review buffer for AI food analysis
pub mod food_log;

pub use dashboard::DashboardStore;
pub use food_log::{AnalysisDraft, FoodLogStore};
