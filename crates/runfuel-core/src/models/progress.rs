// ABOUTME: Progress summary models for weekly, monthly, streak, and consistency views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate over a week or a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// First day of the period
    pub period_start: NaiveDate,
    /// Last day of the period
    pub period_end: NaiveDate,
    /// Average daily intake
    pub avg_intake_kcal: Option<f64>,
    /// Average daily target
    pub avg_target_kcal: Option<f64>,
    /// Total intake
    pub total_intake_kcal: Option<f64>,
    /// Days where intake stayed on target
    pub days_on_target: u32,
    /// Days with at least one entry
    pub days_logged: u32,
    /// Consistency score 0-100
    pub consistency_score: Option<f64>,
}

/// Logging streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    /// Consecutive days up to today
    pub current_streak: u32,
    /// Best streak ever
    pub longest_streak: u32,
}

/// Consistency over a period such as "30d"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyData {
    /// Score 0-100
    pub score: f64,
    /// Days on target
    pub days_on_target: u32,
    /// Days in the period
    pub total_days: u32,
    /// Period label
    pub period: String,
}
