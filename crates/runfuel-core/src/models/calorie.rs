// ABOUTME: Daily calorie log models
// ABOUTME: Server-computed daily aggregate with target, consumed, remaining, and status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::FoodEntry;

/// Where consumption stands relative to the target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    /// Comfortably within target
    Normal,
    /// 85% or more of the target consumed
    NearLimit,
    /// Target exceeded
    Over,
    /// Under half the target consumed
    Under,
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "on track",
            Self::NearLimit => "near limit",
            Self::Over => "over target",
            Self::Under => "under target",
        })
    }
}

/// A day's log with its entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieLog {
    /// Log id
    pub id: String,
    /// Calendar day
    pub log_date: NaiveDate,
    /// Daily target
    pub target_kcal: f64,
    /// Consumed so far
    pub consumed_kcal: f64,
    /// Target minus consumed
    pub remaining_kcal: f64,
    /// Status classification
    pub status: LogStatus,
    /// Entries logged that day
    #[serde(default)]
    pub entries: Vec<FoodEntry>,
}

impl CalorieLog {
    /// Fraction of the target consumed, 0 when the target is unset
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        if self.target_kcal > 0.0 {
            self.consumed_kcal / self.target_kcal
        } else {
            0.0
        }
    }
}

/// A day's totals without entries, used for range queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieLogSummary {
    /// Calendar day
    pub log_date: NaiveDate,
    /// Daily target
    pub target_kcal: f64,
    /// Consumed
    pub consumed_kcal: f64,
    /// Remaining
    pub remaining_kcal: f64,
    /// Status classification
    pub status: LogStatus,
}
