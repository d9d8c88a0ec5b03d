// ABOUTME: Gamification models: XP stats, badges, daily scores, and weekly coach feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Badge definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge id
    pub id: String,
    /// Stable key ("first_log", "streak_7", ...)
    pub key: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Icon name
    pub icon: String,
    /// Grouping category
    pub category: String,
    /// Tier, higher is rarer
    pub tier: u32,
    /// XP granted when earned
    pub xp_reward: u32,
}

/// A badge together with whether the user earned it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBadgeInfo {
    /// Badge definition
    pub badge: Badge,
    /// When it was earned
    #[serde(default, with = "timestamp::option")]
    pub earned_at: Option<DateTime<Utc>>,
    /// Whether it was earned
    pub earned: bool,
}

/// Badge awarded by `POST /gamification/check-badges`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardedBadge {
    /// Stable key
    pub key: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Icon name
    pub icon: String,
    /// XP granted
    pub xp_reward: u32,
}

/// XP, level, and streak statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Lifetime XP
    pub total_xp: u32,
    /// Current level
    pub level: u32,
    /// XP needed to reach the next level
    pub xp_for_next_level: u32,
    /// Progress toward the next level, 0 to 1
    pub xp_progress: f64,
    /// Current streak
    pub current_streak: u32,
    /// Best streak
    pub longest_streak: u32,
    /// Entries logged
    pub total_logs: u32,
    /// Photos analyzed
    pub total_photos: u32,
    /// Weeks with every day on target
    pub perfect_weeks: u32,
    /// Days on target
    pub days_on_target: u32,
}

/// Score for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyScore {
    /// Day scored
    pub date: NaiveDate,
    /// Points for calorie accuracy
    pub calorie_score: u32,
    /// Points for logging
    pub logging_bonus: u32,
    /// Points for the streak
    pub streak_bonus: u32,
    /// Sum of the above
    pub total_score: u32,
    /// Headline message
    pub message: String,
    /// Encouragement line
    pub encouragement: String,
}

/// AI coach feedback for a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyFeedback {
    /// Feedback id
    pub id: String,
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Sunday of the week
    pub week_end: NaiveDate,
    /// Nutrition score 0-100
    pub nutrition_score: u32,
    /// Training score 0-100
    pub training_score: u32,
    /// Overall score 0-100
    pub overall_score: u32,
    /// Nutrition commentary
    pub nutrition_feedback: Option<String>,
    /// Training commentary
    pub training_feedback: Option<String>,
    /// Suggestions for next week
    pub ai_suggestions: Option<String>,
    /// Highlights of the week
    pub highlights: Option<String>,
    /// Creation timestamp
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}
