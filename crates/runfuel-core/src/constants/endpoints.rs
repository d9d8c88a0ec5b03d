// ABOUTME: REST endpoint paths for the RunFuel backend API
// ABOUTME: Static paths as constants, parameterized paths as small builder functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;

/// Percent-encode an id for use as one path segment
///
/// `/`, `?` and `#` are escaped so an id can never change the request
/// target. Dot-only ids are still dot segments after encoding and must be
/// rejected by the caller, see [`is_valid_segment`].
#[must_use]
pub fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Whether `id` can be used as a path segment
#[must_use]
pub fn is_valid_segment(id: &str) -> bool {
    !id.trim().is_empty() && id != "." && id != ".."
}

/// Health check
pub const HEALTH: &str = "/health";

/// `/api/v1/auth/*`
pub mod auth {
    /// Create an account
    pub const REGISTER: &str = "/api/v1/auth/register";
    /// Exchange credentials for tokens
    pub const LOGIN: &str = "/api/v1/auth/login";
    /// Exchange a refresh token for a new token pair
    pub const REFRESH: &str = "/api/v1/auth/refresh";
    /// Revoke a refresh token
    pub const LOGOUT: &str = "/api/v1/auth/logout";
    /// Request a password reset email
    pub const FORGOT_PASSWORD: &str = "/api/v1/auth/forgot-password";
    /// Set a new password using a reset token
    pub const RESET_PASSWORD: &str = "/api/v1/auth/reset-password";
}

/// `/api/v1/users/*`
pub mod users {
    /// Current user
    pub const ME: &str = "/api/v1/users/me";
    /// Current user's profile
    pub const PROFILE: &str = "/api/v1/users/me/profile";
    /// Current user's goal
    pub const GOAL: &str = "/api/v1/users/me/goal";
}

/// `/api/v1/food/*`
pub mod food {
    /// AI analysis of a photo
    pub const ANALYZE_PHOTO: &str = "/api/v1/food/analyze-photo";
    /// AI analysis of a text description
    pub const ANALYZE_TEXT: &str = "/api/v1/food/analyze-text";
    /// AI analysis of a photo with a description
    pub const ANALYZE_PHOTO_TEXT: &str = "/api/v1/food/analyze-photo-text";
    /// Save reviewed AI items as entries
    pub const CONFIRM_ANALYSIS: &str = "/api/v1/food/confirm-analysis";
    /// Manual entry
    pub const MANUAL: &str = "/api/v1/food/manual";
    /// Search previous foods
    pub const SEARCH: &str = "/api/v1/food/search";
    /// Favorite foods
    pub const FAVORITES: &str = "/api/v1/food/favorites";

    /// Toggle favorite flag of an entry
    #[must_use]
    pub fn favorite(entry_id: &str) -> String {
        format!("{FAVORITES}/{}", super::segment(entry_id))
    }
}

/// `/api/v1/calories/*`
pub mod calories {
    /// Today's log
    pub const TODAY: &str = "/api/v1/calories/today";
    /// Summaries for a date range
    pub const RANGE: &str = "/api/v1/calories/range";

    /// Log for a specific date
    #[must_use]
    pub fn by_date(date: &str) -> String {
        format!("/api/v1/calories/date/{}", super::segment(date))
    }

    /// A single food entry
    #[must_use]
    pub fn entry(entry_id: &str) -> String {
        format!("/api/v1/calories/entry/{}", super::segment(entry_id))
    }
}

/// `/api/v1/progress/*`
pub mod progress {
    /// Weekly summary
    pub const WEEKLY: &str = "/api/v1/progress/weekly";
    /// Monthly summary
    pub const MONTHLY: &str = "/api/v1/progress/monthly";
    /// Logging streak
    pub const STREAK: &str = "/api/v1/progress/streak";
    /// Consistency score
    pub const CONSISTENCY: &str = "/api/v1/progress/consistency";
}

/// `/api/v1/training/*`
pub mod training {
    /// Races collection
    pub const RACES: &str = "/api/v1/training/races";
    /// Plans collection
    pub const PLANS: &str = "/api/v1/training/plans";
    /// AI plan generation
    pub const GENERATE_PLAN: &str = "/api/v1/training/plans/generate";
    /// Sessions of one week
    pub const WEEK: &str = "/api/v1/training/week";
    /// Weekly feedback generation
    pub const FEEDBACK: &str = "/api/v1/training/feedback";

    /// A single race
    #[must_use]
    pub fn race(race_id: &str) -> String {
        format!("{RACES}/{}", super::segment(race_id))
    }

    /// A single plan
    #[must_use]
    pub fn plan(plan_id: &str) -> String {
        format!("{PLANS}/{}", super::segment(plan_id))
    }

    /// A single training session
    #[must_use]
    pub fn session(session_id: &str) -> String {
        format!("/api/v1/training/sessions/{}", super::segment(session_id))
    }
}

/// `/api/v1/gamification/*`
pub mod gamification {
    /// XP, level, and streak stats
    pub const STATS: &str = "/api/v1/gamification/stats";
    /// Badge catalogue with earned flags
    pub const BADGES: &str = "/api/v1/gamification/badges";
    /// Score for one day
    pub const DAILY_SCORE: &str = "/api/v1/gamification/daily-score";
    /// Evaluate and award newly earned badges
    pub const CHECK_BADGES: &str = "/api/v1/gamification/check-badges";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_cannot_escape_their_segment() {
        assert_eq!(
            calories::entry("a/b?c#d"),
            "/api/v1/calories/entry/a%2Fb%3Fc%23d"
        );
        assert_eq!(training::race("r-1"), "/api/v1/training/races/r-1");
    }

    #[test]
    fn test_dot_and_blank_segments_are_invalid() {
        assert!(is_valid_segment("e-1"));
        assert!(!is_valid_segment(".."));
        assert!(!is_valid_segment("."));
        assert!(!is_valid_segment("  "));
    }
}
