// ABOUTME: Constants module with domain-separated organization
// ABOUTME: API paths, request timeouts, session storage names, and validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// REST endpoint paths, one module per backend resource
pub mod endpoints;

/// Default network settings
pub mod network {
    /// Default backend base URL (local development server)
    pub const DEFAULT_API_URL: &str = "http://localhost:8000";
    /// Default per-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
    /// Default user agent
    pub const DEFAULT_USER_AGENT: &str = concat!("runfuel-client/", env!("CARGO_PKG_VERSION"));
}

/// Fixed timeouts for long-running AI analysis calls
pub mod analysis_timeouts {
    /// Photo analysis timeout in seconds
    pub const PHOTO_SECS: u64 = 30;
    /// Text analysis timeout in seconds
    pub const TEXT_SECS: u64 = 30;
    /// Photo plus description analysis timeout in seconds
    pub const PHOTO_WITH_TEXT_SECS: u64 = 45;
}

/// Persisted session storage
pub mod storage {
    /// Name of the persisted session entry
    pub const SESSION_ENTRY_NAME: &str = "runfuel-auth";
    /// Application directory under the platform data dir
    pub const APP_DIR: &str = "runfuel";
    /// Schema version written alongside the persisted state
    pub const SESSION_FORMAT_VERSION: u32 = 0;
}

/// Form validation limits
pub mod limits {
    /// Minimum password length accepted at registration
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    /// Maximum length of names (foods, races, plans)
    pub const MAX_NAME_LENGTH: usize = 255;
    /// Minimum user age
    pub const MIN_AGE: u32 = 13;
    /// Maximum user age
    pub const MAX_AGE: u32 = 120;
    /// Exclusive lower bound for height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Exclusive upper bound for height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Exclusive lower bound for weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Exclusive upper bound for weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Minimum generated plan length in weeks
    pub const MIN_PLAN_WEEKS: u32 = 4;
    /// Maximum generated plan length in weeks
    pub const MAX_PLAN_WEEKS: u32 = 24;
    /// Default consistency period
    pub const DEFAULT_CONSISTENCY_PERIOD: &str = "30d";
}

/// Session event channel sizing
pub mod events {
    /// Capacity of the session event broadcast channel
    pub const SESSION_EVENT_CAPACITY: usize = 16;
}
