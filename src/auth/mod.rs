// ABOUTME: Authentication support for outgoing requests
// ABOUTME: Re-exports the token refresher seam and the single-flight refresh coordinator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Access-token recovery
//!
//! The backend issues a short-lived access token and a long-lived refresh
//! token. When a request comes back 401, [`RefreshCoordinator`] trades the
//! refresh token for a new pair once, no matter how many requests failed at
//! the same time, and hands the new access token to all of them.

pub mod refresh;

pub use refresh::{HttpTokenRefresher, RefreshCoordinator, TokenRefresher};
