// ABOUTME: Configuration module for the RunFuel client
// ABOUTME: Environment-only settings for the backend URL, timeouts, and session storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the RunFuel client
//!
//! There is no configuration file. Every setting comes from an environment
//! variable with a default suited to local development.

/// Client configuration loaded from environment variables
pub mod environment;

pub use environment::ClientConfig;
