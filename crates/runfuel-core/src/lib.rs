// ABOUTME: Core types and constants for the RunFuel nutrition and training client
// ABOUTME: Foundation crate with error handling, backend DTOs, form validation, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RunFuel Core
//!
//! Foundation crate shared by the RunFuel client SDK and its CLI. It carries
//! no I/O: everything here is data, validation, or pure calculation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: API paths, timeouts, and storage names
//! - **models**: Backend request/response DTOs, one module per API resource
//! - **validation**: Client-side form checks that run before any network call
//! - **nutrition**: Local, non-authoritative energy-target preview

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Backend data transfer objects (auth, food, calories, progress, training, gamification, users)
pub mod models;

/// Form validation run before submitting requests
pub mod validation;

/// BMR, TDEE, and daily calorie target preview
pub mod nutrition;
