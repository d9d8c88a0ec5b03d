// ABOUTME: Validation error types for client-side form checks
// ABOUTME: Messages are user-facing and shown verbatim next to the offending form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// A form failed validation before anything was sent to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password shorter than the minimum length
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length
        min: usize,
    },

    /// A required field was left empty
    #[error("{field} is required")]
    MissingField {
        /// Human-readable field name
        field: &'static str,
    },

    /// A text field exceeds its maximum length
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Human-readable field name
        field: &'static str,
        /// Maximum accepted length
        max: usize,
    },

    /// A numeric field lies outside its accepted range
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Human-readable field name
        field: &'static str,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// A numeric field must not be negative
    #[error("{field} cannot be negative")]
    Negative {
        /// Human-readable field name
        field: &'static str,
    },
}
