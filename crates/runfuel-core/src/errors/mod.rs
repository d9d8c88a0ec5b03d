// ABOUTME: Unified error type for the RunFuel client with HTTP status mapping
// ABOUTME: Carries the backend's error detail so callers can surface it to users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the client returns [`AppResult`]. Errors fall
//! into three broad groups:
//!
//! - validation failures caught before a request is sent ([`ValidationError`])
//! - request failures, which keep the backend's `detail` message when it sent one
//! - authentication failures that end the session after a failed token refresh

/// Client-side form validation errors
pub mod validation;

pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No valid credentials were presented
    AuthRequired,
    /// Credentials were rejected (wrong password, bad reset token)
    AuthInvalid,
    /// The session could not be renewed and was cleared
    SessionExpired,
    /// Authenticated but not allowed
    PermissionDenied,

    // Validation
    /// Input rejected by client-side or server-side validation
    InvalidInput,

    // Resources
    /// Requested resource does not exist
    ResourceNotFound,
    /// Resource already exists (e.g. email already registered)
    ResourceAlreadyExists,

    // Rate limiting
    /// Backend rate limiter rejected the request
    RateLimitExceeded,

    // Transport & backend
    /// Backend returned a 5xx error
    ExternalServiceError,
    /// Backend is unreachable or returned 502/503/504
    ExternalServiceUnavailable,
    /// Connection-level failure
    NetworkError,
    /// Request exceeded its timeout
    Timeout,
    /// Backend answered with a body that does not match the expected schema
    InvalidResponse,

    // Local
    /// Configuration could not be loaded
    ConfigError,
    /// Session storage could not be read or written
    StorageError,
    /// Local serialization failed
    SerializationError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Map an HTTP error status returned by the backend to an error code
    #[must_use]
    pub const fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidInput,
            401 => Self::AuthRequired,
            403 => Self::PermissionDenied,
            404 => Self::ResourceNotFound,
            409 => Self::ResourceAlreadyExists,
            408 => Self::Timeout,
            429 => Self::RateLimitExceeded,
            502..=504 => Self::ExternalServiceUnavailable,
            500..=599 => Self::ExternalServiceError,
            _ => Self::InternalError,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication is required",
            Self::AuthInvalid => "The provided credentials are invalid",
            Self::SessionExpired => "Your session has expired, please log in again",
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "The resource already exists",
            Self::RateLimitExceeded => "Too many requests, please slow down",
            Self::ExternalServiceError => "The server encountered an error",
            Self::ExternalServiceUnavailable => "The server is currently unavailable",
            Self::NetworkError => "Could not reach the server",
            Self::Timeout => "The request timed out",
            Self::InvalidResponse => "The server sent an unexpected response",
            Self::ConfigError => "Configuration error",
            Self::StorageError => "Session storage failed",
            Self::SerializationError => "Data serialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether this code means the caller must authenticate again
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthRequired | Self::SessionExpired)
    }
}

/// Unified error type for the client
///
/// Cloneable so a single refresh failure can be handed to every request that
/// was waiting on it.
#[derive(Debug, Clone, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Developer-facing message
    pub message: String,
    /// HTTP status, when the error came from a backend response
    pub http_status: Option<u16>,
    /// The backend's `detail` field, suitable for showing to users
    pub detail: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Arc<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            http_status: None,
            detail: None,
            source: None,
        }
    }

    /// Build an error from a non-success backend response
    #[must_use]
    pub fn from_response(status: u16, endpoint: &str, detail: Option<String>) -> Self {
        let code = ErrorCode::from_http_status(status);
        Self {
            code,
            message: format!("{endpoint} returned HTTP {status}"),
            http_status: Some(status),
            detail,
            source: None,
        }
    }

    /// Attach the user-facing detail message
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Message to show a user: the backend detail when present, otherwise `fallback`
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail
            .as_deref()
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }

    /// Whether this error ends the authenticated session
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        self.code.is_auth_failure()
    }

    /// Authentication required
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "Authentication required")
    }

    /// Session could not be refreshed
    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SessionExpired, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Response body did not match the expected schema
    pub fn invalid_response(endpoint: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidResponse,
            format!("{endpoint}: {}", message.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Session storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let message = error.to_string();
        Self::new(ErrorCode::InvalidInput, message.clone())
            .with_detail(message)
            .with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let code = if error.is_timeout() {
            ErrorCode::Timeout
        } else if error.is_decode() {
            ErrorCode::InvalidResponse
        } else if let Some(status) = error.status() {
            ErrorCode::from_http_status(status.as_u16())
        } else {
            ErrorCode::NetworkError
        };
        let http_status = error.status().map(|status| status.as_u16());
        let mut app_error = Self::new(code, error.to_string()).with_source(error);
        app_error.http_status = http_status;
        app_error
    }
}

/// Extract the user-facing message from a backend error body
///
/// The backend sends `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "...", ...}]}` for request validation failures.
#[must_use]
pub fn extract_error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_from_http_status() {
        assert_eq!(ErrorCode::from_http_status(401), ErrorCode::AuthRequired);
        assert_eq!(ErrorCode::from_http_status(422), ErrorCode::InvalidInput);
        assert_eq!(ErrorCode::from_http_status(429), ErrorCode::RateLimitExceeded);
        assert_eq!(
            ErrorCode::from_http_status(503),
            ErrorCode::ExternalServiceUnavailable
        );
        assert_eq!(
            ErrorCode::from_http_status(500),
            ErrorCode::ExternalServiceError
        );
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let error = AppError::from_response(400, "/api/v1/auth/login", Some("Bad creds".into()));
        assert_eq!(error.user_message("Login failed"), "Bad creds");

        let error = AppError::from_response(500, "/api/v1/auth/login", None);
        assert_eq!(error.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_extract_string_detail() {
        let body = br#"{"detail": "Email already registered"}"#;
        assert_eq!(
            extract_error_detail(body).as_deref(),
            Some("Email already registered")
        );
    }

    #[test]
    fn test_extract_validation_detail_list() {
        let body = br#"{"detail": [{"loc": ["body", "age"], "msg": "too young"}, {"msg": "bad goal"}]}"#;
        assert_eq!(
            extract_error_detail(body).as_deref(),
            Some("too young; bad goal")
        );
    }

    #[test]
    fn test_extract_detail_from_non_json() {
        assert!(extract_error_detail(b"<html>Bad Gateway</html>").is_none());
    }

    #[test]
    fn test_validation_error_conversion_keeps_message() {
        let error = AppError::from(ValidationError::PasswordMismatch);
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.user_message("Registration failed"), "Passwords do not match");
    }
}
