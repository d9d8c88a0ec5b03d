// ABOUTME: Response checking and DTO decoding for backend replies
// ABOUTME: Maps non-success statuses to AppError with the server detail and fails fast on bad JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::Response;
use runfuel_core::errors::{extract_error_detail, AppError, AppResult};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Pass successful responses through, turn the rest into typed errors
///
/// # Errors
///
/// Returns an `AppError` whose code follows the HTTP status and whose detail
/// carries the backend's `detail` field when present
pub async fn check_status(endpoint: &str, response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let detail = extract_error_detail(&body);
    warn!(
        endpoint,
        status = status.as_u16(),
        detail = detail.as_deref().unwrap_or(""),
        "request failed"
    );
    Err(AppError::from_response(status.as_u16(), endpoint, detail))
}

/// Decode a response body into its DTO
///
/// # Errors
///
/// Returns `InvalidResponse` naming the endpoint when the body does not match
pub fn decode_json<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(endpoint, error = %e, "malformed response body");
        AppError::invalid_response(endpoint, e.to_string()).with_source(e)
    })
}
