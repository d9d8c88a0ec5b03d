// ABOUTME: Authentication request and response payloads
// ABOUTME: Login, registration, token refresh, logout, and password reset bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials for `POST /auth/login`
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Body for `POST /auth/register`
#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Account email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

// Passwords stay out of logs
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Token pair returned by login, register, and refresh
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Short-lived bearer token
    pub access_token: String,
    /// Long-lived token used to obtain new access tokens
    pub refresh_token: String,
    /// Token type, normally "bearer"
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Body for `POST /auth/refresh` and `POST /auth/logout`
#[derive(Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The stored refresh token
    pub refresh_token: String,
}

/// Body for `POST /auth/forgot-password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Account email
    pub email: String,
}

/// Body for `POST /auth/reset-password`
#[derive(Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// Reset token from the email link
    pub token: String,
    /// New plain-text password
    pub new_password: String,
}

/// Generic `{"message": "..."}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}
