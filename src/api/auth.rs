// ABOUTME: Bindings for /api/v1/auth: register, login, refresh, logout, and password reset
// ABOUTME: Credential endpoints never trigger token recovery since their 401 means bad credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::{ApiClient, ApiRequest};
use runfuel_core::constants::endpoints::auth;
use runfuel_core::errors::AppResult;
use runfuel_core::models::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, RefreshRequest, RegisterRequest,
    ResetPasswordRequest, TokenResponse,
};

/// Authentication endpoints
#[derive(Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account and receive its first token pair
    ///
    /// # Errors
    ///
    /// Returns the backend error, e.g. when the email is already registered
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<TokenResponse> {
        let request = ApiRequest::post(auth::REGISTER)
            .without_recovery()
            .json(request)?;
        self.client.send_json(request).await
    }

    /// Exchange credentials for a token pair
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` for wrong credentials
    pub async fn login(&self, request: &LoginRequest) -> AppResult<TokenResponse> {
        let request = ApiRequest::post(auth::LOGIN)
            .without_recovery()
            .json(request)?;
        self.client.send_json(request).await
    }

    /// Exchange a refresh token for a new pair without touching the session
    ///
    /// # Errors
    ///
    /// Returns the backend error when the refresh token is invalid or expired
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenResponse> {
        let request = ApiRequest::post(auth::REFRESH)
            .without_recovery()
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_owned(),
            })?;
        self.client.send_json(request).await
    }

    /// Revoke a refresh token on the server
    ///
    /// Needs a valid access token. A 401 is returned as is: a refresh would
    /// rotate the token named in the body, so the caller retries with the
    /// new one.
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn logout(&self, refresh_token: &str) -> AppResult<MessageResponse> {
        let request = ApiRequest::post(auth::LOGOUT)
            .without_recovery()
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_owned(),
            })?;
        self.client.send_json(request).await
    }

    /// Ask the backend to email a password reset link
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn forgot_password(&self, email: &str) -> AppResult<MessageResponse> {
        let request = ApiRequest::post(auth::FORGOT_PASSWORD)
            .without_recovery()
            .json(&ForgotPasswordRequest {
                email: email.trim().to_owned(),
            })?;
        self.client.send_json(request).await
    }

    /// Set a new password with the token from the reset link
    ///
    /// # Errors
    ///
    /// Returns the backend error, e.g. for an expired reset token
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> AppResult<MessageResponse> {
        let request = ApiRequest::post(auth::RESET_PASSWORD)
            .without_recovery()
            .json(&ResetPasswordRequest {
                token: token.to_owned(),
                new_password: new_password.to_owned(),
            })?;
        self.client.send_json(request).await
    }
}
