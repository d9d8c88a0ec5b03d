// ABOUTME: Account flows that combine form validation, API calls, and session updates
// ABOUTME: Sign-up, sign-in, sign-out, password reset, onboarding, and goal changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Account flows
//!
//! Forms are validated before any request is made, so a rejected form never
//! reaches the network. Flows that produce tokens store them and then load
//! the user record, leaving the session fully populated on success.

use crate::client::ApiClient;
use crate::session::SignOutReason;
use runfuel_core::errors::AppResult;
use runfuel_core::models::{
    Goal, LoginRequest, MessageResponse, ProfileForm, TokenResponse, User, UserProfile,
};
use runfuel_core::validation::{RegisterForm, ResetPasswordForm, Validate};
use tracing::{debug, info, warn};

/// Account operations bound to a client and its session
#[derive(Clone, Copy)]
pub struct Account<'a> {
    client: &'a ApiClient,
}

impl<'a> Account<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account and sign in
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a rejected form without contacting the
    /// backend, otherwise the backend error
    pub async fn sign_up(&self, form: RegisterForm) -> AppResult<User> {
        let request = form.into_request()?;
        let tokens = self.client.auth().register(&request).await?;
        info!(email = %request.email, "account registered");
        self.establish(tokens).await
    }

    /// Sign in with email and password
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for missing fields, `AuthRequired` for wrong credentials
    pub async fn sign_in(&self, mut credentials: LoginRequest) -> AppResult<User> {
        credentials.validate()?;
        credentials.email = credentials.email.trim().to_owned();
        let tokens = self.client.auth().login(&credentials).await?;
        self.establish(tokens).await
    }

    async fn establish(&self, tokens: TokenResponse) -> AppResult<User> {
        let session = self.client.session();
        session
            .set_tokens(tokens.access_token, tokens.refresh_token)
            .await;
        let user = self.client.users().me().await?;
        session.set_user(user.clone()).await;
        Ok(user)
    }

    /// Sign out locally, revoking the refresh token on the server when possible
    ///
    /// The local session is always cleared, even if the server call fails.
    pub async fn sign_out(&self) {
        if let Err(e) = self.revoke_session().await {
            warn!(error = %e, "server logout failed, clearing local session anyway");
        }
        self.client
            .session()
            .logout(SignOutReason::UserRequested)
            .await;
    }

    /// Revoke the refresh token the session holds when the call is made
    ///
    /// Refreshing rotates the refresh token, so the body is rebuilt from the
    /// session after any refresh rather than reusing the token read up front.
    async fn revoke_session(&self) -> AppResult<()> {
        let session = self.client.session();
        if session.refresh_token().await.is_none() {
            return Ok(());
        }
        let access = self.client.refresh_access(None).await?;

        match self.revoke_current().await {
            Err(e) if e.http_status == Some(401) => {
                debug!("access token rejected during logout, refreshing");
                self.client.refresh_access(Some(&access)).await?;
                self.revoke_current().await
            }
            other => other,
        }
    }

    async fn revoke_current(&self) -> AppResult<()> {
        let Some(refresh_token) = self.client.session().refresh_token().await else {
            return Ok(());
        };
        self.client.auth().logout(&refresh_token).await.map(drop)
    }

    /// Ask for a password reset email
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn request_password_reset(&self, email: &str) -> AppResult<MessageResponse> {
        self.client.auth().forgot_password(email).await
    }

    /// Set a new password from the reset link
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a rejected form without contacting the
    /// backend, otherwise the backend error
    pub async fn reset_password(&self, form: ResetPasswordForm) -> AppResult<MessageResponse> {
        form.validate()?;
        self.client
            .auth()
            .reset_password(&form.token, &form.new_password)
            .await
    }

    /// Submit the onboarding profile and reload the user
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a rejected form, otherwise the backend error
    pub async fn complete_onboarding(&self, form: &ProfileForm) -> AppResult<User> {
        let profile = self.client.users().update_profile(form).await?;
        info!(
            daily_target_kcal = profile.daily_target_kcal.unwrap_or_default(),
            "profile saved"
        );
        self.refresh_user().await
    }

    /// Switch the nutrition goal and reload the user
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn change_goal(&self, goal: Goal) -> AppResult<UserProfile> {
        let profile = self.client.users().update_goal(goal).await?;
        self.refresh_user().await?;
        Ok(profile)
    }

    /// Reload the user record into the session
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn refresh_user(&self) -> AppResult<User> {
        let user = self.client.users().me().await?;
        self.client.session().set_user(user.clone()).await;
        Ok(user)
    }

    /// Deactivate the account and clear the session
    ///
    /// # Errors
    ///
    /// Returns the backend error; the session is kept in that case
    pub async fn deactivate_account(&self) -> AppResult<MessageResponse> {
        let response = self.client.users().deactivate().await?;
        self.client
            .session()
            .logout(SignOutReason::UserRequested)
            .await;
        Ok(response)
    }
}
