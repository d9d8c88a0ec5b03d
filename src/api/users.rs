// ABOUTME: Bindings for /api/v1/users: current user, profile, goal, and account deactivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::{ApiClient, ApiRequest};
use runfuel_core::constants::endpoints::users;
use runfuel_core::errors::AppResult;
use runfuel_core::models::{Goal, GoalUpdate, MessageResponse, ProfileForm, User, UserProfile};
use runfuel_core::validation::Validate;

/// User endpoints
#[derive(Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// The signed-in user
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` or `SessionExpired` when not signed in
    pub async fn me(&self) -> AppResult<User> {
        self.client.send_json(ApiRequest::get(users::ME)).await
    }

    /// Create or replace the profile; the backend recomputes energy targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid form, otherwise the backend error
    pub async fn update_profile(&self, form: &ProfileForm) -> AppResult<UserProfile> {
        form.validate()?;
        let request = ApiRequest::put(users::PROFILE).json(form)?;
        self.client.send_json(request).await
    }

    /// Change the nutrition goal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the profile does not exist yet
    pub async fn update_goal(&self, goal: Goal) -> AppResult<UserProfile> {
        let request = ApiRequest::patch(users::GOAL).json(&GoalUpdate { goal })?;
        self.client.send_json(request).await
    }

    /// Deactivate the account
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn deactivate(&self) -> AppResult<MessageResponse> {
        self.client.send_json(ApiRequest::delete(users::ME)).await
    }
}
