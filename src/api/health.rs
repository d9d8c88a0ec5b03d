// ABOUTME: Binding for the backend liveness endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::{ApiClient, ApiRequest};
use runfuel_core::constants::endpoints::HEALTH;
use runfuel_core::errors::AppResult;
use runfuel_core::models::HealthStatus;

/// Health endpoint
#[derive(Clone, Copy)]
pub struct HealthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> HealthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Backend status
    ///
    /// # Errors
    ///
    /// Returns a network error when the backend is unreachable
    pub async fn check(&self) -> AppResult<HealthStatus> {
        let request = ApiRequest::get(HEALTH).without_recovery();
        self.client.send_json(request).await
    }
}
