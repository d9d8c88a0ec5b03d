// ABOUTME: HTTP client for the RunFuel backend with bearer injection and 401 recovery
// ABOUTME: Sends rebuildable requests, refreshes the access token once on 401, and decodes typed responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # API Client
//!
//! Every call goes through [`ApiClient::execute`]:
//!
//! 1. The current access token, if any, is attached as a bearer header
//! 2. A 401 on a request that has not been retried yet asks the
//!    [`RefreshCoordinator`] for a new token and resends the request once
//! 3. Any other non-success status becomes an [`AppError`] carrying the
//!    backend's `detail` message
//!
//! A request that fails again after the retry is returned as-is; it never
//! triggers a second refresh.

pub mod request;
pub mod response;

use crate::account::Account;
use crate::api::{
    AuthApi, CaloriesApi, FoodApi, GamificationApi, HealthApi, ProgressApi, TrainingApi, UsersApi,
};
use crate::auth::{HttpTokenRefresher, RefreshCoordinator, TokenRefresher};
use crate::config::ClientConfig;
use crate::session::SessionStore;
use reqwest::{Client, Response, StatusCode};
use runfuel_core::errors::AppResult;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub use request::{ApiRequest, MultipartField, RequestBody};
pub use response::{check_status, decode_json};

struct ClientInner {
    http: Client,
    config: ClientConfig,
    session: SessionStore,
    refresh: Arc<RefreshCoordinator>,
}

/// Shared client for the backend API
///
/// Cheap to clone; clones share the connection pool, the session, and the
/// refresh coordinator.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl ApiClient {
    /// Client for the configured backend using `session` for tokens
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the API URL is unusable
    pub fn new(config: &ClientConfig, session: SessionStore) -> AppResult<Self> {
        let http = build_http_client(config)?;
        let refresher = HttpTokenRefresher::new(http.clone(), config)?;
        Ok(Self::assemble(http, config.clone(), session, Arc::new(refresher)))
    }

    /// Client with a custom refresh implementation
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn with_refresher(
        config: &ClientConfig,
        session: SessionStore,
        refresher: Arc<dyn TokenRefresher>,
    ) -> AppResult<Self> {
        let http = build_http_client(config)?;
        Ok(Self::assemble(http, config.clone(), session, refresher))
    }

    fn assemble(
        http: Client,
        config: ClientConfig,
        session: SessionStore,
        refresher: Arc<dyn TokenRefresher>,
    ) -> Self {
        info!(api_url = %config.api_url, "API client ready");
        let refresh = Arc::new(RefreshCoordinator::new(session.clone(), refresher));
        Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                session,
                refresh,
            }),
        }
    }

    /// Send a request, recovering from one 401 by refreshing the access token
    ///
    /// # Errors
    ///
    /// Returns network errors, refresh failures, and non-success statuses
    pub async fn execute(&self, request: ApiRequest) -> AppResult<Response> {
        let token = self.inner.session.access_token().await;
        let response = self.dispatch(&request, token.as_deref()).await?;

        if response.status() == StatusCode::UNAUTHORIZED && request.recovers_on_unauthorized() {
            debug!(endpoint = request.path(), "access token rejected, refreshing");
            let fresh = self.inner.refresh.recover(token.as_deref()).await?;
            let retry = request.into_retry();
            let response = self.dispatch(&retry, Some(&fresh)).await?;
            return check_status(retry.path(), response).await;
        }

        check_status(request.path(), response).await
    }

    /// Send a request and decode the JSON response
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::execute`] plus `InvalidResponse` for bodies
    /// that do not match `T`
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<T> {
        let endpoint = request.path().to_owned();
        let response = self.execute(request).await?;
        let body = response.bytes().await?;
        decode_json(&endpoint, &body)
    }

    /// Send a request whose response body is not needed
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::execute`]
    pub async fn send_unit(&self, request: ApiRequest) -> AppResult<()> {
        self.execute(request).await.map(drop)
    }

    /// Access token newer than `rejected`, refreshing if needed
    ///
    /// With `None`, returns the current access token or refreshes when the
    /// session holds only a refresh token, as after a restore.
    ///
    /// # Errors
    ///
    /// Returns the shared refresh failure
    pub async fn refresh_access(&self, rejected: Option<&str>) -> AppResult<String> {
        self.inner.refresh.recover(rejected).await
    }

    async fn dispatch(&self, request: &ApiRequest, token: Option<&str>) -> AppResult<Response> {
        let url = self.inner.config.endpoint_url(request.path())?;
        let request_id = Uuid::new_v4().to_string();
        debug!(
            method = %request.method(),
            endpoint = request.path(),
            request_id = %request_id,
            retry = request.is_retried(),
            "sending request"
        );
        let response = request
            .to_builder(&self.inner.http, url, token, &request_id)?
            .send()
            .await?;
        debug!(
            endpoint = request.path(),
            request_id = %request_id,
            status = response.status().as_u16(),
            "response received"
        );
        Ok(response)
    }

    /// Session shared with this client
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Account flows that combine API calls with session updates
    #[must_use]
    pub const fn account(&self) -> Account<'_> {
        Account::new(self)
    }

    /// `/api/v1/auth`
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// `/api/v1/food`
    #[must_use]
    pub const fn food(&self) -> FoodApi<'_> {
        FoodApi::new(self)
    }

    /// `/api/v1/calories`
    #[must_use]
    pub const fn calories(&self) -> CaloriesApi<'_> {
        CaloriesApi::new(self)
    }

    /// `/api/v1/progress`
    #[must_use]
    pub const fn progress(&self) -> ProgressApi<'_> {
        ProgressApi::new(self)
    }

    /// `/api/v1/training`
    #[must_use]
    pub const fn training(&self) -> TrainingApi<'_> {
        TrainingApi::new(self)
    }

    /// `/api/v1/gamification`
    #[must_use]
    pub const fn gamification(&self) -> GamificationApi<'_> {
        GamificationApi::new(self)
    }

    /// `/api/v1/users`
    #[must_use]
    pub const fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// `/health`
    #[must_use]
    pub const fn health(&self) -> HealthApi<'_> {
        HealthApi::new(self)
    }
}

fn build_http_client(config: &ClientConfig) -> AppResult<Client> {
    Ok(Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()?)
}
