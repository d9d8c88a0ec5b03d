// ABOUTME: Single-flight access token refresh shared by every in-flight API request
// ABOUTME: Concurrent 401s wait on one refresh call; failure clears the session exactly once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::response::{check_status, decode_json};
use crate::config::ClientConfig;
use crate::session::{SessionStore, SignOutReason};
use async_trait::async_trait;
use reqwest::Client;
use runfuel_core::constants::endpoints;
use runfuel_core::constants::network::REQUEST_ID_HEADER;
use runfuel_core::errors::{AppError, AppResult, ErrorCode};
use runfuel_core::models::{RefreshRequest, TokenResponse};
use std::mem;
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

/// Outcome delivered to each waiting request: the new access token
type RefreshWaiter = oneshot::Sender<AppResult<String>>;

/// Exchanges a refresh token for a new token pair
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Call the refresh endpoint
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the token or is unreachable
    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenResponse>;
}

/// Refresher that posts to `/api/v1/auth/refresh`
///
/// Talks to the backend directly rather than through `ApiClient` so a 401
/// from the refresh endpoint can never start another refresh.
pub struct HttpTokenRefresher {
    http: Client,
    url: Url,
}

impl HttpTokenRefresher {
    /// Refresher sharing the API client's HTTP connection pool
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the refresh URL cannot be built
    pub fn new(http: Client, config: &ClientConfig) -> AppResult<Self> {
        Ok(Self {
            http,
            url: config.endpoint_url(endpoints::auth::REFRESH)?,
        })
    }
}

#[async_trait]
impl TokenRefresher for HttpTokenRefresher {
    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenResponse> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_owned(),
        };
        let response = self
            .http
            .post(self.url.clone())
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .json(&body)
            .send()
            .await?;
        let response = check_status(endpoints::auth::REFRESH, response).await?;
        let bytes = response.bytes().await?;
        decode_json(endpoints::auth::REFRESH, &bytes)
    }
}

enum RefreshState {
    Idle,
    InFlight(Vec<RefreshWaiter>),
}

/// Coordinates token refreshes so at most one is outstanding
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
    session: SessionStore,
    refresher: Arc<dyn TokenRefresher>,
}

impl RefreshCoordinator {
    /// Coordinator updating `session` through `refresher`
    #[must_use]
    pub fn new(session: SessionStore, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self {
            state: Mutex::new(RefreshState::Idle),
            session,
            refresher,
        }
    }

    /// Obtain an access token newer than `stale`
    ///
    /// `stale` is the token the failed request was sent with. If a refresh
    /// already replaced it, the current token is returned without another
    /// refresh. Otherwise the caller joins the outstanding refresh or starts
    /// one. The refresh runs on its own task so it completes even if every
    /// waiting request is cancelled.
    ///
    /// # Errors
    ///
    /// Returns the refresh failure, shared by every waiter. The session has
    /// already been cleared when this happens.
    pub async fn recover(self: &Arc<Self>, stale: Option<&str>) -> AppResult<String> {
        let (tx, rx) = oneshot::channel();
        {
            let mut state = self.state.lock().await;
            match &mut *state {
                RefreshState::InFlight(waiters) => {
                    debug!(waiting = waiters.len() + 1, "joining token refresh in progress");
                    waiters.push(tx);
                }
                RefreshState::Idle => {
                    if let Some(current) = self.session.access_token().await {
                        if stale != Some(current.as_str()) {
                            return Ok(current);
                        }
                    }
                    *state = RefreshState::InFlight(vec![tx]);
                    let coordinator = Arc::clone(self);
                    tokio::spawn(async move { coordinator.settle().await });
                }
            }
        }

        rx.await
            .map_err(|_| AppError::internal("Token refresh ended without a result"))?
    }

    async fn settle(&self) {
        let used = self.session.refresh_token().await;
        let outcome = self.run_refresh(used.as_deref()).await;

        let waiters = {
            let mut state = self.state.lock().await;
            if matches!(&outcome, Err(e) if e.code == ErrorCode::SessionExpired) {
                // Cleared before waiters resume so none of them sees the old session
                self.session
                    .logout_if(used.as_deref(), SignOutReason::SessionExpired)
                    .await;
            }
            match mem::replace(&mut *state, RefreshState::Idle) {
                RefreshState::InFlight(waiters) => waiters,
                RefreshState::Idle => Vec::new(),
            }
        };

        for waiter in waiters {
            // A waiter whose request was dropped no longer listens
            let _ = waiter.send(outcome.clone());
        }
    }

    async fn run_refresh(&self, refresh_token: Option<&str>) -> AppResult<String> {
        let Some(refresh_token) = refresh_token else {
            warn!("access token rejected and no refresh token is stored");
            return Err(AppError::session_expired("No refresh token available"));
        };

        match self.refresher.refresh(refresh_token).await {
            Ok(tokens) => {
                let access = tokens.access_token.clone();
                let installed = self
                    .session
                    .replace_tokens_if(refresh_token, tokens.access_token, tokens.refresh_token)
                    .await;
                if !installed {
                    info!("session changed during token refresh, discarding new tokens");
                    return Err(AppError::new(
                        ErrorCode::AuthRequired,
                        "Signed out while the access token was being refreshed",
                    ));
                }
                info!("access token refreshed");
                Ok(access)
            }
            Err(e) => {
                warn!(error = %e, "token refresh failed");
                let mut expired =
                    AppError::session_expired("Session expired, please sign in again");
                expired.http_status = e.http_status;
                Err(expired.with_source(e))
            }
        }
    }
}
