// ABOUTME: Process-wide authentication session with persistence and change notifications
// ABOUTME: Holds the token pair and current user, hydrates from storage, and broadcasts sign-in/out events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session
//!
//! [`SessionStore`] is the single source of truth for "who is signed in".
//! It is cheap to clone; every clone shares the same state. Each mutation is
//! written through to a [`SessionStorage`] backend and announced on a
//! broadcast channel so a front end can react to sign-out without polling.
//!
//! Mutations are serialized with their write to storage, so the stored entry
//! always matches the last state change. Storage failures are logged and
//! never fail the mutation: the in-memory session stays authoritative for
//! the lifetime of the process.

pub mod storage;

use runfuel_core::constants::events::SESSION_EVENT_CAPACITY;
use runfuel_core::models::User;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::{debug, info, warn};

pub use storage::{FileSessionStorage, MemorySessionStorage, PersistedSession, SessionStorage};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutReason {
    /// The user asked to sign out
    UserRequested,
    /// A token refresh failed
    SessionExpired,
}

/// Session change notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Tokens stored while signed out
    SignedIn,
    /// Tokens replaced while already signed in
    TokensRefreshed,
    /// The current user record changed
    UserUpdated,
    /// The session was cleared
    SignedOut(SignOutReason),
}

/// Current session state
#[derive(Clone, Default, PartialEq)]
pub struct Session {
    /// Bearer token for API calls, never persisted
    pub access_token: Option<String>,
    /// Token used to obtain new access tokens
    pub refresh_token: Option<String>,
    /// Current user
    pub user: Option<User>,
    /// Whether the user is signed in
    pub is_authenticated: bool,
}

impl Session {
    fn persisted(&self) -> PersistedSession {
        PersistedSession {
            refresh_token: self.refresh_token.clone(),
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    fn is_empty(&self) -> bool {
        !self.is_authenticated
            && self.access_token.is_none()
            && self.refresh_token.is_none()
            && self.user.is_none()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("user", &self.user.as_ref().map(|user| &user.email))
            .field("is_authenticated", &self.is_authenticated)
            .finish()
    }
}

struct SessionInner {
    state: RwLock<Session>,
    // Held from a state change until storage reflects it
    writes: Mutex<()>,
    storage: Arc<dyn SessionStorage>,
    events: broadcast::Sender<SessionEvent>,
}

/// Shared handle to the authentication session
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open a session backed by `storage`, restoring whatever was saved
    ///
    /// A restored session has no access token; it is marked authenticated
    /// only when the saved entry says so and still carries a refresh token.
    /// An unreadable entry is logged and treated as signed out.
    pub async fn open(storage: Arc<dyn SessionStorage>) -> Self {
        let restored = match storage.load().await {
            Ok(Some(saved)) => {
                let is_authenticated = saved.is_authenticated && saved.refresh_token.is_some();
                Session {
                    access_token: None,
                    refresh_token: saved.refresh_token,
                    user: saved.user,
                    is_authenticated,
                }
            }
            Ok(None) => Session::default(),
            Err(e) => {
                warn!(error = %e, "could not restore saved session, starting signed out");
                Session::default()
            }
        };
        debug!(authenticated = restored.is_authenticated, "session opened");
        Self::with_state(restored, storage)
    }

    /// Session that is never written to disk
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_state(Session::default(), Arc::new(MemorySessionStorage::new()))
    }

    fn with_state(state: Session, storage: Arc<dyn SessionStorage>) -> Self {
        let (events, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        Self {
            inner: Arc::new(SessionInner {
                state: RwLock::new(state),
                writes: Mutex::new(()),
                storage,
                events,
            }),
        }
    }

    /// Store a new token pair and mark the session authenticated
    pub async fn set_tokens(&self, access_token: String, refresh_token: String) {
        let _write = self.inner.writes.lock().await;
        let (event, persisted) = {
            let mut state = self.inner.state.write().await;
            Self::install_tokens(&mut state, access_token, refresh_token)
        };
        self.persist(&persisted).await;
        self.announce_tokens(event);
    }

    /// Store a new token pair only if the session still holds `expected_refresh`
    ///
    /// Returns `false` and leaves the session untouched when it was signed out
    /// or given other tokens in the meantime.
    pub async fn replace_tokens_if(
        &self,
        expected_refresh: &str,
        access_token: String,
        refresh_token: String,
    ) -> bool {
        let _write = self.inner.writes.lock().await;
        let (event, persisted) = {
            let mut state = self.inner.state.write().await;
            if state.refresh_token.as_deref() != Some(expected_refresh) {
                return false;
            }
            Self::install_tokens(&mut state, access_token, refresh_token)
        };
        self.persist(&persisted).await;
        self.announce_tokens(event);
        true
    }

    fn install_tokens(
        state: &mut Session,
        access_token: String,
        refresh_token: String,
    ) -> (SessionEvent, PersistedSession) {
        let event = if state.is_authenticated {
            SessionEvent::TokensRefreshed
        } else {
            SessionEvent::SignedIn
        };
        state.access_token = Some(access_token);
        state.refresh_token = Some(refresh_token);
        state.is_authenticated = true;
        (event, state.persisted())
    }

    fn announce_tokens(&self, event: SessionEvent) {
        if event == SessionEvent::SignedIn {
            info!("signed in");
        }
        self.emit(event);
    }

    /// Replace the current user
    pub async fn set_user(&self, user: User) {
        let _write = self.inner.writes.lock().await;
        let persisted = {
            let mut state = self.inner.state.write().await;
            state.user = Some(user);
            state.persisted()
        };
        self.persist(&persisted).await;
        self.emit(SessionEvent::UserUpdated);
    }

    /// Clear the session and its stored entry
    ///
    /// Returns `false` without doing anything when the session is already
    /// empty, so concurrent callers clear storage and announce sign-out once.
    pub async fn logout(&self, reason: SignOutReason) -> bool {
        let _write = self.inner.writes.lock().await;
        {
            let mut state = self.inner.state.write().await;
            if state.is_empty() {
                return false;
            }
            *state = Session::default();
        }
        self.clear_storage(reason).await;
        true
    }

    /// Clear the session only if it still holds `expected_refresh`
    ///
    /// Used when a refresh fails, so a sign-in that happened meanwhile
    /// survives the stale failure.
    pub async fn logout_if(&self, expected_refresh: Option<&str>, reason: SignOutReason) -> bool {
        let _write = self.inner.writes.lock().await;
        {
            let mut state = self.inner.state.write().await;
            if state.is_empty() || state.refresh_token.as_deref() != expected_refresh {
                return false;
            }
            *state = Session::default();
        }
        self.clear_storage(reason).await;
        true
    }

    async fn clear_storage(&self, reason: SignOutReason) {
        if let Err(e) = self.inner.storage.clear().await {
            warn!(error = %e, "failed to clear saved session");
        }
        info!(reason = ?reason, "signed out");
        self.emit(SessionEvent::SignedOut(reason));
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> Session {
        self.inner.state.read().await.clone()
    }

    /// Current access token
    pub async fn access_token(&self) -> Option<String> {
        self.inner.state.read().await.access_token.clone()
    }

    /// Current refresh token
    pub async fn refresh_token(&self) -> Option<String> {
        self.inner.state.read().await.refresh_token.clone()
    }

    /// Current user
    pub async fn user(&self) -> Option<User> {
        self.inner.state.read().await.user.clone()
    }

    /// Whether the user is signed in
    pub async fn is_authenticated(&self) -> bool {
        self.inner.state.read().await.is_authenticated
    }

    /// Receive future session events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    async fn persist(&self, persisted: &PersistedSession) {
        if let Err(e) = self.inner.storage.save(persisted).await {
            warn!(error = %e, "failed to save session");
        }
    }

    fn emit(&self, event: SessionEvent) {
        // No receivers is fine
        let _ = self.inner.events.send(event);
    }
}
