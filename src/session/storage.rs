// ABOUTME: Durable storage backends for the persisted part of the session
// ABOUTME: JSON file storage for the CLI and an in-memory backend for tests and ephemeral clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session persistence
//!
//! Only `{refreshToken, user, isAuthenticated}` is written. The access token
//! is short-lived and stays in memory; a restored session obtains a new one
//! through the refresh flow on its first request.

use async_trait::async_trait;
use runfuel_core::constants::storage::SESSION_FORMAT_VERSION;
use runfuel_core::errors::{AppError, AppResult};
use runfuel_core::models::User;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

/// The persisted subset of the session
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    /// Long-lived refresh token
    pub refresh_token: Option<String>,
    /// Last known user
    pub user: Option<User>,
    /// Whether the user was signed in
    pub is_authenticated: bool,
}

impl fmt::Debug for PersistedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedSession")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("user", &self.user.as_ref().map(|user| &user.email))
            .field("is_authenticated", &self.is_authenticated)
            .finish()
    }
}

// On-disk layout: {"state": {...}, "version": 0}
#[derive(Serialize, Deserialize)]
struct PersistedEnvelope {
    state: PersistedSession,
    version: u32,
}

/// Backend for the persisted session entry
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read the stored entry, `None` when nothing has been saved
    async fn load(&self) -> AppResult<Option<PersistedSession>>;

    /// Replace the stored entry
    async fn save(&self, session: &PersistedSession) -> AppResult<()>;

    /// Remove the stored entry
    async fn clear(&self) -> AppResult<()>;
}

/// JSON file holding the `runfuel-auth` entry
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Storage at `path`; parent directories are created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, err: io::Error) -> AppError {
        AppError::storage(format!(
            "Failed to {action} session file {}: {err}",
            self.path.display()
        ))
        .with_source(err)
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> AppResult<Option<PersistedSession>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.storage_error("read", err)),
        };

        let envelope: PersistedEnvelope = serde_json::from_slice(&raw).map_err(|e| {
            AppError::storage(format!(
                "Session file {} is corrupt: {e}",
                self.path.display()
            ))
        })?;

        if envelope.version != SESSION_FORMAT_VERSION {
            warn!(
                found = envelope.version,
                expected = SESSION_FORMAT_VERSION,
                "ignoring session file with unknown format version"
            );
            return Ok(None);
        }
        Ok(Some(envelope.state))
    }

    async fn save(&self, session: &PersistedSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error("create directory for", e))?;
        }

        let envelope = PersistedEnvelope {
            state: session.clone(),
            version: SESSION_FORMAT_VERSION,
        };
        let body = serde_json::to_vec_pretty(&envelope)?;

        // Write then rename so a crash never leaves a half-written file.
        // Each save gets its own temp file so writers never share one.
        let tmp = self
            .path
            .with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
        fs::write(&tmp, body)
            .await
            .map_err(|e| self.storage_error("write", e))?;
        restrict_permissions(&tmp).await;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.storage_error("replace", e));
        }

        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "session file removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.storage_error("remove", err)),
        }
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = fs::set_permissions(path, Permissions::from_mode(0o600)).await {
        warn!(path = %path.display(), error = %e, "could not restrict session file permissions");
    }
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) {}

/// Storage that lives as long as the process
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: Mutex<Option<PersistedSession>>,
}

impl MemorySessionStorage {
    /// Empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with an entry, as if saved by an earlier run
    #[must_use]
    pub fn with_entry(session: PersistedSession) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn load(&self) -> AppResult<Option<PersistedSession>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, session: &PersistedSession) -> AppResult<()> {
        *self.slot.lock().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.slot.lock().await = None;
        Ok(())
    }
}
