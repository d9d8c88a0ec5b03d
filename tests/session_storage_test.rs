// ABOUTME: Tests for session persistence on disk and session restore
// ABOUTME: Verifies the stored fields, access-token exclusion, logout clearing, and version checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use async_trait::async_trait;
use runfuel_client::session::{
    FileSessionStorage, MemorySessionStorage, PersistedSession, SessionStorage, SignOutReason,
};
use runfuel_client::SessionStore;
use runfuel_core::errors::{AppResult, ErrorCode};
use runfuel_core::models::User;
use serde_json::{json, Value};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

/// Storage whose saves take a while to land
#[derive(Default)]
struct SlowSaveStorage {
    inner: MemorySessionStorage,
}

#[async_trait]
impl SessionStorage for SlowSaveStorage {
    async fn load(&self) -> AppResult<Option<PersistedSession>> {
        self.inner.load().await
    }

    async fn save(&self, session: &PersistedSession) -> AppResult<()> {
        sleep(Duration::from_millis(100)).await;
        self.inner.save(session).await
    }

    async fn clear(&self) -> AppResult<()> {
        self.inner.clear().await
    }
}

fn storage_in(dir: &TempDir) -> FileSessionStorage {
    FileSessionStorage::new(dir.path().join("runfuel").join("runfuel-auth.json"))
}

#[tokio::test]
async fn test_missing_file_loads_as_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);

    assert!(storage.load().await?.is_none());
    // Clearing a missing file is not an error
    storage.clear().await?;
    Ok(())
}

#[tokio::test]
async fn test_persisted_file_excludes_access_token() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let path = storage.path().to_path_buf();

    let session = SessionStore::open(Arc::new(storage)).await;
    session
        .set_tokens("access-secret".into(), "refresh-1".into())
        .await;
    session
        .set_user(serde_json::from_value::<User>(common::user_json())?)
        .await;

    let raw = fs::read_to_string(&path)?;
    assert!(!raw.contains("access-secret"));

    let stored: Value = serde_json::from_str(&raw)?;
    assert_eq!(stored["version"], json!(0));
    assert_eq!(stored["state"]["refreshToken"], json!("refresh-1"));
    assert_eq!(stored["state"]["isAuthenticated"], json!(true));
    assert_eq!(stored["state"]["user"]["email"], json!("runner@example.com"));
    Ok(())
}

#[tokio::test]
async fn test_reopened_session_restores_without_access_token() -> Result<()> {
    let dir = TempDir::new()?;

    let first = SessionStore::open(Arc::new(storage_in(&dir))).await;
    first.set_tokens("access-1".into(), "refresh-1".into()).await;

    let restored = SessionStore::open(Arc::new(storage_in(&dir))).await;
    let snapshot = restored.snapshot().await;

    assert!(snapshot.is_authenticated);
    assert!(snapshot.access_token.is_none());
    assert_eq!(snapshot.refresh_token.as_deref(), Some("refresh-1"));
    Ok(())
}

#[tokio::test]
async fn test_logout_removes_persisted_session() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let path = storage.path().to_path_buf();

    let session = SessionStore::open(Arc::new(storage)).await;
    session.set_tokens("access-1".into(), "refresh-1".into()).await;
    assert!(path.exists());

    assert!(session.logout(SignOutReason::UserRequested).await);
    assert!(!path.exists());
    // Second logout has nothing to clear
    assert!(!session.logout(SignOutReason::SessionExpired).await);

    let reopened = SessionStore::open(Arc::new(storage_in(&dir))).await;
    assert!(!reopened.is_authenticated().await);
    Ok(())
}

#[tokio::test]
async fn test_logout_during_pending_save_stays_signed_out() -> Result<()> {
    let storage = Arc::new(SlowSaveStorage::default());
    let session = SessionStore::open(storage.clone()).await;

    let signing_in = {
        let session = session.clone();
        tokio::spawn(async move { session.set_tokens("a".into(), "r".into()).await })
    };
    sleep(Duration::from_millis(10)).await;
    session.logout(SignOutReason::UserRequested).await;
    signing_in.await?;

    assert!(!session.is_authenticated().await);
    assert!(storage.load().await?.is_none());
    let reopened = SessionStore::open(storage).await;
    assert!(!reopened.is_authenticated().await);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_saves_leave_one_valid_file() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = Arc::new(storage_in(&dir));
    let session = SessionStore::open(storage.clone()).await;

    let writers: Vec<_> = (0..8)
        .map(|n| {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .set_tokens(format!("a-{n}"), format!("r-{n}"))
                    .await;
            })
        })
        .collect();
    for writer in writers {
        writer.await?;
    }

    let stored = storage.load().await?.unwrap();
    assert_eq!(stored.refresh_token, session.refresh_token().await);

    let leftovers = fs::read_dir(dir.path().join("runfuel"))?
        .flatten()
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
    Ok(())
}

#[tokio::test]
async fn test_unknown_version_is_ignored() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    fs::create_dir_all(storage.path().parent().unwrap())?;
    fs::write(
        storage.path(),
        serde_json::to_vec(&json!({
            "state": { "refreshToken": "r-1", "user": null, "isAuthenticated": true },
            "version": 7
        }))?,
    )?;

    assert!(storage.load().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_corrupt_file_is_storage_error_and_open_starts_signed_out() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    fs::create_dir_all(storage.path().parent().unwrap())?;
    fs::write(storage.path(), b"{not json")?;

    let err = storage.load().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);

    let session = SessionStore::open(Arc::new(storage)).await;
    assert!(!session.is_authenticated().await);
    Ok(())
}

#[tokio::test]
async fn test_flag_without_refresh_token_restores_signed_out() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    fs::create_dir_all(storage.path().parent().unwrap())?;
    fs::write(
        storage.path(),
        serde_json::to_vec(&json!({
            "state": { "refreshToken": null, "user": null, "isAuthenticated": true },
            "version": 0
        }))?,
    )?;

    let session = SessionStore::open(Arc::new(storage)).await;
    assert!(!session.is_authenticated().await);
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn test_session_file_is_private() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let path = storage.path().to_path_buf();
    let session = SessionStore::open(Arc::new(storage)).await;
    session.set_tokens("access-1".into(), "refresh-1".into()).await;

    let mode = fs::metadata(&path)?.permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    Ok(())
}
