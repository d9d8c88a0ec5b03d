// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Builds clients against a wiremock backend and provides backend JSON payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `runfuel_client`

use runfuel_client::config::ClientConfig;
use runfuel_client::session::{MemorySessionStorage, PersistedSession};
use runfuel_client::{ApiClient, SessionStore};
use runfuel_core::models::User;
use serde_json::{json, Value};
use std::sync::{Arc, Once};
use url::Url;
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Client configuration pointing at the mock backend, never touching disk
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(Url::parse(&server.uri()).unwrap()).without_persistence()
}

/// Signed-out client and its session
pub fn create_test_client(server: &MockServer) -> (ApiClient, SessionStore) {
    init_test_logging();
    let session = SessionStore::in_memory();
    let client = ApiClient::new(&test_config(server), session.clone()).unwrap();
    (client, session)
}

/// Client whose session already holds `access` / `refresh`
pub async fn create_signed_in_client(
    server: &MockServer,
    access: &str,
    refresh: &str,
) -> (ApiClient, SessionStore) {
    let (client, session) = create_test_client(server);
    session.set_tokens(access.to_owned(), refresh.to_owned()).await;
    (client, session)
}

/// Session restored from storage: refresh token and user, no access token
pub async fn create_restored_session(refresh: &str) -> SessionStore {
    let storage = MemorySessionStorage::with_entry(PersistedSession {
        refresh_token: Some(refresh.to_owned()),
        user: Some(serde_json::from_value::<User>(user_json()).unwrap()),
        is_authenticated: true,
    });
    SessionStore::open(Arc::new(storage)).await
}

// ---- Backend payloads ----

pub fn token_json(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

pub fn user_json() -> Value {
    json!({
        "id": "5f0c8a1e-3b7d-4c52-9e61-0a2b3c4d5e6f",
        "email": "runner@example.com",
        "is_active": true,
        "has_profile": true,
        "profile": {
            "age": 30,
            "gender": "male",
            "height_cm": 180.0,
            "weight_kg": 75.0,
            "running_frequency": "3-4",
            "training_intensity": "moderate",
            "goal": "deficit",
            "bmr": 1755.0,
            "tdee": 2720.25,
            "daily_target_kcal": 2320.0
        }
    })
}

pub fn food_entry_json(id: &str, name: &str, calories: f64, favorite: bool) -> Value {
    json!({
        "id": id,
        "meal_type": "lunch",
        "source": "manual",
        "food_name": name,
        "portion_desc": "1 bowl",
        "calories": calories,
        "protein_g": 12.0,
        "carbs_g": 40.0,
        "fat_g": 8.0,
        "fiber_g": null,
        "photo_url": null,
        "ai_confidence": null,
        "is_favorite": favorite,
        "created_at": "2025-03-01T12:15:00.123456"
    })
}

pub fn calorie_log_json(consumed: f64, entries: Vec<Value>) -> Value {
    json!({
        "id": "log-1",
        "log_date": "2025-03-01",
        "target_kcal": 2300.0,
        "consumed_kcal": consumed,
        "remaining_kcal": 2300.0 - consumed,
        "status": "normal",
        "entries": entries
    })
}

pub fn analysis_json() -> Value {
    json!({
        "items": [
            {
                "name": "Grilled chicken",
                "portion": "150 g",
                "calories": 248.0,
                "protein_g": 46.0,
                "carbs_g": 0.0,
                "fat_g": 5.4,
                "fiber_g": 0.0,
                "confidence": 0.92,
                "health_rating": "healthy"
            },
            {
                "name": "White rice",
                "portion": "1 cup",
                "calories": 205.0,
                "protein_g": 4.3,
                "carbs_g": 45.0,
                "fat_g": 0.4,
                "fiber_g": 0.6,
                "confidence": 0.88
            }
        ],
        "total_calories": 460.0,
        "meal_notes": "Balanced plate",
        "health_evaluation": "healthy",
        "health_tip": "Add vegetables for fiber"
    })
}

pub fn streak_json() -> Value {
    json!({ "current_streak": 4, "longest_streak": 12 })
}
