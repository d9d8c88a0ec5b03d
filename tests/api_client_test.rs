// ABOUTME: Integration tests for the API client's bearer injection and 401 recovery
// ABOUTME: Covers single-flight refresh, retry limits, forced logout, and error propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use runfuel_client::session::{SessionEvent, SignOutReason};
use runfuel_client::ApiClient;
use runfuel_core::errors::ErrorCode;
use runfuel_core::models::LoginRequest;
use serde_json::json;
use std::time::Duration;
use tokio::sync::broadcast::error::TryRecvError;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REFRESH_PATH: &str = "/api/v1/auth/refresh";

async fn mount_refresh_success(server: &MockServer, from: &str, access: &str, refresh: &str) {
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .and(body_json(json!({ "refresh_token": from })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::token_json(access, refresh))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_no_refresh(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

fn unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(json!({ "detail": "Could not validate credentials" }))
}

#[tokio::test]
async fn test_bearer_token_and_request_id_are_sent() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("authorization", "Bearer access-1"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;
    let user = client.users().me().await?;

    assert_eq!(user.email, "runner@example.com");
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_request_is_refreshed_and_retried() -> Result<()> {
    let server = MockServer::start().await;
    mount_refresh_success(&server, "refresh-1", "access-2", "refresh-2").await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;
    let mut events = session.subscribe();

    client.users().me().await?;

    assert_eq!(session.access_token().await.as_deref(), Some("access-2"));
    assert_eq!(session.refresh_token().await.as_deref(), Some("refresh-2"));
    assert_eq!(events.try_recv()?, SessionEvent::TokensRefreshed);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_unauthorized_requests_share_one_refresh() -> Result<()> {
    const REQUESTS: u64 = 5;

    let server = MockServer::start().await;
    mount_refresh_success(&server, "refresh-1", "access-2", "refresh-2").await;
    Mock::given(method("GET"))
        .and(path("/api/v1/progress/streak"))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::streak_json()))
        .expect(REQUESTS)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/progress/streak"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(unauthorized())
        .mount(&server)
        .await;

    let (client, _session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;

    let handles: Vec<_> = (0..REQUESTS)
        .map(|_| {
            let client: ApiClient = client.clone();
            tokio::spawn(async move { client.progress().streak().await })
        })
        .collect();

    for handle in handles {
        let streak = handle.await??;
        assert_eq!(streak.current_streak, 4);
    }
    // Mock expectations (one refresh, five resubmissions) are verified on drop
    Ok(())
}

#[tokio::test]
async fn test_retried_request_is_not_retried_again() {
    let server = MockServer::start().await;
    mount_refresh_success(&server, "refresh-1", "access-2", "refresh-2").await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(unauthorized())
        .expect(2)
        .mount(&server)
        .await;

    let (client, session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;
    let err = client.users().me().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::AuthRequired);
    assert_eq!(err.http_status, Some(401));
    // The refresh itself succeeded, so the session stays
    assert!(session.is_authenticated().await);
}

#[tokio::test]
async fn test_refresh_failure_rejects_all_waiters_and_signs_out_once() {
    const REQUESTS: usize = 3;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "Invalid refresh token" }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/calories/today"))
        .respond_with(unauthorized())
        .mount(&server)
        .await;

    let (client, session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;
    let mut events = session.subscribe();

    let handles: Vec<_> = (0..REQUESTS)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.calories().today().await })
        })
        .collect();

    for handle in handles {
        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionExpired);
    }

    assert!(!session.is_authenticated().await);
    assert!(session.refresh_token().await.is_none());

    let mut sign_outs = 0;
    loop {
        match events.try_recv() {
            Ok(SessionEvent::SignedOut(reason)) => {
                assert_eq!(reason, SignOutReason::SessionExpired);
                sign_outs += 1;
            }
            Ok(_) => {}
            Err(TryRecvError::Empty) => break,
            Err(e) => panic!("unexpected receive error: {e}"),
        }
    }
    assert_eq!(sign_outs, 1);
}

#[tokio::test]
async fn test_missing_refresh_token_fails_without_refresh_call() {
    let server = MockServer::start().await;
    mount_no_refresh(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = common::create_test_client(&server);
    let err = client.users().me().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::SessionExpired);
}

#[tokio::test]
async fn test_restored_session_refreshes_on_first_request() -> Result<()> {
    let server = MockServer::start().await;
    mount_refresh_success(&server, "refresh-saved", "access-new", "refresh-new").await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("authorization", "Bearer access-new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_json()))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let session = common::create_restored_session("refresh-saved").await;
    assert!(session.is_authenticated().await);
    assert!(session.access_token().await.is_none());

    let client = ApiClient::new(&common::test_config(&server), session.clone())?;
    client.users().me().await?;

    assert_eq!(session.access_token().await.as_deref(), Some("access-new"));
    Ok(())
}

#[tokio::test]
async fn test_login_failure_does_not_trigger_refresh() {
    let server = MockServer::start().await;
    mount_no_refresh(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "Incorrect email or password" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;
    let err = client
        .auth()
        .login(&LoginRequest {
            email: "runner@example.com".into(),
            password: "wrong-password".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::AuthRequired);
    assert_eq!(
        err.user_message("Login failed"),
        "Incorrect email or password"
    );
}

#[tokio::test]
async fn test_non_unauthorized_errors_pass_through_with_detail() {
    let server = MockServer::start().await;
    mount_no_refresh(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/calories/entry/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Entry not found" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/progress/monthly"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                { "loc": ["query", "year"], "msg": "Input should be greater than or equal to 2020", "type": "greater_than_equal" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;

    let err = client.calories().delete_entry("missing").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.detail.as_deref(), Some("Entry not found"));

    let err = client.progress().monthly(3, 2019).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(
        err.user_message("Request failed"),
        "Input should be greater than or equal to 2020"
    );
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/progress/streak"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "current": 1 })))
        .mount(&server)
        .await;

    let (client, _session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;
    let err = client.progress().streak().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidResponse);
    assert!(err.message.contains("/api/v1/progress/streak"));
}

#[tokio::test]
async fn test_query_parameters_are_sent() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/progress/consistency"))
        .and(query_param("period", "30d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "score": 83.3,
            "days_on_target": 25,
            "total_days": 30,
            "period": "30d"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = common::create_signed_in_client(&server, "access-1", "refresh-1").await;
    let data = client.progress().consistency(None).await?;

    assert_eq!(data.total_days, 30);
    Ok(())
}
