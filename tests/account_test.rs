// ABOUTME: Integration tests for account flows against a mock backend
// ABOUTME: Covers form validation before requests, sign-in session population, and sign-out
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
use runfuel_core::models::{
    Gender, Goal, LoginRequest, ProfileForm, RunningFrequency, TrainingIntensity,
};
use runfuel_core::validation::{RegisterForm, ResetPasswordForm};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_me(server: &MockServer, bearer: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("authorization", format!("Bearer {bearer}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_json()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_sign_up_rejects_mismatched_passwords_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (client, session) = common::create_test_client(&server);
    let err = client
        .account()
        .sign_up(RegisterForm {
            email: "runner@example.com".into(),
            password: "longenough1".into(),
            confirm_password: "longenough2".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.user_message("Registration failed"), "Passwords do not match");
    assert!(!session.is_authenticated().await);
}

#[tokio::test]
async fn test_sign_up_rejects_short_password_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _session) = common::create_test_client(&server);
    let err = client
        .account()
        .sign_up(RegisterForm {
            email: "runner@example.com".into(),
            password: "short".into(),
            confirm_password: "short".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_sign_up_establishes_session() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .and(body_json(json!({
            "email": "runner@example.com",
            "password": "longenough1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::token_json("a-1", "r-1")))
        .expect(1)
        .mount(&server)
        .await;
    mount_me(&server, "a-1").await;

    let (client, session) = common::create_test_client(&server);
    let user = client
        .account()
        .sign_up(RegisterForm {
            email: "  runner@example.com ".into(),
            password: "longenough1".into(),
            confirm_password: "longenough1".into(),
        })
        .await?;

    assert!(user.has_profile);
    assert!(session.is_authenticated().await);
    assert_eq!(session.user().await.map(|u| u.email), Some(user.email));
    Ok(())
}

#[tokio::test]
async fn test_sign_up_surfaces_duplicate_email_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "detail": "Email already registered" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = common::create_test_client(&server);
    let err = client
        .account()
        .sign_up(RegisterForm {
            email: "runner@example.com".into(),
            password: "longenough1".into(),
            confirm_password: "longenough1".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
}

#[tokio::test]
async fn test_sign_in_populates_session_and_emits_event() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({
            "email": "runner@example.com",
            "password": "secret-password"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_json("a-1", "r-1")))
        .expect(1)
        .mount(&server)
        .await;
    mount_me(&server, "a-1").await;

    let (client, session) = common::create_test_client(&server);
    let mut events = session.subscribe();

    client
        .account()
        .sign_in(LoginRequest {
            email: " runner@example.com".into(),
            password: "secret-password".into(),
        })
        .await?;

    let snapshot = session.snapshot().await;
    assert!(snapshot.is_authenticated);
    assert_eq!(snapshot.access_token.as_deref(), Some("a-1"));
    assert_eq!(snapshot.refresh_token.as_deref(), Some("r-1"));
    assert!(snapshot.user.is_some());

    assert_eq!(events.try_recv()?, SessionEvent::SignedIn);
    assert_eq!(events.try_recv()?, SessionEvent::UserUpdated);
    Ok(())
}

#[tokio::test]
async fn test_sign_in_requires_password() {
    let server = MockServer::start().await;
    let (client, _session) = common::create_test_client(&server);

    let err = client
        .account()
        .sign_in(LoginRequest {
            email: "runner@example.com".into(),
            password: String::new(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sign_out_revokes_and_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .and(body_json(json!({ "refresh_token": "r-1" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged out" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = common::create_signed_in_client(&server, "a-1", "r-1").await;
    let mut events = session.subscribe();

    client.account().sign_out().await;

    assert!(!session.is_authenticated().await);
    assert_eq!(
        events.try_recv().unwrap(),
        SessionEvent::SignedOut(SignOutReason::UserRequested)
    );
}

async fn mount_refresh(server: &MockServer, from: &str, access: &str, refresh: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .and(body_json(json!({ "refresh_token": from })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_json(access, refresh)))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_logout_accepting(server: &MockServer, bearer: &str, refresh: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .and(header("authorization", format!("Bearer {bearer}").as_str()))
        .and(body_json(json!({ "refresh_token": refresh })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged out" })),
        )
        .expect(1)
        .with_priority(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_sign_out_from_restored_session_revokes_rotated_token() -> Result<()> {
    let server = MockServer::start().await;
    mount_refresh(&server, "refresh-1", "access-2", "refresh-2").await;
    mount_logout_accepting(&server, "access-2", "refresh-2").await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&server)
        .await;

    let session = common::create_restored_session("refresh-1").await;
    let client = ApiClient::new(&common::test_config(&server), session.clone())?;
    let mut events = session.subscribe();

    client.account().sign_out().await;

    assert!(!session.is_authenticated().await);
    assert_eq!(events.try_recv()?, SessionEvent::TokensRefreshed);
    assert_eq!(
        events.try_recv()?,
        SessionEvent::SignedOut(SignOutReason::UserRequested)
    );
    Ok(())
}

#[tokio::test]
async fn test_sign_out_with_expired_access_token_revokes_rotated_token() {
    let server = MockServer::start().await;
    mount_refresh(&server, "r-1", "a-2", "r-2").await;
    mount_logout_accepting(&server, "a-2", "r-2").await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .and(header("authorization", "Bearer a-1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = common::create_signed_in_client(&server, "a-1", "r-1").await;
    client.account().sign_out().await;

    assert!(!session.is_authenticated().await);
    assert!(session.refresh_token().await.is_none());
}

#[tokio::test]
async fn test_sign_out_clears_session_when_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = common::create_signed_in_client(&server, "a-1", "r-1").await;
    client.account().sign_out().await;

    let snapshot = session.snapshot().await;
    assert!(!snapshot.is_authenticated);
    assert!(snapshot.access_token.is_none());
    assert!(snapshot.refresh_token.is_none());
    assert!(snapshot.user.is_none());
}

#[tokio::test]
async fn test_reset_password_validates_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/reset-password"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _session) = common::create_test_client(&server);
    let err = client
        .account()
        .reset_password(ResetPasswordForm {
            token: "reset-token".into(),
            new_password: "newpassword1".into(),
            confirm_password: "newpassword2".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_reset_password_sends_token_and_new_password() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/reset-password"))
        .and(body_json(json!({
            "token": "reset-token",
            "new_password": "newpassword1"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Password updated" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = common::create_test_client(&server);
    let response = client
        .account()
        .reset_password(ResetPasswordForm {
            token: "reset-token".into(),
            new_password: "newpassword1".into(),
            confirm_password: "newpassword1".into(),
        })
        .await?;

    assert_eq!(response.message, "Password updated");
    Ok(())
}

#[tokio::test]
async fn test_complete_onboarding_reloads_user() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/users/me/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_json()["profile"].clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = common::create_signed_in_client(&server, "a-1", "r-1").await;
    let user = client
        .account()
        .complete_onboarding(&ProfileForm {
            age: 30,
            gender: Gender::Male,
            height_cm: 180.0,
            weight_kg: 75.0,
            running_frequency: RunningFrequency::ThreeToFour,
            training_intensity: TrainingIntensity::Moderate,
            goal: Goal::Deficit,
        })
        .await?;

    assert_eq!(
        user.profile.and_then(|p| p.daily_target_kcal),
        Some(2320.0)
    );
    assert!(session.user().await.is_some());
    Ok(())
}

#[tokio::test]
async fn test_complete_onboarding_rejects_out_of_range_age() {
    let server = MockServer::start().await;
    let (client, _session) = common::create_signed_in_client(&server, "a-1", "r-1").await;

    let err = client
        .account()
        .complete_onboarding(&ProfileForm {
            age: 5,
            gender: Gender::Female,
            height_cm: 165.0,
            weight_kg: 55.0,
            running_frequency: RunningFrequency::OneToTwo,
            training_intensity: TrainingIntensity::Easy,
            goal: Goal::Performance,
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(server.received_requests().await.unwrap().is_empty());
}
