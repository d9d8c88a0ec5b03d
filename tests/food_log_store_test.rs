// ABOUTME: Integration tests for the AI analysis review buffer
// ABOUTME: Analyze, edit, and confirm flows against a mock backend with total recomputation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use bytes::Bytes;
use runfuel_client::api::PhotoUpload;
use runfuel_client::store::FoodLogStore;
use runfuel_core::errors::ErrorCode;
use runfuel_core::models::{FoodItemAi, MealType};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn banana() -> FoodItemAi {
    FoodItemAi {
        name: "Banana".into(),
        portion: "1 medium".into(),
        calories: 105.0,
        protein_g: Some(1.3),
        carbs_g: Some(27.0),
        fat_g: Some(0.4),
        fiber_g: Some(3.1),
        confidence: 1.0,
        health_rating: None,
    }
}

async fn mount_text_analysis(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/food/analyze-text"))
        .and(body_partial_json(json!({ "description": "chicken and rice" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::analysis_json()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_analysis_total_is_sum_of_items() -> Result<()> {
    let server = MockServer::start().await;
    mount_text_analysis(&server).await;
    let (client, _session) = common::create_signed_in_client(&server, "a-1", "r-1").await;

    let mut store = FoodLogStore::new();
    let draft = store.analyze_text(&client, "  chicken and rice ").await?;

    // Backend reported 460, the items add up to 453
    assert!((draft.total_calories - 453.0).abs() < f64::EPSILON);
    assert_eq!(draft.items.len(), 2);
    assert!(!store.is_analyzing());
    Ok(())
}

#[tokio::test]
async fn test_edits_keep_total_in_sync() -> Result<()> {
    let server = MockServer::start().await;
    mount_text_analysis(&server).await;
    let (client, _session) = common::create_signed_in_client(&server, "a-1", "r-1").await;

    let mut store = FoodLogStore::new();
    store.analyze_text(&client, "chicken and rice").await?;

    store.add_item(banana());
    assert!((store.total_calories() - 558.0).abs() < f64::EPSILON);

    let mut rice = store.draft().unwrap().items[1].clone();
    rice.calories = 150.0;
    store.update_item(1, rice)?;
    assert!((store.total_calories() - 503.0).abs() < f64::EPSILON);

    let removed = store.remove_item(0)?;
    assert_eq!(removed.name, "Grilled chicken");
    assert!((store.total_calories() - 255.0).abs() < f64::EPSILON);

    let err = store.remove_item(5).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    Ok(())
}

#[tokio::test]
async fn test_confirm_saves_items_and_resets() -> Result<()> {
    let server = MockServer::start().await;
    mount_text_analysis(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/food/confirm-analysis"))
        .and(body_partial_json(json!({ "meal_type": "dinner" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            common::food_entry_json("e-1", "Grilled chicken", 248.0, false),
            common::food_entry_json("e-2", "White rice", 205.0, false)
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _session) = common::create_signed_in_client(&server, "a-1", "r-1").await;

    let mut store = FoodLogStore::new();
    store.analyze_text(&client, "chicken and rice").await?;
    let entries = store.confirm(&client, MealType::Dinner).await?;

    assert_eq!(entries.len(), 2);
    assert!(store.draft().is_none());
    assert!(store.total_calories().abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_confirm_failure_keeps_buffer() -> Result<()> {
    let server = MockServer::start().await;
    mount_text_analysis(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/food/confirm-analysis"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "Database error" })))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _session) = common::create_signed_in_client(&server, "a-1", "r-1").await;

    let mut store = FoodLogStore::new();
    store.analyze_text(&client, "chicken and rice").await?;
    let err = store.confirm(&client, MealType::Lunch).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(store.draft().map(|draft| draft.items.len()), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_confirm_without_items_sends_nothing() {
    let server = MockServer::start().await;
    let (client, _session) = common::create_signed_in_client(&server, "a-1", "r-1").await;

    let mut store = FoodLogStore::new();
    let err = store.confirm(&client, MealType::Snack).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_photo_analysis_failure_clears_analyzing_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/food/analyze-photo"))
        .respond_with(
            ResponseTemplate::new(502).set_body_json(json!({ "detail": "AI analysis failed" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let (client, _session) = common::create_signed_in_client(&server, "a-1", "r-1").await;

    let mut store = FoodLogStore::new();
    let photo = PhotoUpload::new("plate.jpg", "image/jpeg", Bytes::from_static(&[0xFF, 0xD8, 0xFF]));
    let err = store.analyze_photo(&client, photo, Some("   ")).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(err.user_message("Analysis failed"), "AI analysis failed");
    assert!(!store.is_analyzing());
    assert!(store.draft().is_none());
    assert!(store.selected_photo().is_some());
}

#[tokio::test]
async fn test_photo_with_description_uses_combined_endpoint() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/food/analyze-photo-text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::analysis_json()))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _session) = common::create_signed_in_client(&server, "a-1", "r-1").await;

    let mut store = FoodLogStore::new();
    let photo = PhotoUpload::new("plate.png", "image/png", Bytes::from_static(&[0x89, 0x50, 0x4E, 0x47]));
    let draft = store
        .analyze_photo(&client, photo, Some("cooked in olive oil"))
        .await?;

    assert_eq!(draft.meal_notes, "Balanced plate");
    Ok(())
}
