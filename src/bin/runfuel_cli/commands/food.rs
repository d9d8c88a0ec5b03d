// ABOUTME: Food logging commands for runfuel-cli
// ABOUTME: Handles today's log, manual entries, and AI meal analysis with optional confirmation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use runfuel_client::api::PhotoUpload;
use runfuel_client::store::{DashboardStore, FoodLogStore};
use runfuel_client::ApiClient;
use runfuel_core::errors::{AppError, AppResult};
use runfuel_core::models::{ManualFoodEntry, MealType};
use std::path::PathBuf;

use crate::helpers::display::{display_analysis, display_calorie_log, display_food_entry};

/// Values for a manual entry
pub struct ManualEntryArgs {
    pub meal: MealType,
    pub name: String,
    pub calories: f64,
    pub portion: Option<String>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

/// Show today's log, or another day's
pub async fn today(client: &ApiClient, date: Option<NaiveDate>) -> AppResult<()> {
    if let Some(date) = date {
        let log = client.calories().by_date(date).await?;
        display_calorie_log(&log);
        return Ok(());
    }

    let mut dashboard = DashboardStore::new();
    let log = dashboard.load_today(client).await?;
    display_calorie_log(log);
    Ok(())
}

/// Log a food by hand
pub async fn log(client: &ApiClient, args: ManualEntryArgs) -> AppResult<()> {
    let entry = ManualFoodEntry {
        meal_type: args.meal,
        food_name: args.name,
        portion_desc: args.portion,
        calories: args.calories,
        protein_g: args.protein,
        carbs_g: args.carbs,
        fat_g: args.fat,
        fiber_g: None,
    };
    let saved = client.food().manual_entry(&entry).await?;
    println!("Logged:");
    display_food_entry(&saved);
    Ok(())
}

/// Analyze a meal and optionally save the result
pub async fn analyze(
    client: &ApiClient,
    text: Option<String>,
    photo: Option<PathBuf>,
    meal: MealType,
    confirm: bool,
) -> AppResult<()> {
    let mut review = FoodLogStore::new();

    match (photo, text) {
        (Some(path), description) => {
            let upload = PhotoUpload::from_path(&path).await?;
            println!("Analyzing {} ...", upload.file_name);
            review
                .analyze_photo(client, upload, description.as_deref())
                .await?;
        }
        (None, Some(description)) => {
            println!("Analyzing description ...");
            review.analyze_text(client, &description).await?;
        }
        (None, None) => {
            return Err(AppError::invalid_input(
                "Give a meal description with --text or a photo with --photo",
            ));
        }
    }

    if let Some(draft) = review.draft() {
        display_analysis(draft);
    }

    if !confirm {
        println!("\nRe-run with --confirm to save these items as {meal}.");
        review.cancel();
        return Ok(());
    }

    let entries = review.confirm(client, meal).await?;
    println!("\nSaved {} item(s) to {meal}.", entries.len());
    Ok(())
}
