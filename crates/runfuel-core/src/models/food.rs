// ABOUTME: Food logging models for AI analysis, manual entries, and favorites
// ABOUTME: MealType, FoodSource, HealthRating, AI item proposals, and stored food entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::timestamp;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(format!("unknown meal type '{other}'")),
        }
    }
}

/// How an entry was logged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodSource {
    /// AI photo analysis
    AiPhoto,
    /// AI text analysis
    AiText,
    /// Typed in by hand
    Manual,
    /// Picked from search results
    Search,
    /// Picked from favorites
    Favorite,
}

/// AI health assessment of an item or meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    /// Healthy choice
    Healthy,
    /// Neither good nor bad
    Average,
    /// Unhealthy choice
    Unhealthy,
}

/// One food item proposed by AI analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItemAi {
    /// Food name
    pub name: String,
    /// Portion description ("1 cup", "200 g")
    pub portion: String,
    /// Estimated calories
    pub calories: f64,
    /// Protein in grams
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    pub carbs_g: Option<f64>,
    /// Fat in grams
    pub fat_g: Option<f64>,
    /// Fiber in grams
    pub fiber_g: Option<f64>,
    /// Model confidence between 0 and 1
    pub confidence: f64,
    /// Per-item health rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_rating: Option<HealthRating>,
}

/// Result of a photo or text analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysisResponse {
    /// Proposed items
    pub items: Vec<FoodItemAi>,
    /// Total calories as reported by the backend
    pub total_calories: f64,
    /// Free-form notes about the meal
    #[serde(default)]
    pub meal_notes: String,
    /// Health assessment of the whole meal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_evaluation: Option<HealthRating>,
    /// Short suggestion to improve the meal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_tip: Option<String>,
}

/// A stored food log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Entry id
    pub id: String,
    /// Meal this entry belongs to
    pub meal_type: MealType,
    /// How it was logged
    pub source: FoodSource,
    /// Food name
    pub food_name: String,
    /// Portion description
    pub portion_desc: Option<String>,
    /// Calories
    pub calories: f64,
    /// Protein in grams
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    pub carbs_g: Option<f64>,
    /// Fat in grams
    pub fat_g: Option<f64>,
    /// Fiber in grams
    pub fiber_g: Option<f64>,
    /// Uploaded photo
    pub photo_url: Option<String>,
    /// AI confidence for AI-sourced entries
    pub ai_confidence: Option<f64>,
    /// Whether the entry is a favorite
    pub is_favorite: bool,
    /// Creation timestamp
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /food/manual`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualFoodEntry {
    /// Meal
    pub meal_type: MealType,
    /// Food name (1-255 characters)
    pub food_name: String,
    /// Portion description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portion_desc: Option<String>,
    /// Calories (non-negative)
    pub calories: f64,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Fiber in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
}

/// Partial update for `PUT /calories/entry/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodEntryUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    /// New portion description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portion_desc: Option<String>,
    /// New calories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// New protein
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// New carbohydrates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// New fat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// New fiber
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
}

/// Body for `POST /food/confirm-analysis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmAnalysisRequest {
    /// Meal the reviewed items belong to
    pub meal_type: MealType,
    /// Reviewed items
    pub items: Vec<FoodItemAi>,
    /// Uploaded photo, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Raw model output kept for auditing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_raw_response: Option<Value>,
}
