// ABOUTME: User account and profile models
// ABOUTME: Goal, gender, running frequency, intensity enums plus profile form and user payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrition goal driving the daily calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit for weight loss
    Deficit,
    /// Maintenance tuned for training performance
    Performance,
    /// Caloric surplus
    Bulking,
}

impl Goal {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deficit => "deficit",
            Self::Performance => "performance",
            Self::Bulking => "bulking",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

/// Number of runs per week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RunningFrequency {
    /// One or two runs
    #[serde(rename = "1-2")]
    OneToTwo,
    /// Three or four runs
    #[serde(rename = "3-4")]
    ThreeToFour,
    /// Five or six runs
    #[serde(rename = "5-6")]
    FiveToSix,
    /// Daily or more
    #[serde(rename = "7+")]
    SevenPlus,
}

/// Typical training intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingIntensity {
    /// Easy
    Easy,
    /// Moderate
    Moderate,
    /// Hard
    Hard,
    /// Very hard
    VeryHard,
}

/// Stored profile with the backend-computed energy figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Runs per week
    pub running_frequency: RunningFrequency,
    /// Training intensity
    pub training_intensity: TrainingIntensity,
    /// Nutrition goal
    pub goal: Goal,
    /// Basal metabolic rate (server-computed)
    pub bmr: Option<f64>,
    /// Total daily energy expenditure (server-computed)
    pub tdee: Option<f64>,
    /// Daily calorie target (server-computed)
    pub daily_target_kcal: Option<f64>,
}

/// The authenticated account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Account id
    pub id: String,
    /// Account email
    pub email: String,
    /// Whether the account is active
    pub is_active: bool,
    /// Whether onboarding has been completed
    pub has_profile: bool,
    /// Profile, present once onboarding is done
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// Body for `PUT /users/me/profile` (onboarding and profile edits)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Runs per week
    pub running_frequency: RunningFrequency,
    /// Training intensity
    pub training_intensity: TrainingIntensity,
    /// Nutrition goal
    pub goal: Goal,
}

/// Body for `PATCH /users/me/goal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalUpdate {
    /// New goal
    pub goal: Goal,
}
