// ABOUTME: Local preview of BMR, TDEE, and the daily calorie target
// ABOUTME: Mifflin-St Jeor with running activity multipliers and goal safety rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Energy Target Preview
//!
//! The backend owns the authoritative figures stored on
//! [`UserProfile`](crate::models::UserProfile).
//! These functions reproduce its formulas so a profile form can show the
//! effect of a change before it is submitted. Values are rounded to two
//! decimals, ties to even, like the server's decimal arithmetic.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{Gender, Goal, ProfileForm, RunningFrequency, TrainingIntensity};

/// Daily deficit applied by [`Goal::Deficit`]
pub const DEFICIT_KCAL: f64 = -400.0;
/// Daily surplus applied by [`Goal::Bulking`]
pub const SURPLUS_KCAL: f64 = 400.0;
/// Largest deficit allowed on a long-run day
pub const LONG_RUN_DEFICIT_CAP_KCAL: f64 = -200.0;
/// Weekly distance above which a deficit is halved
pub const HIGH_MILEAGE_KM: f64 = 60.0;
/// Intake floor for men
pub const MALE_FLOOR_KCAL: f64 = 1500.0;
/// Intake floor for everyone else
pub const DEFAULT_FLOOR_KCAL: f64 = 1200.0;

/// Day-specific inputs to the target calculation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TargetAdjustments {
    /// Whether today is a long-run day
    pub is_long_run_day: bool,
    /// Distance run this week
    pub weekly_km: f64,
}

/// Preview figures for a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyTargets {
    /// Basal metabolic rate
    pub bmr: f64,
    /// Total daily energy expenditure
    pub tdee: f64,
    /// Daily intake target
    pub daily_target_kcal: f64,
}

/// Mifflin-St Jeor basal metabolic rate
#[must_use]
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female | Gender::Other => -161.0,
    };
    round2(base + offset)
}

/// Activity multiplier for a weekly running load
#[must_use]
pub const fn activity_multiplier(
    frequency: RunningFrequency,
    intensity: TrainingIntensity,
) -> f64 {
    use RunningFrequency as F;
    use TrainingIntensity as I;

    match (frequency, intensity) {
        (F::OneToTwo, I::Easy) => 1.375,
        (F::OneToTwo, I::Moderate) => 1.40,
        (F::OneToTwo, I::Hard) => 1.45,
        (F::OneToTwo, I::VeryHard) => 1.50,
        (F::ThreeToFour, I::Easy) => 1.55,
        (F::ThreeToFour, I::Moderate) => 1.60,
        (F::ThreeToFour, I::Hard) | (F::FiveToSix, I::Easy) => 1.65,
        (F::ThreeToFour, I::VeryHard) | (F::FiveToSix, I::Moderate) | (F::SevenPlus, I::Easy) => {
            1.725
        }
        (F::FiveToSix, I::Hard) | (F::SevenPlus, I::Moderate) => 1.80,
        (F::FiveToSix, I::VeryHard) | (F::SevenPlus, I::Hard) => 1.90,
        (F::SevenPlus, I::VeryHard) => 1.95,
    }
}

/// BMR scaled by the activity multiplier
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    frequency: RunningFrequency,
    intensity: TrainingIntensity,
) -> f64 {
    multiply_to_cents(bmr, activity_multiplier(frequency, intensity))
}

/// Daily intake target for a goal, never below the intake floor
#[must_use]
pub fn calculate_daily_target(
    tdee: f64,
    goal: Goal,
    gender: Gender,
    adjustments: TargetAdjustments,
) -> f64 {
    let mut modifier = match goal {
        Goal::Deficit => DEFICIT_KCAL,
        Goal::Performance => 0.0,
        Goal::Bulking => SURPLUS_KCAL,
    };

    if goal == Goal::Deficit {
        if adjustments.is_long_run_day {
            modifier = modifier.max(LONG_RUN_DEFICIT_CAP_KCAL);
        }
        if adjustments.weekly_km > HIGH_MILEAGE_KM {
            modifier /= 2.0;
        }
    }

    let floor = match gender {
        Gender::Male => MALE_FLOOR_KCAL,
        Gender::Female | Gender::Other => DEFAULT_FLOOR_KCAL,
    };
    round2((tdee + modifier).max(floor))
}

/// Preview for an ordinary day
#[must_use]
pub fn estimate_targets(profile: &ProfileForm) -> EnergyTargets {
    estimate_targets_with(profile, TargetAdjustments::default())
}

/// Preview with day-specific adjustments
#[must_use]
pub fn estimate_targets_with(
    profile: &ProfileForm,
    adjustments: TargetAdjustments,
) -> EnergyTargets {
    let bmr = calculate_bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
    );
    let tdee = calculate_tdee(bmr, profile.running_frequency, profile.training_intensity);
    let daily_target_kcal =
        calculate_daily_target(tdee, profile.goal, profile.gender, adjustments);
    EnergyTargets {
        bmr,
        tdee,
        daily_target_kcal,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `amount * factor` to the cent, computed in fixed point so exact ties round to even
///
/// `amount` carries at most two decimals and `factor` at most three.
fn multiply_to_cents(amount: f64, factor: f64) -> f64 {
    let cents = (amount * 100.0).round() as i64;
    let thousandths = (factor * 1000.0).round() as i64;
    // Units of 1e-5
    let product = cents * thousandths;
    let quotient = product.div_euclid(1000);
    let rounded = match product.rem_euclid(1000).cmp(&500) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient & 1),
    };
    rounded as f64 / 100.0
}
