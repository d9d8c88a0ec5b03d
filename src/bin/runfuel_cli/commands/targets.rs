// ABOUTME: Local energy-target preview for runfuel-cli
// ABOUTME: Estimates BMR, TDEE, and daily calorie target for a profile without calling the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::{Args, ValueEnum};
use runfuel_core::errors::AppResult;
use runfuel_core::models::{Gender, Goal, ProfileForm, RunningFrequency, TrainingIntensity};
use runfuel_core::nutrition::{estimate_targets_with, TargetAdjustments};
use runfuel_core::validation::Validate;

use crate::helpers::display::display_targets;

#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Other,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FrequencyArg {
    #[value(name = "1-2")]
    OneToTwo,
    #[value(name = "3-4")]
    ThreeToFour,
    #[value(name = "5-6")]
    FiveToSix,
    #[value(name = "7+")]
    SevenPlus,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IntensityArg {
    Easy,
    Moderate,
    Hard,
    VeryHard,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GoalArg {
    Deficit,
    Performance,
    Bulking,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Other => Self::Other,
        }
    }
}

impl From<FrequencyArg> for RunningFrequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::OneToTwo => Self::OneToTwo,
            FrequencyArg::ThreeToFour => Self::ThreeToFour,
            FrequencyArg::FiveToSix => Self::FiveToSix,
            FrequencyArg::SevenPlus => Self::SevenPlus,
        }
    }
}

impl From<IntensityArg> for TrainingIntensity {
    fn from(arg: IntensityArg) -> Self {
        match arg {
            IntensityArg::Easy => Self::Easy,
            IntensityArg::Moderate => Self::Moderate,
            IntensityArg::Hard => Self::Hard,
            IntensityArg::VeryHard => Self::VeryHard,
        }
    }
}

impl From<GoalArg> for Goal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::Deficit => Self::Deficit,
            GoalArg::Performance => Self::Performance,
            GoalArg::Bulking => Self::Bulking,
        }
    }
}

/// Profile values for the preview
#[derive(Args)]
pub struct TargetArgs {
    /// Age in years
    #[arg(long)]
    age: u32,

    /// Gender
    #[arg(long, value_enum)]
    gender: GenderArg,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Runs per week
    #[arg(long, value_enum)]
    frequency: FrequencyArg,

    /// Typical training intensity
    #[arg(long, value_enum)]
    intensity: IntensityArg,

    /// Nutrition goal
    #[arg(long, value_enum, default_value = "performance")]
    goal: GoalArg,

    /// Today is a long-run day
    #[arg(long)]
    long_run: bool,

    /// Current weekly running distance in km
    #[arg(long, default_value_t = 0.0)]
    weekly_km: f64,
}

impl TargetArgs {
    fn profile(&self) -> ProfileForm {
        ProfileForm {
            age: self.age,
            gender: self.gender.into(),
            height_cm: self.height,
            weight_kg: self.weight,
            running_frequency: self.frequency.into(),
            training_intensity: self.intensity.into(),
            goal: self.goal.into(),
        }
    }
}

/// Print the estimated targets for the given profile
pub fn preview(args: &TargetArgs) -> AppResult<()> {
    let profile = args.profile();
    profile.validate()?;
    let targets = estimate_targets_with(
        &profile,
        TargetAdjustments {
            is_long_run_day: args.long_run,
            weekly_km: args.weekly_km,
        },
    );
    display_targets(&profile, &targets);
    Ok(())
}
