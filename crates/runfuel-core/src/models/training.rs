// ABOUTME: Running training models: races, plans, sessions, and plan generation
// ABOUTME: Enums mirror the backend literals ("5k", "easy_run", "monday", ...)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::timestamp;

/// Kind of training session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Easy aerobic run
    EasyRun,
    /// Tempo run
    Tempo,
    /// Interval workout
    Interval,
    /// Long run
    LongRun,
    /// Recovery jog
    Recovery,
    /// Rest day
    Rest,
    /// Strength training
    Strength,
    /// Cross training
    CrossTraining,
    /// Race day
    Race,
    /// Trail run
    Trail,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EasyRun => "easy run",
            Self::Tempo => "tempo",
            Self::Interval => "intervals",
            Self::LongRun => "long run",
            Self::Recovery => "recovery",
            Self::Rest => "rest",
            Self::Strength => "strength",
            Self::CrossTraining => "cross training",
            Self::Race => "race",
            Self::Trail => "trail",
        })
    }
}

/// Day of the week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

/// Part of the day a session is scheduled for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Morning
    #[default]
    Morning,
    /// Evening
    Evening,
}

/// Race distance category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RaceCategory {
    /// 5 km
    #[serde(rename = "5k")]
    FiveK,
    /// 10 km
    #[serde(rename = "10k")]
    TenK,
    /// Half marathon
    #[serde(rename = "half_marathon")]
    HalfMarathon,
    /// Marathon
    #[serde(rename = "marathon")]
    Marathon,
    /// 50 km ultra
    #[serde(rename = "ultra_50k")]
    Ultra50k,
    /// 100 km ultra
    #[serde(rename = "ultra_100k")]
    Ultra100k,
    /// Trail race
    #[serde(rename = "trail")]
    Trail,
    /// Anything else
    #[serde(rename = "other")]
    Other,
}

/// Outcome of a race
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RaceStatus {
    /// Not run yet
    #[default]
    Upcoming,
    /// Finished
    Completed,
    /// Did not start
    Dns,
    /// Did not finish
    Dnf,
}

/// Where a plan came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Entered by the user
    Manual,
    /// Generated by the AI coach
    AiGenerated,
}

/// A scheduled session within a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Session id
    pub id: String,
    /// Calendar day
    pub session_date: NaiveDate,
    /// Week index within the plan, starting at 1
    pub week_number: u32,
    /// Day of week
    pub day_of_week: DayOfWeek,
    /// Morning or evening
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    /// Kind of session
    pub session_type: SessionType,
    /// Coach description
    pub description: Option<String>,
    /// Planned distance
    pub target_distance_km: Option<f64>,
    /// Completed distance
    pub actual_distance_km: Option<f64>,
    /// Planned duration
    pub target_duration_min: Option<u32>,
    /// Completed duration
    pub actual_duration_min: Option<u32>,
    /// Planned climbing
    pub elevation_gain_m: Option<u32>,
    /// Whether the session was done
    pub completed: bool,
    /// Athlete notes
    pub notes: Option<String>,
}

/// Completion report for `PUT /training/sessions/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSessionUpdate {
    /// Distance run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_distance_km: Option<f64>,
    /// Time spent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_duration_min: Option<u32>,
    /// Completion flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Session supplied when creating a manual plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSessionCreate {
    /// Calendar day
    pub session_date: NaiveDate,
    /// Week index, starting at 1
    pub week_number: u32,
    /// Day of week
    pub day_of_week: DayOfWeek,
    /// Morning or evening
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    /// Kind of session
    pub session_type: SessionType,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Planned distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_distance_km: Option<f64>,
    /// Planned duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_duration_min: Option<u32>,
    /// Planned climbing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<u32>,
}

/// A training plan with its sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Plan id
    pub id: String,
    /// Plan name
    pub name: String,
    /// Target race
    pub race_id: Option<String>,
    /// First day
    pub start_date: NaiveDate,
    /// Last day
    pub end_date: NaiveDate,
    /// Length in weeks
    pub weeks: u32,
    /// Manual or generated
    pub source: PlanSource,
    /// Whether this is the plan currently followed
    pub is_active: bool,
    /// Scheduled sessions
    #[serde(default)]
    pub sessions: Vec<TrainingSession>,
    /// Creation timestamp
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /training/plans`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlanCreate {
    /// Plan name
    pub name: String,
    /// Target race
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_id: Option<String>,
    /// First day
    pub start_date: NaiveDate,
    /// Last day
    pub end_date: NaiveDate,
    /// Sessions
    #[serde(default)]
    pub sessions: Vec<TrainingSessionCreate>,
}

/// Body for `POST /training/generate-plan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    /// Existing race to train for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_id: Option<String>,
    /// Race name when no race id is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_name: Option<String>,
    /// Race day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_date: Option<NaiveDate>,
    /// Race distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_distance_km: Option<f64>,
    /// Goal finishing time ("3:45:00")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
    /// Plan length, 4 to 24 weeks
    pub weeks: u32,
    /// Current weekly volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weekly_km: Option<f64>,
    /// Race climbing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<u32>,
    /// Best 5k time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_5k: Option<String>,
    /// Best 10k time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_10k: Option<String>,
    /// Best half marathon time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_half: Option<String>,
    /// Best marathon time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_marathon: Option<String>,
    /// Average long run distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_long_run: Option<f64>,
}

impl Default for GeneratePlanRequest {
    fn default() -> Self {
        Self {
            race_id: None,
            race_name: None,
            race_date: None,
            race_distance_km: None,
            target_time: None,
            weeks: 12,
            current_weekly_km: None,
            elevation_gain: None,
            best_5k: None,
            best_10k: None,
            best_half: None,
            best_marathon: None,
            avg_long_run: None,
        }
    }
}

/// A race on the athlete's calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Race id
    pub id: String,
    /// Race name
    pub name: String,
    /// Race day
    pub race_date: NaiveDate,
    /// Distance category
    pub category: Option<RaceCategory>,
    /// Distance
    pub distance_km: Option<f64>,
    /// Climbing
    pub elevation_gain_m: Option<u32>,
    /// Cutoff ("12:00:00")
    pub cutoff_time: Option<String>,
    /// Mountain difficulty label
    pub mountain_level: Option<String>,
    /// Start time of day
    pub start_time: Option<String>,
    /// Road, trail, ...
    pub race_type: Option<String>,
    /// Goal finishing time
    pub target_time: Option<String>,
    /// Achieved finishing time
    pub actual_time: Option<String>,
    /// Venue
    pub location: Option<String>,
    /// Status
    pub status: RaceStatus,
    /// Notes
    pub notes: Option<String>,
    /// Creation timestamp
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /training/races`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceCreate {
    /// Race name (1-255 characters)
    pub name: String,
    /// Race day
    pub race_date: NaiveDate,
    /// Distance category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RaceCategory>,
    /// Distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Climbing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<u32>,
    /// Cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_time: Option<String>,
    /// Mountain difficulty label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mountain_level: Option<String>,
    /// Start time of day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Road, trail, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_type: Option<String>,
    /// Goal finishing time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
    /// Venue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial update for `PUT /training/races/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceUpdate {
    /// Name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Race day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_date: Option<NaiveDate>,
    /// Distance category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RaceCategory>,
    /// Distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Climbing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<u32>,
    /// Cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_time: Option<String>,
    /// Mountain difficulty label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mountain_level: Option<String>,
    /// Start time of day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Road, trail, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_type: Option<String>,
    /// Goal finishing time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
    /// Achieved finishing time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<String>,
    /// Venue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RaceStatus>,
    /// Notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
