// ABOUTME: Backend data transfer objects for the RunFuel REST API
// ABOUTME: Re-exports auth, user, food, calorie, progress, training, and gamification types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Explicit serde schemas for every payload exchanged with the backend.
//! Decoding a response into one of these types is the point where a
//! malformed backend answer turns into a typed error instead of flowing
//! through the rest of the client as missing data.
//!
//! Field names follow the backend's snake_case JSON exactly.

// Domain modules
mod auth;
mod calorie;
mod food;
mod gamification;
mod health;
mod progress;
pub mod timestamp;
mod training;
mod user;

// Auth domain
pub use auth::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, RefreshRequest, RegisterRequest,
    ResetPasswordRequest, TokenResponse,
};

// User domain
pub use user::{
    Gender, Goal, GoalUpdate, ProfileForm, RunningFrequency, TrainingIntensity, User, UserProfile,
};

// Food domain
pub use food::{
    AiAnalysisResponse, ConfirmAnalysisRequest, FoodEntry, FoodEntryUpdate, FoodItemAi,
    FoodSource, HealthRating, ManualFoodEntry, MealType,
};

// Calorie domain
pub use calorie::{CalorieLog, CalorieLogSummary, LogStatus};

// Progress domain
pub use progress::{ConsistencyData, StreakData, WeeklySummary};

// Training domain
pub use training::{
    DayOfWeek, GeneratePlanRequest, PlanSource, Race, RaceCategory, RaceCreate, RaceStatus,
    RaceUpdate, SessionType, TimeOfDay, TrainingPlan, TrainingPlanCreate, TrainingSession,
    TrainingSessionCreate, TrainingSessionUpdate,
};

// Backend liveness
pub use health::HealthStatus;

// Gamification domain
pub use gamification::{AwardedBadge, Badge, DailyScore, UserBadgeInfo, UserStats, WeeklyFeedback};
