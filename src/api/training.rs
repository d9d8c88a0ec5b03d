// ABOUTME: Bindings for /api/v1/training: races, plans, AI plan generation, sessions, and weekly feedback
// ABOUTME: Create and generate bodies are validated locally before they are sent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::api::require_id;
use crate::client::{ApiClient, ApiRequest};
use chrono::NaiveDate;
use runfuel_core::constants::endpoints::training;
use runfuel_core::errors::AppResult;
use runfuel_core::models::{
    GeneratePlanRequest, MessageResponse, Race, RaceCreate, RaceUpdate, TrainingPlan,
    TrainingPlanCreate, TrainingSession, TrainingSessionUpdate, WeeklyFeedback,
};
use runfuel_core::validation::Validate;

/// Training endpoints
#[derive(Clone, Copy)]
pub struct TrainingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TrainingApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    // ---- Races ----

    /// Add a race to the calendar
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid race, otherwise the backend error
    pub async fn create_race(&self, race: &RaceCreate) -> AppResult<Race> {
        race.validate()?;
        let request = ApiRequest::post(training::RACES).json(race)?;
        self.client.send_json(request).await
    }

    /// All races
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn races(&self) -> AppResult<Vec<Race>> {
        self.client.send_json(ApiRequest::get(training::RACES)).await
    }

    /// One race
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown races
    pub async fn race(&self, race_id: &str) -> AppResult<Race> {
        let path = training::race(require_id("race", race_id)?);
        self.client.send_json(ApiRequest::get(path)).await
    }

    /// Edit a race
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown races
    pub async fn update_race(&self, race_id: &str, update: &RaceUpdate) -> AppResult<Race> {
        let path = training::race(require_id("race", race_id)?);
        let request = ApiRequest::put(path).json(update)?;
        self.client.send_json(request).await
    }

    /// Remove a race
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown races
    pub async fn delete_race(&self, race_id: &str) -> AppResult<MessageResponse> {
        let path = training::race(require_id("race", race_id)?);
        self.client.send_json(ApiRequest::delete(path)).await
    }

    // ---- Plans ----

    /// Create a plan from explicit sessions
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid plan, otherwise the backend error
    pub async fn create_plan(&self, plan: &TrainingPlanCreate) -> AppResult<TrainingPlan> {
        plan.validate()?;
        let request = ApiRequest::post(training::PLANS).json(plan)?;
        self.client.send_json(request).await
    }

    /// All plans
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn plans(&self) -> AppResult<Vec<TrainingPlan>> {
        self.client.send_json(ApiRequest::get(training::PLANS)).await
    }

    /// One plan with its sessions
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown plans
    pub async fn plan(&self, plan_id: &str) -> AppResult<TrainingPlan> {
        let path = training::plan(require_id("plan", plan_id)?);
        self.client.send_json(ApiRequest::get(path)).await
    }

    /// Have the AI coach build a plan
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `weeks` is outside 4-24, otherwise the backend error
    pub async fn generate_plan(&self, request: &GeneratePlanRequest) -> AppResult<TrainingPlan> {
        request.validate()?;
        let request = ApiRequest::post(training::GENERATE_PLAN).json(request)?;
        self.client.send_json(request).await
    }

    // ---- Sessions ----

    /// Report a session as done or adjust it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions
    pub async fn update_session(
        &self,
        session_id: &str,
        update: &TrainingSessionUpdate,
    ) -> AppResult<TrainingSession> {
        let path = training::session(require_id("session", session_id)?);
        let request = ApiRequest::put(path).json(update)?;
        self.client.send_json(request).await
    }

    /// Sessions of the week starting on `start`
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn week_sessions(&self, start: NaiveDate) -> AppResult<Vec<TrainingSession>> {
        let request = ApiRequest::get(training::WEEK).query("start", start);
        self.client.send_json(request).await
    }

    /// Ask the AI coach for feedback on a week, the current one by default
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn generate_feedback(
        &self,
        week_start: Option<NaiveDate>,
    ) -> AppResult<WeeklyFeedback> {
        let request = ApiRequest::post(training::FEEDBACK).query_opt("week_start", week_start);
        self.client.send_json(request).await
    }
}
