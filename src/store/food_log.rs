// ABOUTME: Review buffer for AI food analysis results before they are saved
// ABOUTME: Keeps the proposed items editable and their calorie total in sync
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::api::PhotoUpload;
use crate::client::ApiClient;
use runfuel_core::errors::{AppError, AppResult};
use runfuel_core::models::{
    AiAnalysisResponse, ConfirmAnalysisRequest, FoodEntry, FoodItemAi, HealthRating, MealType,
};
use serde_json::Value;
use tracing::{debug, info};

/// Analysis result under review
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisDraft {
    /// Items as currently edited
    pub items: Vec<FoodItemAi>,
    /// Sum of the items' calories
    pub total_calories: f64,
    /// Notes returned with the analysis
    pub meal_notes: String,
    /// Whole-meal health assessment
    pub health_evaluation: Option<HealthRating>,
    /// Improvement tip
    pub health_tip: Option<String>,
    /// Analysis as received, sent back on confirm for auditing
    pub raw: Option<Value>,
}

impl AnalysisDraft {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_calories: 0.0,
            meal_notes: String::new(),
            health_evaluation: None,
            health_tip: None,
            raw: None,
        }
    }

    fn from_response(response: AiAnalysisResponse) -> Self {
        let raw = serde_json::to_value(&response).ok();
        let mut draft = Self {
            items: response.items,
            total_calories: 0.0,
            meal_notes: response.meal_notes,
            health_evaluation: response.health_evaluation,
            health_tip: response.health_tip,
            raw,
        };
        // The backend total may disagree with its own items
        draft.recompute_total();
        draft
    }

    fn recompute_total(&mut self) {
        self.total_calories = self.items.iter().map(|item| item.calories).sum();
    }
}

/// Food analysis review state
#[derive(Debug, Clone, Default)]
pub struct FoodLogStore {
    draft: Option<AnalysisDraft>,
    selected_photo: Option<PhotoUpload>,
    is_analyzing: bool,
}

impl FoodLogStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Result under review, if any
    #[must_use]
    pub const fn draft(&self) -> Option<&AnalysisDraft> {
        self.draft.as_ref()
    }

    /// Photo chosen for analysis
    #[must_use]
    pub const fn selected_photo(&self) -> Option<&PhotoUpload> {
        self.selected_photo.as_ref()
    }

    /// Whether an analysis call is running
    #[must_use]
    pub const fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    /// Sum of the draft items' calories, 0 without a draft
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.draft.as_ref().map_or(0.0, |draft| draft.total_calories)
    }

    /// Replace the draft with a new analysis, or clear it
    pub fn set_analysis_result(&mut self, result: Option<AiAnalysisResponse>) {
        self.draft = result.map(AnalysisDraft::from_response);
    }

    /// Remember the photo to analyze
    pub fn set_selected_photo(&mut self, photo: Option<PhotoUpload>) {
        self.selected_photo = photo;
    }

    /// Mark an analysis call as running or finished
    pub fn set_analyzing(&mut self, analyzing: bool) {
        self.is_analyzing = analyzing;
    }

    /// Append an item, starting a draft if there is none
    pub fn add_item(&mut self, item: FoodItemAi) {
        let draft = self.draft.get_or_insert_with(AnalysisDraft::empty);
        draft.items.push(item);
        draft.recompute_total();
    }

    /// Replace the item at `index`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without a draft or for an index out of range
    pub fn update_item(&mut self, index: usize, item: FoodItemAi) -> AppResult<()> {
        let draft = self.draft_mut()?;
        let slot = draft
            .items
            .get_mut(index)
            .ok_or_else(|| index_error(index))?;
        *slot = item;
        draft.recompute_total();
        Ok(())
    }

    /// Remove and return the item at `index`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without a draft or for an index out of range
    pub fn remove_item(&mut self, index: usize) -> AppResult<FoodItemAi> {
        let draft = self.draft_mut()?;
        if index >= draft.items.len() {
            return Err(index_error(index));
        }
        let removed = draft.items.remove(index);
        draft.recompute_total();
        Ok(removed)
    }

    /// Drop the draft, the photo, and the analyzing flag
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Body for saving the reviewed items under `meal_type`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when there is nothing to save
    pub fn confirm_request(&self, meal_type: MealType) -> AppResult<ConfirmAnalysisRequest> {
        let draft = self
            .draft
            .as_ref()
            .filter(|draft| !draft.items.is_empty())
            .ok_or_else(|| AppError::invalid_input("No analyzed items to save"))?;
        Ok(ConfirmAnalysisRequest {
            meal_type,
            items: draft.items.clone(),
            photo_url: None,
            ai_raw_response: draft.raw.clone(),
        })
    }

    /// Analyze a photo, optionally with a description, and start reviewing the result
    ///
    /// # Errors
    ///
    /// Returns the API error; the previous draft is kept in that case
    pub async fn analyze_photo(
        &mut self,
        client: &ApiClient,
        photo: PhotoUpload,
        description: Option<&str>,
    ) -> AppResult<&AnalysisDraft> {
        self.selected_photo = Some(photo.clone());
        self.is_analyzing = true;
        let result = match description.map(str::trim).filter(|text| !text.is_empty()) {
            Some(text) => client.food().analyze_photo_with_text(photo, text).await,
            None => client.food().analyze_photo(photo).await,
        };
        self.finish_analysis(result)
    }

    /// Analyze a text description and start reviewing the result
    ///
    /// # Errors
    ///
    /// Returns the API error; the previous draft is kept in that case
    pub async fn analyze_text(
        &mut self,
        client: &ApiClient,
        description: &str,
    ) -> AppResult<&AnalysisDraft> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::invalid_input("Describe the meal to analyze"));
        }
        self.is_analyzing = true;
        let result = client.food().analyze_text(description).await;
        self.finish_analysis(result)
    }

    fn finish_analysis(
        &mut self,
        result: AppResult<AiAnalysisResponse>,
    ) -> AppResult<&AnalysisDraft> {
        self.is_analyzing = false;
        let response = result?;
        debug!(items = response.items.len(), "analysis ready for review");
        Ok(&*self.draft.insert(AnalysisDraft::from_response(response)))
    }

    /// Save the reviewed items and clear the buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when there is nothing to save, or the API
    /// error; the buffer is kept on failure so the review is not lost
    pub async fn confirm(
        &mut self,
        client: &ApiClient,
        meal_type: MealType,
    ) -> AppResult<Vec<FoodEntry>> {
        let request = self.confirm_request(meal_type)?;
        let entries = client.food().confirm_analysis(&request).await?;
        info!(entries = entries.len(), meal = %meal_type, "analysis saved");
        self.reset();
        Ok(entries)
    }

    /// Discard the review without saving
    pub fn cancel(&mut self) {
        debug!("analysis review cancelled");
        self.reset();
    }

    fn draft_mut(&mut self) -> AppResult<&mut AnalysisDraft> {
        self.draft
            .as_mut()
            .ok_or_else(|| AppError::invalid_input("No analysis under review"))
    }
}

fn index_error(index: usize) -> AppError {
    AppError::invalid_input(format!("No analyzed item at position {index}"))
}
