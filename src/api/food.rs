// ABOUTME: Bindings for /api/v1/food: AI analysis, confirmation, manual entry, search, and favorites
// ABOUTME: Photo uploads go out as multipart form data with fixed long timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::api::require_id;
use crate::client::{ApiClient, ApiRequest, MultipartField};
use bytes::Bytes;
use runfuel_core::constants::analysis_timeouts;
use runfuel_core::constants::endpoints::food;
use runfuel_core::errors::{AppError, AppResult};
use runfuel_core::models::{AiAnalysisResponse, ConfirmAnalysisRequest, FoodEntry, ManualFoodEntry};
use runfuel_core::validation::Validate;
use serde_json::json;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

const PHOTO_FIELD: &str = "photo";
const DESCRIPTION_FIELD: &str = "description";

/// An image selected for analysis
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    /// File name reported to the backend
    pub file_name: String,
    /// MIME type such as `image/jpeg`
    pub mime_type: String,
    /// Image bytes
    pub bytes: Bytes,
}

impl fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PhotoUpload {
    /// Photo from bytes already in memory
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a photo from disk, guessing its MIME type from the extension
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unsupported extensions and a storage error
    /// if the file cannot be read
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let mime_type = image_mime_type(path).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unsupported image type for {}, expected jpg, png, webp, or heic",
                path.display()
            ))
        })?;
        let bytes = fs::read(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "photo".to_owned(), |name| name.to_string_lossy().into_owned());
        Ok(Self::new(file_name, mime_type, Bytes::from(bytes)))
    }

    fn into_field(self) -> MultipartField {
        MultipartField::File {
            name: PHOTO_FIELD.to_owned(),
            file_name: self.file_name,
            mime_type: self.mime_type,
            bytes: self.bytes,
        }
    }
}

fn image_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

/// Food logging endpoints
#[derive(Clone, Copy)]
pub struct FoodApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FoodApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Ask the AI to identify the foods in a photo
    ///
    /// # Errors
    ///
    /// Returns the backend error, or `Timeout` after 30 seconds
    pub async fn analyze_photo(&self, photo: PhotoUpload) -> AppResult<AiAnalysisResponse> {
        let request = ApiRequest::post(food::ANALYZE_PHOTO)
            .multipart(vec![photo.into_field()])
            .timeout(Duration::from_secs(analysis_timeouts::PHOTO_SECS));
        self.client.send_json(request).await
    }

    /// Ask the AI to estimate a meal described in words
    ///
    /// # Errors
    ///
    /// Returns the backend error, or `Timeout` after 30 seconds
    pub async fn analyze_text(&self, description: &str) -> AppResult<AiAnalysisResponse> {
        let request = ApiRequest::post(food::ANALYZE_TEXT)
            .json(&json!({ "description": description }))?
            .timeout(Duration::from_secs(analysis_timeouts::TEXT_SECS));
        self.client.send_json(request).await
    }

    /// Analyze a photo with an accompanying description
    ///
    /// # Errors
    ///
    /// Returns the backend error, or `Timeout` after 45 seconds
    pub async fn analyze_photo_with_text(
        &self,
        photo: PhotoUpload,
        description: &str,
    ) -> AppResult<AiAnalysisResponse> {
        let fields = vec![
            photo.into_field(),
            MultipartField::Text {
                name: DESCRIPTION_FIELD.to_owned(),
                value: description.to_owned(),
            },
        ];
        let request = ApiRequest::post(food::ANALYZE_PHOTO_TEXT)
            .multipart(fields)
            .timeout(Duration::from_secs(analysis_timeouts::PHOTO_WITH_TEXT_SECS));
        self.client.send_json(request).await
    }

    /// Save reviewed analysis items as food entries
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn confirm_analysis(
        &self,
        request: &ConfirmAnalysisRequest,
    ) -> AppResult<Vec<FoodEntry>> {
        let request = ApiRequest::post(food::CONFIRM_ANALYSIS).json(request)?;
        self.client.send_json(request).await
    }

    /// Log a food by hand
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` before any network call when the entry is
    /// invalid, otherwise the backend error
    pub async fn manual_entry(&self, entry: &ManualFoodEntry) -> AppResult<FoodEntry> {
        entry.validate()?;
        let request = ApiRequest::post(food::MANUAL).json(entry)?;
        self.client.send_json(request).await
    }

    /// Search previously logged foods
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty query, otherwise the backend error
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodEntry>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query is required"));
        }
        let request = ApiRequest::get(food::SEARCH).query("q", query);
        self.client.send_json(request).await
    }

    /// Favorite foods
    ///
    /// # Errors
    ///
    /// Returns the backend error
    pub async fn favorites(&self) -> AppResult<Vec<FoodEntry>> {
        self.client.send_json(ApiRequest::get(food::FAVORITES)).await
    }

    /// Flip the favorite flag of an entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown entries
    pub async fn toggle_favorite(&self, entry_id: &str) -> AppResult<FoodEntry> {
        let path = food::favorite(require_id("entry", entry_id)?);
        self.client.send_json(ApiRequest::post(path)).await
    }
}
