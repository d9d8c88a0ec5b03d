// ABOUTME: Backend liveness payload returned by GET /health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// `{"status": "healthy", "app": "RunFuel"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "healthy" when the backend is up
    pub status: String,
    /// Backend application name
    #[serde(default)]
    pub app: String,
}

impl HealthStatus {
    /// Whether the backend reported itself healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
