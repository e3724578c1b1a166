//! Health check endpoint for the dashboard frontend and container orchestration.
//!
//! The frontend talks to Supabase directly for all real work; this route only
//! tells callers the backend process is up. The body is a fixed JSON document.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::{HEALTH_DETAILS, HEALTH_MESSAGE, HEALTH_STATUS_OK};

/// Health check response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub details: String,
}

impl HealthStatus {
    /// The only status this service ever reports.
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            message: HEALTH_MESSAGE.to_string(),
            details: HEALTH_DETAILS.to_string(),
        }
    }
}

/// Health check handler.
///
/// Liveness probe only: it never touches I/O, so a response means the process
/// can accept and answer HTTP requests.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
