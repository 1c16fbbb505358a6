//! Response types for the claim engine API.
//!
//! This module defines the success envelope returned by `/calculate` and
//! the error response structures shared by all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AggregateResult, AnnualResult, ClaimConfiguration, ClaimResult};

/// The envelope returned by `POST /calculate`.
///
/// The engine core returns a deterministic [`ClaimResult`]; the HTTP layer
/// adds the bookkeeping fields (calculation id, timestamp, engine version)
/// and echoes the resolved profile and configuration so exports can render
/// a self-contained document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The resolved company-profile identifier.
    pub profile: String,
    /// The configuration the claim was computed under.
    pub configuration: ClaimConfiguration,
    /// One row per year in the claim window, ascending.
    pub years: Vec<AnnualResult>,
    /// Totals over non-reference years.
    pub totals: AggregateResult,
}

impl ClaimResponse {
    /// Wraps an engine result into a response envelope.
    pub fn new(result: ClaimResult, profile: &str, configuration: ClaimConfiguration) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: profile.to_string(),
            configuration,
            years: result.years,
            totals: result.totals,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::NonPositiveCap { cap } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CONFIGURATION",
                    format!("Vacation day cap must be positive, got {}", cap),
                    "Set vacation_cap_days to a positive number of days",
                ),
            },
        }
    }
}
