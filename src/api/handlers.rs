//! HTTP request handlers for the claim engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! host application re-invokes `/calculate` on every edit of the payroll
//! grid, so handlers do nothing beyond request coercion and one engine
//! call.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_claim, evaluate_scenario, CompanyProfile};
use crate::models::{ClaimConfiguration, MonthlyRecord, NegotiationScenario};

use super::request::{ClaimRequest, NegotiationRequest};
use super::response::{ApiError, ApiErrorResponse, ClaimResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/negotiate", post(negotiate_handler))
}

/// Handler for the `POST /calculate` endpoint.
///
/// Accepts the monthly records and claim configuration, and returns the
/// computed per-year rows and totals.
async fn calculate_handler(
    payload: Result<Json<ClaimRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing claim calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let profile = CompanyProfile::from_identifier(&request.profile);
    if !request.profile.trim().is_empty()
        && !profile.identifier().eq_ignore_ascii_case(request.profile.trim())
    {
        warn!(
            correlation_id = %correlation_id,
            requested = %request.profile,
            resolved = %profile.identifier(),
            "Unknown profile identifier, using default"
        );
    }

    let configuration: ClaimConfiguration = request.configuration.into();
    let records: Vec<MonthlyRecord> = request.records.into_iter().map(Into::into).collect();

    match calculate_claim(&records, &configuration, profile) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                profile = %profile.identifier(),
                records_count = records.len(),
                years_count = result.years.len(),
                net_amount = %result.totals.net_amount,
                "Claim calculation completed successfully"
            );
            let response = ClaimResponse::new(result, profile.identifier(), configuration);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Claim calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the `POST /negotiate` endpoint.
///
/// Evaluates a negotiation scenario against a gross claim.
async fn negotiate_handler(
    payload: Result<Json<NegotiationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing negotiation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let gross_claim = request.gross_claim.value();
    let scenario: NegotiationScenario = request.scenario.into();
    let outcome = evaluate_scenario(gross_claim, &scenario);

    info!(
        correlation_id = %correlation_id,
        expected_value = %outcome.expected_value,
        negative_outcome = outcome.negative_outcome,
        "Negotiation scenario evaluated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(outcome),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to the error response body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use tower::ServiceExt;

    use crate::models::NegotiationOutcome;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_request_body() -> serde_json::Value {
        json!({
            "profile": "transit",
            "configuration": {
                "start_claim_year": 2020,
                "vacation_cap_days": "28",
                "include_voucher_credit": false
            },
            "records": [
                {
                    "year": 2019,
                    "month_index": 0,
                    "allowances": {"night_work": "1200"},
                    "days_worked": "220",
                    "days_vacation": "0"
                },
                {
                    "year": 2020,
                    "month_index": 6,
                    "days_worked": "0",
                    "days_vacation": "30"
                }
            ]
        })
    }

    async fn post(uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let router = create_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let (status, body) = post("/calculate", valid_request_body().to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let response: ClaimResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.profile, "transit");
        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.years.len(), 2);
        assert_eq!(response.totals.gross_amount.round_dp(2), dec("152.73"));
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (status, body) = post("/calculate", "{invalid json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_configuration_returns_400() {
        let (status, body) = post("/calculate", json!({"records": []}).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("configuration"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_non_positive_cap_returns_400() {
        let mut body = valid_request_body();
        body["configuration"]["vacation_cap_days"] = json!("0");

        let (status, bytes) = post("/calculate", body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_CONFIGURATION");
    }

    #[tokio::test]
    async fn test_api_005_unknown_profile_falls_back_to_default() {
        let mut body = valid_request_body();
        body["profile"] = json!("acme");

        let (status, bytes) = post("/calculate", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let response: ClaimResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(response.profile, "transit");
    }

    #[tokio::test]
    async fn test_api_006_negotiate_returns_outcome() {
        let body = json!({
            "gross_claim": "10000",
            "scenario": {
                "win_probability": "90",
                "legal_costs": "1500",
                "years_duration": 3,
                "net_mode": false
            }
        });

        let (status, bytes) = post("/negotiate", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let outcome: NegotiationOutcome = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(outcome.expected_value, dec("7500"));
        assert_eq!(outcome.present_value.round_dp(2), dec("6863.56"));
        assert!(!outcome.negative_outcome);
    }
}
