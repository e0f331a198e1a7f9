//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use accrue_engine::{
    calculate, compute_compound_interest, compute_emi, compute_simple_interest,
    CalculationRequest, CalculationResult, CompoundInterestRequest, EmiRequest, EmiResult,
    InterestResult, SimpleInterestRequest,
};

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

/// Every route the server answers, as listed by the root endpoint.
pub const ENDPOINTS: &[&str] = &[
    "/health",
    "/metrics",
    "/api/calculate",
    "/api/calculate/emi",
    "/api/calculate/simple-interest",
    "/api/calculate/compound-interest",
];

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}

/// Metrics response.
#[derive(Serialize)]
pub struct MetricsResponse {
    requests_total: u64,
    uptime_seconds: u64,
}

/// Request count and uptime.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        requests_total: state.requests_total(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Service info response.
#[derive(Serialize)]
pub struct ServiceInfo {
    service: String,
    version: String,
    endpoints: Vec<String>,
}

/// Service name, version and routes.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| (*e).to_string()).collect(),
    })
}

/// Calculate an EMI.
pub async fn calculate_emi(
    payload: Result<Json<EmiRequest>, JsonRejection>,
) -> Result<Json<EmiResult>, ApiError> {
    let Json(request) = payload?;
    let terms = request.validate()?;
    Ok(Json(compute_emi(&terms)))
}

/// Calculate simple interest.
pub async fn calculate_simple_interest(
    payload: Result<Json<SimpleInterestRequest>, JsonRejection>,
) -> Result<Json<InterestResult>, ApiError> {
    let Json(request) = payload?;
    let terms = request.validate()?;
    Ok(Json(compute_simple_interest(&terms)))
}

/// Calculate compound interest.
pub async fn calculate_compound_interest(
    payload: Result<Json<CompoundInterestRequest>, JsonRejection>,
) -> Result<Json<InterestResult>, ApiError> {
    let Json(request) = payload?;
    let terms = request.validate()?;
    Ok(Json(compute_compound_interest(&terms)))
}

/// Calculate any supported kind, selected by the `kind` field.
pub async fn calculate_any(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResult>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(calculate(&request)?))
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
