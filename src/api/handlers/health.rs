//! Liveness and health endpoints.
//!
//! None of these touch the upstream API or the webhooks; they only report
//! what the process knows about itself.

use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::jobs::PassReport;
use crate::models::Category;
use crate::state::AppState;

/// Plain-text body served on `/`
pub const LIVENESS_TEXT: &str = "Bot läuft!";

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Time of this response, RFC 3339
    pub timestamp: Timestamp,
    /// Categories with a webhook, in processing order
    pub categories: Vec<Category>,
    /// State store backend name
    pub state_backend: &'static str,
    /// Outcome of the most recent pass, if one has finished
    pub last_pass: Option<PassReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Last pass succeeded, or none has finished yet
    Healthy,
    /// Last pass failed; the server keeps running
    Degraded,
}

/// `/` answers with a fixed text, `/health` with a JSON report and
/// `/health/live` with an empty 200.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
}

pub async fn index() -> &'static str {
    LIVENESS_TEXT
}

/// JSON health report.
///
/// Always `200 OK`: a failed pass degrades the status but the process is
/// still able to serve and to retry on the next run.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let last_pass = state.runner.last_report();
    let status = match &last_pass {
        Some(report) if !report.success => HealthStatus::Degraded,
        _ => HealthStatus::Healthy,
    };

    Json(HealthResponse {
        status,
        version: state.version.clone(),
        timestamp: Timestamp::now(),
        categories: state.categories.clone(),
        state_backend: state.state_backend,
        last_pass,
    })
}

pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
