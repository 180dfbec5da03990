use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Health response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub mailer: String,
    pub timestamp: String,
}

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - Health check endpoint
///
/// The service stays healthy without a provider key; delivery degrades to
/// the backup path, reported here as the "simulation" mode.
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let mailer_status = if state.mailer.is_configured() {
        "configured"
    } else {
        "simulation"
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        mailer: mailer_status.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
