//! Health probe route handlers.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// The `/health` response body.
#[derive(Debug, Serialize)]
pub struct Health {
    /// Always `"OK"` when the process is serving.
    pub status: &'static str,
    /// Server time, RFC 3339.
    pub timestamp: String,
}

/// Liveness health check endpoint.
///
/// Requires no credential and touches no dependencies.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
