use axum::{Json, extract::State};
use serde::Serialize;
use tracing::warn;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    cache: String,
}

/// Liveness plus a cache-backend probe.
///
/// An unreachable cache is reported but does not fail the check; the
/// service keeps running in always-miss mode.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = match state.cache.exists("healthz:probe").await {
        Ok(_) => "healthy",
        Err(err) => {
            warn!(%err, "cache backend unreachable");
            "unreachable"
        }
    };
    Json(HealthResponse {
        status: "OK".to_string(),
        cache: cache.to_string(),
    })
}
