use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - component status, including a `SELECT 1` against the store
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, database) = match rl_db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "operational"),
        Err(e) => {
            warn!("Health check: database unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - liveness check (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness check; not ready while the store is unreachable
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match rl_db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response(),
    }
}
