use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-scorer",
        "scoring_api_url": state.config.scoring_api_url,
    }))
}

/// GET /health/upstream
/// Asks the scoring service for its own health. 502 when it does not answer.
pub async fn upstream_health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let health = state.client.check_health().await?;
    Ok(Json(json!({
        "upstream": state.client.base_url(),
        "status": health.status,
    })))
}
