pub mod analysis;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/health/upstream", get(health::upstream_health_handler))
        // Page + form actions
        .route("/", get(analysis::handle_index))
        .route("/analyze", post(analysis::handle_analyze))
        .route("/retry", post(analysis::handle_retry))
        .route("/reset", post(analysis::handle_reset))
        .route("/demo", post(analysis::handle_load_demo))
        .route("/demo/clear", post(analysis::handle_clear_demo))
        .route("/api/state", get(analysis::handle_get_state))
        .route("/static/app.css", get(analysis::handle_stylesheet))
        .with_state(state)
}
