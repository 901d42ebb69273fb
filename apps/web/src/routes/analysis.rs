use askama::Template;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use serde::Serialize;
use tracing::error;

use crate::analysis::view_model::{submit, FormFields, ViewState};
use crate::errors::AppError;
use crate::presentation::{stylesheet, IndexPage};
use crate::state::AppState;

#[derive(Serialize)]
pub struct StateSnapshot {
    pub state: ViewState,
    pub fields: FormFields,
    pub can_submit: bool,
    pub demo_loaded: bool,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexPage::from_view_model(&*state.analysis.lock().await);
    Ok(Html(page.render()?))
}

/// POST /analyze
/// Waits for the submission to settle before redirecting. If the client disconnects first,
/// the spawned task still applies the outcome.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Result<Redirect, AppError> {
    let task = submit(&state.analysis, &state.scorer, fields)
        .await
        .map_err(|e| AppError::Conflict(e.to_string()))?;

    if let Some(task) = task {
        if let Err(e) = task.await {
            error!("Scoring task did not finish: {e}");
        }
    }

    Ok(Redirect::to("/"))
}

/// POST /retry
pub async fn handle_retry(State(state): State<AppState>) -> Redirect {
    state.analysis.lock().await.retry();
    Redirect::to("/")
}

/// POST /reset
pub async fn handle_reset(State(state): State<AppState>) -> Redirect {
    state.analysis.lock().await.reset();
    Redirect::to("/")
}

/// POST /demo
pub async fn handle_load_demo(State(state): State<AppState>) -> Redirect {
    state.analysis.lock().await.load_demo();
    Redirect::to("/")
}

/// POST /demo/clear
pub async fn handle_clear_demo(State(state): State<AppState>) -> Redirect {
    state.analysis.lock().await.clear_demo();
    Redirect::to("/")
}

/// GET /api/state
pub async fn handle_get_state(State(state): State<AppState>) -> Json<StateSnapshot> {
    let vm = state.analysis.lock().await;
    Json(StateSnapshot {
        state: vm.state().clone(),
        fields: vm.fields().clone(),
        can_submit: vm.can_submit(),
        demo_loaded: vm.demo_loaded(),
    })
}

/// GET /static/app.css
pub async fn handle_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], stylesheet())
}
