//! Scoring client: the single point of contact with the external scoring service.
//!
//! Every failure of `score` is normalized into a `ScoringError` here; callers never
//! see a raw `reqwest::Error` from the main flow. One attempt per call, no retries.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::score::{HealthStatus, ScoreRequest, ScoreResponse};

const SCORE_PATH: &str = "/score";
const HEALTH_PATH: &str = "/health";

pub const UNREACHABLE_MESSAGE: &str =
    "Unable to connect to the scoring service. Please check if the API is running.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred while scoring the resume.";

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringError {
    /// The request never reached the service (refused, DNS, reset).
    #[error("{message}")]
    Transport { message: String },

    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        detail: Option<Value>,
    },

    #[error("{message}")]
    Unexpected { message: String },
}

impl ScoringError {
    pub fn transport() -> Self {
        ScoringError::Transport {
            message: UNREACHABLE_MESSAGE.to_string(),
        }
    }

    pub fn unexpected() -> Self {
        ScoringError::Unexpected {
            message: UNEXPECTED_MESSAGE.to_string(),
        }
    }

    /// 0 when the service was never reached, 500 for unexpected failures.
    pub fn status_code(&self) -> u16 {
        match self {
            ScoringError::Transport { .. } => 0,
            ScoringError::Http { status, .. } => *status,
            ScoringError::Unexpected { .. } => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ScoringError::Transport { message }
            | ScoringError::Http { message, .. }
            | ScoringError::Unexpected { message } => message,
        }
    }

    pub fn detail(&self) -> Option<&Value> {
        match self {
            ScoringError::Http { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }
}

/// Anything that can turn a `ScoreRequest` into a `ScoreResponse`.
///
/// Carried in `AppState` as `Arc<dyn Scorer>`; `ScoringClient` is the production backend.
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn score(&self, request: &ScoreRequest) -> Result<ScoreResponse, ScoringError>;
}

#[derive(Clone)]
pub struct ScoringClient {
    client: Client,
    base_url: String,
}

impl ScoringClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST the request to `/score` and decode the breakdown.
    ///
    /// The success body is decoded into the typed `ScoreResponse`; a body that does not
    /// match the schema is reported as an unexpected failure rather than passed on.
    pub async fn score(&self, request: &ScoreRequest) -> Result<ScoreResponse, ScoringError> {
        let response = self
            .client
            .post(self.url(SCORE_PATH))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();

        if !status.is_success() {
            // An unreadable body is treated the same as an unparsable one.
            let body = response.bytes().await.unwrap_or_default();
            let err = http_error(status, &body);
            warn!(
                "Scoring service returned {}: {}",
                err.status_code(),
                err.message()
            );
            return Err(err);
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read scoring response body: {e}");
            ScoringError::unexpected()
        })?;

        let parsed: ScoreResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Scoring response did not match the expected schema: {e}");
            ScoringError::unexpected()
        })?;

        for (category, data) in &parsed.skills_breakdown {
            if !data.weight_in_range() {
                warn!("Category {category} has weight {} outside 0..=1", data.weight);
            }
        }

        debug!(
            "Scoring call succeeded: final_score={}, categories={}",
            parsed.final_score,
            parsed.skills_breakdown.len()
        );

        Ok(parsed)
    }

    /// GET `/health`. Diagnostics only: failures are returned as-is.
    pub async fn check_health(&self) -> Result<HealthStatus, reqwest::Error> {
        self.client
            .get(self.url(HEALTH_PATH))
            .send()
            .await?
            .json::<HealthStatus>()
            .await
    }
}

#[async_trait]
impl Scorer for ScoringClient {
    async fn score(&self, request: &ScoreRequest) -> Result<ScoreResponse, ScoringError> {
        ScoringClient::score(self, request).await
    }
}

fn classify_send_error(err: reqwest::Error) -> ScoringError {
    if err.is_builder() {
        warn!("Could not build scoring request: {err}");
        ScoringError::unexpected()
    } else {
        warn!("Scoring service unreachable: {err}");
        ScoringError::transport()
    }
}

/// Builds the error for a non-2xx answer. A body that is not JSON yields no detail and
/// the synthesized `HTTP <status>: <reason>` message.
fn http_error(status: StatusCode, body: &[u8]) -> ScoringError {
    let detail: Option<Value> = serde_json::from_slice(body).ok();

    let message = detail
        .as_ref()
        .and_then(|body| body.get("detail"))
        .and_then(detail_message)
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )
            .trim_end()
            .to_string()
        });

    ScoringError::Http {
        status: status.as_u16(),
        message,
        detail,
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        // FastAPI validation errors carry a list here
        other => Some(other.to_string()),
    }
}
