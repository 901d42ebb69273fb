//! Analysis view model. It owns the form fields and the Idle → Submitting → Success/Failed
//! state machine that the page is rendered from.
//!
//! The scoring call is the only suspension point. `submit` drives a whole round trip on a
//! view model shared behind a lock: `begin_submit` runs under the lock, the call and
//! `complete` run on a spawned task so the lock is not held across the network call and
//! the outcome is applied even if the caller goes away.
//! Every submission gets a fresh sequence number and `complete` ignores outcomes whose
//! number no longer matches the pending one (reset or superseded in the meantime).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::analysis::demo::{DEMO_COMPANY, DEMO_JOB_DESCRIPTION, DEMO_RESUME};
use crate::analysis::validation::{validate_lengths, ValidationError};
use crate::models::score::{ScoreRequest, ScoreResponse, UNKNOWN_COMPANY};
use crate::scoring_client::{Scorer, ScoringError};

pub const CANNOT_CONNECT_MESSAGE: &str =
    "Cannot connect to the scoring service. Please check your connection.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred. Please try again later.";

/// Current contents of the input form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default = "default_company")]
    pub company_name: String,
}

fn default_company() -> String {
    UNKNOWN_COMPANY.to_string()
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            resume_text: String::new(),
            job_description: String::new(),
            company_name: default_company(),
        }
    }
}

impl FormFields {
    pub fn passes_guards(&self) -> bool {
        validate_lengths(&self.resume_text, &self.job_description).is_ok()
    }

    /// Company is passed through as-is; any adjustment is computed by the service.
    pub fn to_request(&self) -> ScoreRequest {
        ScoreRequest {
            resume_text: self.resume_text.clone(),
            job_description: self.job_description.clone(),
            company_name: self.company_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "source", content = "error", rename_all = "snake_case")]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl AnalysisError {
    /// The message shown in the error panel.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Validation(e) => e.to_string(),
            AnalysisError::Scoring(e) => match e.status_code() {
                0 => CANNOT_CONNECT_MESSAGE.to_string(),
                400 => e.message().to_string(),
                s if s >= 500 => SERVER_ERROR_MESSAGE.to_string(),
                _ => e.message().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub message: String,
    pub error: AnalysisError,
}

impl From<AnalysisError> for Failure {
    fn from(error: AnalysisError) -> Self {
        Self {
            message: error.user_message(),
            error,
        }
    }
}

/// Snapshot of an issued request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingSubmission {
    pub seq: u64,
    pub request: ScoreRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Idle,
    Submitting(PendingSubmission),
    Success(ScoreResponse),
    Failed(Failure),
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Submitting(_) => "submitting",
            ViewState::Success(_) => "success",
            ViewState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Default)]
pub struct AnalysisViewModel {
    fields: FormFields,
    state: ViewState,
    last_seq: u64,
    demo_loaded: bool,
}

impl AnalysisViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ViewState::Submitting(_))
    }

    /// Whether the submit control should be enabled. Not enforced by `submit` itself.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.fields.passes_guards()
    }

    pub fn demo_loaded(&self) -> bool {
        self.demo_loaded
    }

    /// Stores `fields`, applies the length guards and, if they pass, moves to
    /// `Submitting`. Returns the request to send, or `None` when validation failed.
    pub fn begin_submit(&mut self, fields: FormFields) -> Option<PendingSubmission> {
        self.fields = fields;

        if let Err(e) = validate_lengths(&self.fields.resume_text, &self.fields.job_description)
        {
            debug!("Submission rejected by length guard: {e}");
            self.state = ViewState::Failed(AnalysisError::from(e).into());
            return None;
        }

        self.last_seq += 1;
        let pending = PendingSubmission {
            seq: self.last_seq,
            request: self.fields.to_request(),
        };
        info!(
            "Submitting analysis #{} (company: {})",
            pending.seq, pending.request.company_name
        );
        self.state = ViewState::Submitting(pending.clone());
        Some(pending)
    }

    /// Applies the outcome of submission `seq`. Returns `false` if it was stale and dropped.
    pub fn complete(&mut self, seq: u64, outcome: Result<ScoreResponse, ScoringError>) -> bool {
        match &self.state {
            ViewState::Submitting(pending) if pending.seq == seq => {}
            _ => {
                debug!("Discarding stale outcome for analysis #{seq}");
                return false;
            }
        }

        self.state = match outcome {
            Ok(response) => {
                info!(
                    "Analysis #{seq} complete: final_score={}",
                    response.final_score
                );
                ViewState::Success(response)
            }
            Err(e) => {
                warn!("Analysis #{seq} failed ({}): {}", e.status_code(), e);
                if let Some(detail) = e.detail() {
                    debug!("Analysis #{seq} error body: {detail}");
                }
                ViewState::Failed(AnalysisError::from(e).into())
            }
        };
        true
    }

    /// Dismisses the error panel. Does not resubmit.
    pub fn retry(&mut self) {
        if matches!(self.state, ViewState::Failed(_)) {
            self.state = ViewState::Idle;
        }
    }

    /// "Start new analysis": drops any result or error. An in-flight request is abandoned
    /// and its outcome will be discarded by `complete`.
    pub fn reset(&mut self) {
        if !matches!(self.state, ViewState::Idle) {
            debug!("Resetting analysis from {}", self.state.name());
        }
        self.state = ViewState::Idle;
    }

    pub fn load_demo(&mut self) {
        self.fields = FormFields {
            resume_text: DEMO_RESUME.to_string(),
            job_description: DEMO_JOB_DESCRIPTION.to_string(),
            company_name: DEMO_COMPANY.to_string(),
        };
        self.demo_loaded = true;
    }

    pub fn clear_demo(&mut self) {
        self.fields = FormFields::default();
        self.demo_loaded = false;
        self.reset();
    }
}

/// The view model as shared between request handlers.
pub type SharedViewModel = Arc<Mutex<AnalysisViewModel>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("An analysis is already in progress")]
    InProgress,
}

/// Runs one full submission against `scorer`.
///
/// Refuses while another submission is pending. Returns `None` when the length guards
/// rejected the input and no call was made; otherwise the handle of the task that
/// performs the call and applies its outcome. Dropping the handle does not cancel it.
pub async fn submit(
    view_model: &SharedViewModel,
    scorer: &Arc<dyn Scorer>,
    fields: FormFields,
) -> Result<Option<JoinHandle<()>>, SubmitError> {
    let pending = {
        let mut vm = view_model.lock().await;
        if vm.is_submitting() {
            return Err(SubmitError::InProgress);
        }
        vm.begin_submit(fields)
    };

    Ok(pending.map(|pending| {
        let view_model = Arc::clone(view_model);
        let scorer = Arc::clone(scorer);
        tokio::spawn(async move {
            let outcome = scorer.score(&pending.request).await;
            view_model.lock().await.complete(pending.seq, outcome);
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::score::fixtures::service_response_json;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct StubScorer {
        outcome: Result<ScoreResponse, ScoringError>,
        calls: AtomicUsize,
        delay: Duration,
    }

    impl StubScorer {
        fn ok() -> Arc<Self> {
            Self::with(Ok(response()))
        }

        fn err(e: ScoringError) -> Arc<Self> {
            Self::with(Err(e))
        }

        fn with(outcome: Result<ScoreResponse, ScoringError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
                delay: Duration::ZERO,
            })
        }

        fn slow(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(response()),
                calls: AtomicUsize::new(0),
                delay,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Scorer for StubScorer {
        async fn score(&self, _request: &ScoreRequest) -> Result<ScoreResponse, ScoringError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.outcome.clone()
        }
    }

    fn response() -> ScoreResponse {
        serde_json::from_value(service_response_json()).unwrap()
    }

    fn valid_fields() -> FormFields {
        FormFields {
            resume_text: "r".repeat(60),
            job_description: "j".repeat(40),
            company_name: "google".to_string(),
        }
    }

    fn http(status: u16, message: &str) -> ScoringError {
        ScoringError::Http {
            status,
            message: message.to_string(),
            detail: None,
        }
    }

    fn shared() -> SharedViewModel {
        Arc::new(Mutex::new(AnalysisViewModel::new()))
    }

    /// Submits and waits for the outcome to be applied.
    async fn submit_and_wait(vm: &SharedViewModel, scorer: &Arc<StubScorer>, fields: FormFields) {
        let scorer: Arc<dyn Scorer> = scorer.clone();
        if let Some(task) = submit(vm, &scorer, fields).await.unwrap() {
            task.await.unwrap();
        }
    }

    async fn state_of(vm: &SharedViewModel) -> ViewState {
        vm.lock().await.state().clone()
    }

    fn failed_message(state: &ViewState) -> &str {
        match state {
            ViewState::Failed(f) => &f.message,
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_state_is_idle_with_unknown_company() {
        let vm = AnalysisViewModel::new();
        assert_eq!(vm.state(), &ViewState::Idle);
        assert_eq!(vm.fields().company_name, "unknown");
        assert!(!vm.can_submit());
    }

    #[tokio::test]
    async fn test_short_resume_fails_without_network_call() {
        let scorer = StubScorer::ok();
        let vm = shared();
        let fields = FormFields {
            resume_text: "too short".to_string(),
            ..valid_fields()
        };

        submit_and_wait(&vm, &scorer, fields).await;

        assert_eq!(
            failed_message(&state_of(&vm).await),
            "Resume text must be at least 50 characters long."
        );
        assert_eq!(scorer.calls(), 0);
    }

    #[tokio::test]
    async fn test_short_job_description_fails_without_network_call() {
        let scorer = StubScorer::ok();
        let vm = shared();
        let fields = FormFields {
            job_description: "j".repeat(29),
            ..valid_fields()
        };

        submit_and_wait(&vm, &scorer, fields).await;

        assert_eq!(
            failed_message(&state_of(&vm).await),
            "Job description must be at least 30 characters long."
        );
        assert_eq!(scorer.calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_submit_calls_once_and_succeeds() {
        let scorer = StubScorer::ok();
        let vm = shared();

        submit_and_wait(&vm, &scorer, valid_fields()).await;

        assert_eq!(scorer.calls(), 1);
        assert_eq!(state_of(&vm).await, ViewState::Success(response()));
    }

    #[tokio::test]
    async fn test_error_messages_by_status() {
        let cases = [
            (ScoringError::transport(), CANNOT_CONNECT_MESSAGE),
            (http(400, "bad input"), "bad input"),
            (http(404, "HTTP 404: Not Found"), "HTTP 404: Not Found"),
            (http(503, "HTTP 503: Service Unavailable"), SERVER_ERROR_MESSAGE),
            (ScoringError::unexpected(), SERVER_ERROR_MESSAGE),
        ];

        for (err, expected) in cases {
            let vm = shared();
            submit_and_wait(&vm, &StubScorer::err(err.clone()), valid_fields()).await;

            let state = state_of(&vm).await;
            assert_eq!(failed_message(&state), expected, "for {err:?}");
            match state {
                ViewState::Failed(f) => assert_eq!(f.error, AnalysisError::Scoring(err)),
                _ => unreachable!(),
            }
        }
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_refused() {
        let scorer = StubScorer::slow(Duration::from_millis(200));
        let dyn_scorer: Arc<dyn Scorer> = scorer.clone();
        let vm = shared();

        let task = submit(&vm, &dyn_scorer, valid_fields()).await.unwrap();
        let second = submit(&vm, &dyn_scorer, valid_fields()).await;

        assert_eq!(second.unwrap_err(), SubmitError::InProgress);
        task.unwrap().await.unwrap();
        assert_eq!(scorer.calls(), 1);
        assert!(matches!(state_of(&vm).await, ViewState::Success(_)));
    }

    #[tokio::test]
    async fn test_outcome_applied_after_caller_stops_waiting() {
        let scorer = StubScorer::slow(Duration::from_millis(100));
        let vm = shared();

        // The returned handle is dropped straight away.
        let dyn_scorer: Arc<dyn Scorer> = scorer.clone();
        drop(submit(&vm, &dyn_scorer, valid_fields()).await.unwrap());
        assert!(vm.lock().await.is_submitting());

        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(state_of(&vm).await, ViewState::Success(response()));
        assert!(vm.lock().await.can_submit());
    }

    #[tokio::test]
    async fn test_retry_from_failed_goes_idle_without_call() {
        let scorer = StubScorer::err(ScoringError::transport());
        let vm = shared();
        submit_and_wait(&vm, &scorer, valid_fields()).await;
        assert_eq!(scorer.calls(), 1);

        let mut vm = vm.lock().await;
        vm.retry();

        assert_eq!(vm.state(), &ViewState::Idle);
        assert_eq!(scorer.calls(), 1);
        // Fields survive so the user can resubmit.
        assert_eq!(vm.fields(), &valid_fields());
    }

    #[tokio::test]
    async fn test_retry_outside_failed_is_noop() {
        let vm = shared();
        submit_and_wait(&vm, &StubScorer::ok(), valid_fields()).await;

        vm.lock().await.retry();

        assert!(matches!(state_of(&vm).await, ViewState::Success(_)));
    }

    #[tokio::test]
    async fn test_reset_clears_success_and_failure() {
        let vm = shared();
        submit_and_wait(&vm, &StubScorer::ok(), valid_fields()).await;
        vm.lock().await.reset();
        assert_eq!(state_of(&vm).await, ViewState::Idle);

        submit_and_wait(&vm, &StubScorer::err(http(500, "boom")), valid_fields()).await;
        vm.lock().await.reset();
        assert_eq!(state_of(&vm).await, ViewState::Idle);
    }

    #[test]
    fn test_begin_submit_clears_prior_result() {
        let mut vm = AnalysisViewModel::new();
        let first = vm.begin_submit(valid_fields()).unwrap();
        vm.complete(first.seq, Ok(response()));

        let second = vm.begin_submit(valid_fields()).unwrap();

        assert!(second.seq > first.seq);
        assert_eq!(vm.state(), &ViewState::Submitting(second));
        assert!(!vm.can_submit());
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut vm = AnalysisViewModel::new();
        let older = vm.begin_submit(valid_fields()).unwrap();
        let newer = vm.begin_submit(valid_fields()).unwrap();

        assert!(!vm.complete(older.seq, Err(ScoringError::transport())));
        assert_eq!(vm.state(), &ViewState::Submitting(newer.clone()));

        assert!(vm.complete(newer.seq, Ok(response())));
        assert!(matches!(vm.state(), ViewState::Success(_)));
    }

    #[test]
    fn test_outcome_after_reset_is_discarded() {
        let mut vm = AnalysisViewModel::new();
        let pending = vm.begin_submit(valid_fields()).unwrap();
        vm.reset();

        assert!(!vm.complete(pending.seq, Ok(response())));
        assert_eq!(vm.state(), &ViewState::Idle);
    }

    #[test]
    fn test_request_snapshot_passes_company_through() {
        let mut vm = AnalysisViewModel::new();
        let fields = FormFields {
            company_name: "Some Odd Co".to_string(),
            ..valid_fields()
        };
        let pending = vm.begin_submit(fields).unwrap();
        assert_eq!(pending.request.company_name, "Some Odd Co");
        assert_eq!(pending.request.resume_text, "r".repeat(60));
    }

    #[test]
    fn test_demo_load_and_clear() {
        let mut vm = AnalysisViewModel::new();
        vm.load_demo();
        assert!(vm.demo_loaded());
        assert_eq!(vm.fields().company_name, "apple");
        assert!(vm.can_submit());

        vm.begin_submit(vm.fields().clone());
        vm.clear_demo();

        assert!(!vm.demo_loaded());
        assert_eq!(vm.fields(), &FormFields::default());
        assert_eq!(vm.state(), &ViewState::Idle);
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let mut vm = AnalysisViewModel::new();
        vm.begin_submit(FormFields::default());

        let value = serde_json::to_value(vm.state()).unwrap();
        assert_eq!(value["state"], "failed");
        assert_eq!(
            value["message"],
            "Resume text must be at least 50 characters long."
        );
        assert_eq!(
            value["error"],
            json!({"source": "validation", "error": "resume_too_short"})
        );
    }

    #[test]
    fn test_form_fields_default_company_when_missing() {
        let fields: FormFields =
            serde_json::from_value(json!({"resume_text": "a", "job_description": "b"})).unwrap();
        assert_eq!(fields.company_name, "unknown");
    }
}
