use std::sync::Arc;

use tokio::sync::Mutex;

use crate::analysis::view_model::{AnalysisViewModel, SharedViewModel};
use crate::config::Config;
use crate::scoring_client::{Scorer, ScoringClient};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backend used by the analysis flow. Defaults to `client`.
    pub scorer: Arc<dyn Scorer>,
    /// Kept concretely for the upstream health check.
    pub client: ScoringClient,
    /// The one view model this app serves. Never locked across the scoring call.
    pub analysis: SharedViewModel,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = ScoringClient::new(config.scoring_api_url.clone());
        Self {
            scorer: Arc::new(client.clone()),
            client,
            analysis: Arc::new(Mutex::new(AnalysisViewModel::new())),
            config,
        }
    }
}
