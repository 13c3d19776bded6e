use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use copydesk::config::ReviewSettings;
use copydesk::workflows::originality::{SearchError, SearchGateway, SearchHit};
use copydesk::workflows::review::ScoringConfig;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Rubric defaults adjusted by deploy-time overrides.
pub(crate) fn scoring_config(settings: &ReviewSettings) -> ScoringConfig {
    let mut config = ScoringConfig::default();
    if let Some(cutoff) = settings.pass_cutoff {
        config.pass_cutoff = cutoff;
    }
    if let Some(floor) = settings.word_floor {
        config.word_floor = floor;
    }
    config
}

/// Gateway used when no search collaborator is configured. Every lookup
/// reports no result, so originality checks fail open instead of erroring.
#[derive(Debug, Clone, Default)]
pub(crate) struct DisabledSearchGateway;

impl SearchGateway for DisabledSearchGateway {
    fn top_result(&self, _query: &str) -> Result<Option<SearchHit>, SearchError> {
        Ok(None)
    }
}
