use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::JobRanker;
use crate::models::job::Corpus;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable job corpus, loaded once at startup.
    pub corpus: Arc<Corpus>,
    /// Pluggable ranking backend. Default: TfidfRanker (two-stage pipeline).
    pub ranker: Arc<dyn JobRanker>,
    /// Kept for handlers that need runtime tuning knobs.
    #[allow(dead_code)]
    pub config: Config,
}
