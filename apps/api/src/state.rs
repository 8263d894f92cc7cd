use std::sync::Arc;

use crate::config::Config;
use crate::judge::IntentJudge;
use crate::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable intent judge. Gemini-backed when GEMINI_API_KEY is set,
    /// keyword fallback otherwise.
    pub judge: Arc<dyn IntentJudge>,
    pub config: Config,
}
