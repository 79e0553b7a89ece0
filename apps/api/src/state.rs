use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Completer;
use crate::narrative::openings::OpeningPicker;
use crate::store::JournalStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, `UnconfiguredCompleter` without a key.
    pub completer: Arc<dyn Completer>,
    /// Opening-line choice for persona prompts. Random in production.
    pub openings: Arc<dyn OpeningPicker>,
    pub store: Arc<dyn JournalStore>,
    pub config: Config,
}
