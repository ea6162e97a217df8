use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model capability used by both pipeline stages. `LlmClient` in production.
    pub llm: Arc<dyn CompletionModel>,
    pub config: Config,
}
