use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The chat model behind `Arc<dyn ChatModel>` so tests can substitute a
    /// fake returning canned completions.
    pub llm: Arc<dyn ChatModel>,
    pub config: Config,
}
