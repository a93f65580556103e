use std::sync::Arc;

use crate::improvement::dispatcher::PromptImprovementDispatcher;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<PromptImprovementDispatcher>,
}
