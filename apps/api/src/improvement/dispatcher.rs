//! Prompt improvement dispatcher.
//!
//! Strictly ordered, short-circuiting:
//! 1. structure heuristic → canned "well structured"
//! 2. short input classifier → canned greeting / farewell / acknowledgement
//! 3. resolve provider from the selector (unknown → `InvalidSelector`, no network)
//! 4. fill the instruction template
//! 5. call the provider once (no retry, no fallback) and trim its output
//!
//! The dispatcher holds only read-only data and is shared across requests.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::improvement::prompts::{fill_instruction, WELL_STRUCTURED_RESPONSE};
use crate::improvement::short_input::{classify_short, PreviousIntent};
use crate::improvement::structure::is_well_structured;
use crate::providers::{ProviderError, ProviderRegistry};

/// One improvement request. `model_choice` is kept as the raw caller string so
/// an unknown value is only rejected if the heuristics do not answer first.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub prompt: String,
    pub model_choice: String,
    pub previous_intent: Option<PreviousIntent>,
}

/// Failure taxonomy tag. Callers branch on this, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidSelector,
    Config,
    ProviderFailure,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImproveError {
    #[error("Invalid model choice '{selector}'")]
    InvalidSelector { selector: String },

    #[error("{message}")]
    Config { message: String },

    #[error("An error occurred with {provider}: {message}")]
    ProviderFailure { provider: String, message: String },
}

impl ImproveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImproveError::InvalidSelector { .. } => ErrorKind::InvalidSelector,
            ImproveError::Config { .. } => ErrorKind::Config,
            ImproveError::ProviderFailure { .. } => ErrorKind::ProviderFailure,
        }
    }
}

/// Exactly one of improved text or a typed failure.
pub type PromptResult = Result<String, ImproveError>;

pub struct PromptImprovementDispatcher {
    registry: ProviderRegistry,
    provider_timeout: Duration,
}

impl PromptImprovementDispatcher {
    pub fn new(registry: ProviderRegistry, provider_timeout: Duration) -> Self {
        Self {
            registry,
            provider_timeout,
        }
    }

    pub async fn improve(&self, request: &PromptRequest) -> PromptResult {
        if is_well_structured(&request.prompt) {
            debug!("Prompt short-circuited: already well structured");
            return Ok(WELL_STRUCTURED_RESPONSE.to_string());
        }

        if let Some(canned) = classify_short(&request.prompt, request.previous_intent) {
            debug!("Prompt short-circuited: {canned:?}");
            return Ok(canned.text().to_string());
        }

        let provider = self.registry.resolve(&request.model_choice).ok_or_else(|| {
            ImproveError::InvalidSelector {
                selector: request.model_choice.clone(),
            }
        })?;

        let instruction = fill_instruction(&request.prompt);
        info!(
            "Dispatching prompt to {} ({} chars)",
            provider.name(),
            request.prompt.chars().count()
        );

        let outcome = tokio::time::timeout(self.provider_timeout, provider.generate(&instruction))
            .await;

        match outcome {
            Ok(Ok(text)) => Ok(text.trim().to_string()),
            Ok(Err(ProviderError::MissingApiKey(owner))) => {
                warn!("{} is not configured: {owner} API key missing", provider.name());
                Err(ImproveError::Config {
                    message: ProviderError::MissingApiKey(owner).to_string(),
                })
            }
            Ok(Err(e)) => {
                warn!("{} call failed: {e}", provider.name());
                Err(ImproveError::ProviderFailure {
                    provider: provider.name().to_string(),
                    message: e.to_string(),
                })
            }
            Err(_) => {
                warn!(
                    "{} call timed out after {}s",
                    provider.name(),
                    self.provider_timeout.as_secs()
                );
                Err(ImproveError::ProviderFailure {
                    provider: provider.name().to_string(),
                    message: format!(
                        "request timed out after {}s",
                        self.provider_timeout.as_secs()
                    ),
                })
            }
        }
    }
}
