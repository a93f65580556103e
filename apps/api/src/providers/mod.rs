/// Generation providers — the only place PromptPilot talks to an external LLM.
///
/// Every provider is reached through the `GenerationProvider` trait and looked
/// up by `ProviderSelector` in a `ProviderRegistry`. The dispatcher never knows
/// which concrete client it is calling.
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::Config;

pub mod gemini;
pub mod groq;

pub use gemini::GeminiClient;
pub use groq::GroqClient;

const TRANSPORT_TIMEOUT_SLACK: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Carries the name of the credential owner, e.g. "Google".
    #[error("{0} API key is not configured")]
    MissingApiKey(&'static str),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned empty content")]
    EmptyContent,
}

// Request URLs can carry credentials, so they never reach the message.
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err.without_url())
    }
}

/// An external text-generation capability: instruction in, generated text out.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Human-readable provider name used in error messages.
    fn name(&self) -> &str;

    async fn generate(&self, instruction: &str) -> Result<String, ProviderError>;
}

/// Caller-facing provider identifiers (`model_choice` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderSelector {
    Gemini,
    Llama3,
}

impl ProviderSelector {
    pub const ALL: [ProviderSelector; 2] = [ProviderSelector::Gemini, ProviderSelector::Llama3];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderSelector::Gemini => "gemini",
            ProviderSelector::Llama3 => "llama3",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown provider selector '{0}'")]
pub struct UnknownSelector(pub String);

impl FromStr for ProviderSelector {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(ProviderSelector::Gemini),
            "llama3" => Ok(ProviderSelector::Llama3),
            other => Err(UnknownSelector(other.to_string())),
        }
    }
}

/// Read-only mapping from selector to provider, built once at startup.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderSelector, Arc<dyn GenerationProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the production registry: Gemini and Llama 3 (via Groq) sharing
    /// one HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        // The dispatcher owns the request deadline; the transport limit sits
        // behind it so a slow provider reports the dispatcher's timeout.
        let http = build_http_client(
            Duration::from_secs(config.provider_timeout_secs) + TRANSPORT_TIMEOUT_SLACK,
        )?;

        let mut gemini = GeminiClient::new(http.clone(), config.google_api_key.clone());
        if let Some(base_url) = &config.gemini_base_url {
            gemini = gemini.with_base_url(base_url.clone());
        }
        let mut groq = GroqClient::new(http, config.groq_api_key.clone());
        if let Some(base_url) = &config.groq_base_url {
            groq = groq.with_base_url(base_url.clone());
        }

        let mut registry = Self::new();
        registry.register(ProviderSelector::Gemini, Arc::new(gemini));
        registry.register(ProviderSelector::Llama3, Arc::new(groq));
        Ok(registry)
    }

    pub fn register(&mut self, selector: ProviderSelector, provider: Arc<dyn GenerationProvider>) {
        self.providers.insert(selector, provider);
    }

    /// Resolves a raw selector string. Unknown or unregistered selectors yield `None`.
    pub fn resolve(&self, selector: &str) -> Option<Arc<dyn GenerationProvider>> {
        let selector = selector.parse::<ProviderSelector>().ok()?;
        self.providers.get(&selector).cloned()
    }

    pub fn selectors(&self) -> Vec<ProviderSelector> {
        ProviderSelector::ALL
            .into_iter()
            .filter(|s| self.providers.contains_key(s))
            .collect()
    }
}

fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}
