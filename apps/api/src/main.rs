mod config;
mod errors;
mod improvement;
mod providers;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::improvement::dispatcher::PromptImprovementDispatcher;
use crate::providers::ProviderRegistry;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PromptPilot API v{}", env!("CARGO_PKG_VERSION"));

    // Missing keys are reported per request; only warn here.
    if config.google_api_key.is_none() {
        warn!("GOOGLE_API_KEY is not set; 'gemini' requests will fail");
    }
    if config.groq_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; 'llama3' requests will fail");
    }

    let registry = ProviderRegistry::from_config(&config)?;
    let selectors: Vec<&str> = registry.selectors().iter().map(|s| s.as_str()).collect();
    info!(
        "Providers registered: {} (timeout {}s)",
        selectors.join(", "),
        config.provider_timeout_secs
    );

    let dispatcher = PromptImprovementDispatcher::new(
        registry,
        Duration::from_secs(config.provider_timeout_secs),
    );

    let state = AppState {
        dispatcher: Arc::new(dispatcher),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
