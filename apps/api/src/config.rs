use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
///
/// Provider credentials are optional here: a missing key only surfaces as an
/// error when a request actually selects that provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    /// Overrides for the provider endpoints (proxies, regional gateways).
    pub gemini_base_url: Option<String>,
    pub groq_base_url: Option<String>,
    pub cors_origins: Vec<String>,
    pub provider_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            groq_api_key: optional_env("GROQ_API_KEY"),
            gemini_base_url: optional_env("GEMINI_BASE_URL"),
            groq_base_url: optional_env("GROQ_BASE_URL"),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            provider_timeout_secs: parse_timeout_secs(
                &std::env::var("PROVIDER_TIMEOUT_SECS").unwrap_or_else(|_| "60".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an environment variable, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout_secs(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("PROVIDER_TIMEOUT_SECS must be greater than zero");
    }
    Ok(secs)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
