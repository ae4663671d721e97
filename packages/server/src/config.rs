use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::kernel::DISCOVERY_MODEL;

const DEFAULT_LLM_TIMEOUT_MS: u64 = 2_000;
const MIN_LLM_TIMEOUT_MS: u64 = 1_000;
const MAX_LLM_TIMEOUT_MS: u64 = 3_000;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Without a key the LLM tier is disabled and routing is keyword-only
    pub openai_api_key: Option<String>,
    pub discovery_model: String,
    pub discovery_llm_timeout: Duration,
    /// Optional JSON vocabulary replacing the built-in table
    pub vocabulary_path: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let timeout_ms = match env::var("DISCOVERY_LLM_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("DISCOVERY_LLM_TIMEOUT_MS must be a number of milliseconds")?,
            Err(_) => DEFAULT_LLM_TIMEOUT_MS,
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            discovery_model: env::var("DISCOVERY_MODEL")
                .unwrap_or_else(|_| DISCOVERY_MODEL.to_string()),
            discovery_llm_timeout: clamp_llm_timeout(timeout_ms),
            vocabulary_path: env::var("DISCOVERY_VOCABULARY_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }
}

/// The LLM tier is best-effort; keep its budget between one and three seconds.
pub fn clamp_llm_timeout(timeout_ms: u64) -> Duration {
    let clamped = timeout_ms.clamp(MIN_LLM_TIMEOUT_MS, MAX_LLM_TIMEOUT_MS);
    if clamped != timeout_ms {
        tracing::warn!(
            requested_ms = timeout_ms,
            clamped_ms = clamped,
            "DISCOVERY_LLM_TIMEOUT_MS out of range, clamping"
        );
    }
    Duration::from_millis(clamped)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_clamped_to_best_effort_range() {
        assert_eq!(clamp_llm_timeout(50), Duration::from_millis(1_000));
        assert_eq!(clamp_llm_timeout(2_500), Duration::from_millis(2_500));
        assert_eq!(clamp_llm_timeout(60_000), Duration::from_millis(3_000));
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins(" http://localhost:3000, https://app.example.com ,,"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }
}
