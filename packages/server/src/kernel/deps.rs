//! Server dependencies (using traits for testability)
//!
//! Built once at startup and shared read-only by every request.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domains::discovery::models::Vocabulary;
use crate::kernel::{BaseAI, OpenAIAdapter};

/// Slack between the router's own deadline and the HTTP client's, so the
/// router's timeout is the one that fires.
const CLIENT_TIMEOUT_SLACK: Duration = Duration::from_millis(500);

#[derive(Clone)]
pub struct ServerDeps {
    /// Remote classifier for the LLM tier. `None` disables that tier.
    pub ai: Option<Arc<dyn BaseAI>>,
    pub vocabulary: Arc<Vocabulary>,
    pub llm_timeout: Duration,
}

impl ServerDeps {
    pub fn new(
        ai: Option<Arc<dyn BaseAI>>,
        vocabulary: Arc<Vocabulary>,
        llm_timeout: Duration,
    ) -> Self {
        Self {
            ai,
            vocabulary,
            llm_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = match &config.vocabulary_path {
            Some(path) => {
                let vocab = Vocabulary::from_json_file(path).with_context(|| {
                    format!("Failed to load discovery vocabulary from {}", path.display())
                })?;
                Arc::new(vocab)
            }
            None => Vocabulary::builtin(),
        };

        tracing::info!(
            version = vocabulary.version(),
            terms = vocabulary.len(),
            intent_signals = vocabulary.intent_signals().len(),
            "Discovery vocabulary loaded"
        );

        for category in vocabulary.uncovered_categories() {
            tracing::warn!(
                category = %category,
                "No keyword terms for category; only the LLM tier can produce it"
            );
        }

        for phrase in vocabulary.shadowed_phrases() {
            tracing::warn!(
                phrase = %phrase.term,
                category = %phrase.category,
                "Vocabulary phrase can never match; one of its words is already a term"
            );
        }

        let ai: Option<Arc<dyn BaseAI>> = match &config.openai_api_key {
            Some(key) => {
                let adapter = OpenAIAdapter::from_api_key(
                    key,
                    config.discovery_model.clone(),
                    config.discovery_llm_timeout + CLIENT_TIMEOUT_SLACK,
                )?;
                tracing::info!(model = %config.discovery_model, "LLM discovery tier enabled");
                Some(Arc::new(adapter))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set, discovery routing is keyword-only");
                None
            }
        };

        Ok(Self::new(ai, vocabulary, config.discovery_llm_timeout))
    }
}
