//! Discovery query routing: keyword tier first, LLM tier as fallback.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::keyword_match::{match_keywords, KeywordOutcome};
use super::likely_discovery::is_likely_discovery_query;
use super::llm_classify::classify_with_llm;
use crate::domains::discovery::models::{ClassificationResult, Utterance, Vocabulary};
use crate::kernel::{BaseAI, ServerDeps};

/// Routes utterances to a discovery category.
///
/// Holds only shared read-only state, so one instance serves every request.
#[derive(Clone)]
pub struct DiscoveryRouter {
    vocabulary: Arc<Vocabulary>,
    ai: Option<Arc<dyn BaseAI>>,
    llm_timeout: Duration,
}

impl DiscoveryRouter {
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        ai: Option<Arc<dyn BaseAI>>,
        llm_timeout: Duration,
    ) -> Self {
        Self {
            vocabulary,
            ai,
            llm_timeout,
        }
    }

    pub fn from_deps(deps: &ServerDeps) -> Self {
        Self::new(deps.vocabulary.clone(), deps.ai.clone(), deps.llm_timeout)
    }

    /// Router with the LLM tier disabled.
    pub fn keyword_only(vocabulary: Arc<Vocabulary>) -> Self {
        Self::new(vocabulary, None, Duration::ZERO)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn llm_enabled(&self) -> bool {
        self.ai.is_some()
    }

    /// Classify one utterance. Never fails: every internal problem becomes
    /// a no-match result.
    pub async fn route(&self, utterance: &str) -> ClassificationResult {
        let start = Instant::now();

        let Some(parsed) = Utterance::parse(utterance) else {
            debug!("Empty utterance, skipping discovery routing");
            return ClassificationResult::no_match(start.elapsed());
        };

        match match_keywords(&self.vocabulary, &parsed) {
            KeywordOutcome::Matched {
                category,
                term,
                signal,
            } => {
                let result = ClassificationResult::keyword(category, start.elapsed());
                info!(
                    category = %category,
                    term = %term,
                    signal = %signal,
                    latency_ms = result.latency_ms,
                    "Discovery query matched by keyword tier"
                );
                return result;
            }
            KeywordOutcome::TermWithoutIntent { category, term } => {
                debug!(
                    category = %category,
                    term = %term,
                    "Category term without intent signal, not a keyword match"
                );
            }
            KeywordOutcome::NoTerm => {}
        }

        if !is_likely_discovery_query(&self.vocabulary, &parsed) {
            debug!(tokens = parsed.tokens().len(), "Utterance not discovery-related");
            return ClassificationResult::no_match(start.elapsed());
        }

        let Some(ai) = &self.ai else {
            debug!("LLM tier disabled, no discovery match");
            return ClassificationResult::no_match(start.elapsed());
        };

        match classify_with_llm(ai.as_ref(), utterance, self.llm_timeout).await {
            Ok(Some(category)) => {
                let result = ClassificationResult::llm(category, start.elapsed());
                info!(
                    category = %category,
                    model = ai.model_name(),
                    latency_ms = result.latency_ms,
                    "Discovery query classified by LLM tier"
                );
                result
            }
            Ok(None) => {
                let result = ClassificationResult::llm_declined(start.elapsed());
                debug!(
                    model = ai.model_name(),
                    latency_ms = result.latency_ms,
                    "LLM tier found no discovery category"
                );
                result
            }
            Err(e) => {
                warn!(
                    error = %e,
                    model = ai.model_name(),
                    "LLM discovery classification failed, falling back to no match"
                );
                ClassificationResult::no_match(start.elapsed())
            }
        }
    }
}
