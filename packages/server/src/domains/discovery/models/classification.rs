use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Which tier produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Keyword,
    Llm,
    None,
}

/// Outcome of routing one utterance. Lives for a single request.
///
/// `matched` is true exactly when `category` is set. A no-match carries
/// `Tier::Llm` only when the remote classifier answered and said "none";
/// every other no-match, including failures, carries `Tier::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub matched: bool,
    pub category: Option<Category>,
    pub tier: Tier,
    pub latency_ms: u64,
}

impl ClassificationResult {
    pub fn keyword(category: Category, latency: Duration) -> Self {
        Self::hit(category, Tier::Keyword, latency)
    }

    pub fn llm(category: Category, latency: Duration) -> Self {
        Self::hit(category, Tier::Llm, latency)
    }

    /// The remote classifier answered and found no category.
    pub fn llm_declined(latency: Duration) -> Self {
        Self {
            matched: false,
            category: None,
            tier: Tier::Llm,
            latency_ms: millis(latency),
        }
    }

    pub fn no_match(latency: Duration) -> Self {
        Self {
            matched: false,
            category: None,
            tier: Tier::None,
            latency_ms: millis(latency),
        }
    }

    fn hit(category: Category, tier: Tier, latency: Duration) -> Self {
        Self {
            matched: true,
            category: Some(category),
            tier,
            latency_ms: millis(latency),
        }
    }
}

fn millis(latency: Duration) -> u64 {
    u64::try_from(latency.as_millis()).unwrap_or(u64::MAX)
}
