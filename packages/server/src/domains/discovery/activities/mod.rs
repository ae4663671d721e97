//! Discovery routing activities
//!
//! - `keyword_match`: zero-network term + intent lookup
//! - `likely_discovery`: gate for the remote call
//! - `llm_classify`: remote classification, validated against `Category`
//! - `route_query`: the two-tier pipeline

pub mod keyword_match;
pub mod likely_discovery;
pub mod llm_classify;
pub mod route_query;

pub use keyword_match::{find_intent_signal, find_term, match_keywords, KeywordOutcome};
pub use likely_discovery::is_likely_discovery_query;
pub use llm_classify::{category_schema, classify_with_llm, parse_verdict, ClassifierError};
pub use route_query::DiscoveryRouter;
