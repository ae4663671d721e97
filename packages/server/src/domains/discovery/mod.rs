//! Discovery domain - routes assistant messages to a recommendation category

pub mod activities;
pub mod data;
pub mod models;

pub use activities::{is_likely_discovery_query, DiscoveryRouter};
pub use models::{Category, ClassificationResult, Tier, Utterance, Vocabulary};
