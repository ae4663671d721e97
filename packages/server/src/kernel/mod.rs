//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

/// Default model for discovery classification: small, fast, schema-capable.
pub const DISCOVERY_MODEL: &str = "gpt-4o-mini";

pub use ai::OpenAIAdapter;
pub use deps::ServerDeps;
pub use test_dependencies::{MockAI, StructuredCallArgs};
pub use traits::*;
