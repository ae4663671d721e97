// Discovery Assistant - API Core
//
// Routes free-text assistant messages to a recommendation category.
// A zero-network keyword tier answers first; a schema-constrained LLM call
// is the fallback. Failures degrade to "no match", never to an error.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
