//! Test harness: routers and apps wired to a scripted MockAI.
//!
//! Run tests with logs: RUST_LOG=debug cargo test -- --nocapture

use std::sync::Arc;
use std::time::Duration;

use assistant_core::domains::discovery::{DiscoveryRouter, Vocabulary};
use assistant_core::kernel::{BaseAI, MockAI, ServerDeps};
use assistant_core::server::{build_app, AppOptions, AppState};
use axum::Router;

pub const TEST_LLM_TIMEOUT: Duration = Duration::from_millis(300);

/// Initialize tracing once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_deps(ai: Option<&MockAI>) -> ServerDeps {
    init_tracing();
    let ai: Option<Arc<dyn BaseAI>> = ai.map(|mock| Arc::new(mock.clone()) as Arc<dyn BaseAI>);
    ServerDeps::new(ai, Vocabulary::builtin(), TEST_LLM_TIMEOUT)
}

/// Router over the built-in vocabulary backed by `ai`.
pub fn test_router(ai: &MockAI) -> DiscoveryRouter {
    DiscoveryRouter::from_deps(&test_deps(Some(ai)))
}

/// Full HTTP app without rate limiting.
pub fn test_app(ai: Option<&MockAI>) -> Router {
    build_app(AppState::new(&test_deps(ai)), &AppOptions::default())
}

/// Full HTTP app with explicit options (rate limiting, CORS).
pub fn test_app_with_options(ai: Option<&MockAI>, options: AppOptions) -> Router {
    build_app(AppState::new(&test_deps(ai)), &options)
}
