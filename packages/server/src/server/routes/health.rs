use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    vocabulary_version: String,
    vocabulary_terms: usize,
    llm_tier: String,
}

/// Health check endpoint
///
/// The router has no external hard dependencies, so the service is healthy
/// whenever it is up. `llm_tier` reports whether the remote fallback is wired.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let router = &state.discovery_router;

    let llm_tier = if router.llm_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            vocabulary_version: router.vocabulary().version().to_string(),
            vocabulary_terms: router.vocabulary().len(),
            llm_tier: llm_tier.to_string(),
        }),
    )
}
