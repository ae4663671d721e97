use axum::{extract::Extension, Json};
use serde::Deserialize;

use crate::domains::discovery::ClassificationResult;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub message: String,
    /// Conversation context from the assistant. Accepted but not used for routing.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

/// Route one assistant message to a discovery category.
///
/// Always 200: routing failures come back as a no-match result. If the
/// client disconnects, axum drops this future and any in-flight LLM call
/// with it.
pub async fn route_discovery_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<RouteRequest>,
) -> Json<ClassificationResult> {
    tracing::debug!(
        message_length = request.message.len(),
        has_context = request.context.is_some(),
        "Routing discovery query"
    );

    Json(state.discovery_router.route(&request.message).await)
}
