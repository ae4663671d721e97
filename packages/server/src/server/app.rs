//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::discovery::DiscoveryRouter;
use crate::kernel::ServerDeps;
use crate::server::routes::{health_handler, route_discovery_handler};

/// Utterances are short; anything larger is not a chat message.
const MAX_BODY_BYTES: usize = 16 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub discovery_router: Arc<DiscoveryRouter>,
}

impl AppState {
    pub fn new(deps: &ServerDeps) -> Self {
        Self {
            discovery_router: Arc::new(DiscoveryRouter::from_deps(deps)),
        }
    }
}

/// HTTP-level options that do not affect routing semantics
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    /// Sustained per-IP requests per second, with bursts of twice that.
    /// `None` or zero disables rate limiting.
    pub rate_limit_per_second: Option<u32>,
}

impl AppOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            rate_limit_per_second: Some(10),
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Milliseconds between refills for a sustained `per_second` rate.
fn replenish_interval_ms(per_second: u32) -> u64 {
    (1_000 / u64::from(per_second.max(1))).max(1)
}

/// Build the Axum application router
pub fn build_app(state: AppState, options: &AppOptions) -> Router {
    let mut discovery = Router::new().route("/api/discovery/route", post(route_discovery_handler));

    if let Some(per_second) = options.rate_limit_per_second.filter(|&n| n > 0) {
        // Every LLM-tier request costs a model call; cap per-IP bursts.
        // The governor takes the interval that refills one request, not a rate.
        let rate_limit_config = Arc::new(
            GovernorConfigBuilder::default()
                .per_millisecond(replenish_interval_ms(per_second))
                .burst_size(per_second.saturating_mul(2))
                .use_headers()
                .finish()
                .expect("Rate limiter configuration is valid and should never fail"),
        );
        discovery = discovery.layer(GovernorLayer {
            config: rate_limit_config,
        });
    }

    Router::new()
        .route("/health", get(health_handler))
        .merge(discovery)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(Extension(state))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors_layer(&options.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
