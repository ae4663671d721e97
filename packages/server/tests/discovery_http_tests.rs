//! HTTP surface: route and health endpoints driven through the axum router.

mod common;

use std::net::SocketAddr;
use std::time::Duration;

use assistant_core::kernel::MockAI;
use assistant_core::server::AppOptions;
use axum::body::{to_bytes, Body};
use axum::extract::ConnectInfo;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use common::*;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn route_returns_keyword_classification() {
    let ai = MockAI::new();
    let (status, body) = post_json(
        test_app(Some(&ai)),
        "/api/discovery/route",
        json!({"message": "can you recommend a good pizza place"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched"], true);
    assert_eq!(body["category"], "food");
    assert_eq!(body["tier"], "keyword");
    assert!(body["latency_ms"].is_u64());
}

#[tokio::test]
async fn route_accepts_and_ignores_context() {
    let ai = MockAI::new().with_category("movies");
    let (status, body) = post_json(
        test_app(Some(&ai)),
        "/api/discovery/route",
        json!({
            "message": "what should I watch tonight",
            "context": [{"role": "user", "content": "hi"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "movies");
    assert_eq!(body["tier"], "llm");
    assert_eq!(ai.structured_calls()[0].user_prompt, "what should I watch tonight");
}

#[tokio::test]
async fn route_fails_soft_on_classifier_error() {
    let ai = MockAI::new().with_error("upstream exploded");
    let (status, body) = post_json(
        test_app(Some(&ai)),
        "/api/discovery/route",
        json!({"message": "what should I watch tonight"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"matched": false, "category": null, "tier": "none", "latency_ms": body["latency_ms"]})
    );
}

#[tokio::test]
async fn route_blank_message_makes_no_calls() {
    let ai = MockAI::new().with_category("food");
    let (status, body) = post_json(
        test_app(Some(&ai)),
        "/api/discovery/route",
        json!({"message": "   "}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tier"], "none");
    assert_eq!(ai.call_count(), 0);
}

#[tokio::test]
async fn route_rejects_missing_message() {
    let (status, _) = post_json(test_app(None), "/api/discovery/route", json!({"text": "hi"})).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn health_reports_vocabulary_and_llm_tier() {
    let (status, body) = get_json(test_app(Some(&MockAI::new())), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["llm_tier"], "enabled");
    assert!(body["vocabulary_terms"].as_u64().unwrap() > 0);
    assert!(!body["vocabulary_version"].as_str().unwrap().is_empty());

    let (_, body) = get_json(test_app(None), "/health").await;
    assert_eq!(body["llm_tier"], "disabled");
}

async fn post_from(app: Router, peer: SocketAddr) -> StatusCode {
    let mut request = Request::builder()
        .method("POST")
        .uri("/api/discovery/route")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"message": " "}).to_string()))
        .unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));

    app.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn rate_limit_allows_configured_rate_per_second() {
    let app = test_app_with_options(
        None,
        AppOptions {
            allowed_origins: vec![],
            rate_limit_per_second: Some(10),
        },
    );
    let peer = SocketAddr::from(([10, 0, 0, 1], 40_000));

    // Burst of twice the rate, then throttled
    let mut first_rejection = None;
    for i in 0..40 {
        if post_from(app.clone(), peer).await == StatusCode::TOO_MANY_REQUESTS {
            first_rejection = Some(i);
            break;
        }
    }
    let first_rejection = first_rejection.expect("limiter never engaged");
    assert!(first_rejection >= 20, "rejected after {first_rejection} requests");

    // 10 rps refills one request every 100 ms
    tokio::time::sleep(Duration::from_millis(450)).await;
    for _ in 0..3 {
        assert_eq!(post_from(app.clone(), peer).await, StatusCode::OK);
    }

    // Other clients have their own quota
    let other = SocketAddr::from(([10, 0, 0, 2], 40_000));
    assert_eq!(post_from(app.clone(), other).await, StatusCode::OK);
}

#[tokio::test]
async fn zero_rate_disables_the_limiter() {
    let app = test_app_with_options(
        None,
        AppOptions {
            allowed_origins: vec![],
            rate_limit_per_second: Some(0),
        },
    );

    // No ConnectInfo needed when the limiter is off
    for _ in 0..30 {
        let (status, _) = post_json(app.clone(), "/api/discovery/route", json!({"message": " "})).await;
        assert_eq!(status, StatusCode::OK);
    }
}
