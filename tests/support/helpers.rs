// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use editorial_core::config::RateLimit;
use editorial_core::application::ports::{time::Clock, util::SlugGenerator};
use editorial_core::application::services::ApplicationServices;
use editorial_core::domain::editorial::ScoringThresholds;
use editorial_core::infrastructure::util::DefaultSlugGenerator;
use editorial_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_services() -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(ScoringThresholds::default(), 200, clock, slugger)
}

pub fn build_test_state() -> HttpState {
    HttpState {
        services: Arc::new(build_services()),
    }
}

/// Router without rate limiting; `oneshot` requests carry no peer address
/// for the limiter to key on.
pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(), &["http://localhost:3000".to_string()], None)
}

/// Router with the per-client limiter enabled. Requests must carry an
/// `x-forwarded-for` header so the limiter has a key.
pub fn make_rate_limited_router(limit: RateLimit) -> axum::Router {
    build_router(
        build_test_state(),
        &["http://localhost:3000".to_string()],
        Some(limit),
    )
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and return the status with the parsed JSON body.
pub async fn send_json(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = serde_json::from_slice(&body_bytes).expect("valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    app: axum::Router,
    req: Request<Body>,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = send_json(app, req).await;
    assert_eq!(status, expected_status);
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
