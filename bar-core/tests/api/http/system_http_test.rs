//! Health, readiness, OpenAPI and middleware HTTP tests

use super::{get_json, get_raw, TestAppState};
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::Value;
use std::sync::atomic::Ordering;
use tower::ServiceExt;

#[tokio::test]
async fn test_health() {
    let state = TestAppState::new();
    let app = state.router();

    let (status, body): (StatusCode, Option<Value>) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ready_when_store_reachable() {
    let state = TestAppState::new();
    let app = state.router();

    let (status, _, body) = get_raw(&app, "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ready");
}

#[tokio::test]
async fn test_ready_when_store_unreachable() {
    let state = TestAppState::new();
    state.ready.store(false, Ordering::SeqCst);
    let app = state.router();

    let (status, _, body) = get_raw(&app, "/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, b"not_ready");
}

#[tokio::test]
async fn test_openapi_document() {
    let state = TestAppState::new();
    let app = state.router();

    let (status, body): (StatusCode, Option<Value>) =
        get_json(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert!(body["paths"]["/v1/business/token/{token}"]["get"].is_object());
    assert!(body["components"]["schemas"]["BusinessSummary"].is_object());
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let state = TestAppState::new();
    let app = state.router();

    let (_, headers, _) = get_raw(&app, "/health").await;

    let request_id = headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let state = TestAppState::new();
    let app = state.router();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/business/token/etc123")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let state = TestAppState::new();
    let app = state.router();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header("origin", "https://www.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let state = TestAppState::new();
    let app = state.router();

    let (status, _, _) = get_raw(&app, "/v1/business/abcde123").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
