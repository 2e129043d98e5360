// HTTP tests for the JSON API, driven through the router with oneshot.
#![cfg(feature = "web")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use smolder::pipeline::verdict::{Analyzer, AnalyzerSettings};
use smolder::web::{build_router, AppState};

fn app() -> Router {
    let analyzer = Analyzer::new(AnalyzerSettings::default()).unwrap();
    build_router(AppState { analyzer })
}

async fn post_json(body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/check-toxicity")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn toxic_text_returns_verdict() {
    let (status, json) = post_json(r#"{"text": "I hate you, you stupid idiot"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_toxic"], true);
    assert_eq!(json["detected_patterns"], serde_json::json!(["hate", "insults"]));
    assert_eq!(json["censored_text"], "I h*** you, you s****d i***t");
    assert!(json["summary"].is_null());
}

#[tokio::test]
async fn clean_text_returns_verdict() {
    let (status, json) = post_json(r#"{"text": "The weather today is lovely and calm."}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_toxic"], false);
    assert_eq!(json["score"], 0.0);
    assert_eq!(json["detected_patterns"], serde_json::json!([]));
}

#[tokio::test]
async fn missing_text_is_bad_request() {
    let (status, json) = post_json(r#"{"comment": "hello"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request. Text is required.");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, json) = post_json("not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request. Text is required.");
}

#[tokio::test]
async fn non_string_text_is_bad_request() {
    let (status, json) = post_json(r#"{"text": 42}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request. Text is required.");
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/check-toxicity")
        .body(Body::from(r#"{"text": "hello"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_is_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn index_serves_html() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("/api/check-toxicity"));
}
