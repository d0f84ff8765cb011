//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint_in_demo_mode() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["checks"]["ai"]["status"], "demo");
}

#[tokio::test]
async fn test_readiness_endpoint_with_provider() {
    let app = common::TestApp::with_gemini("http://127.0.0.1:1");

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["checks"]["ai"]["status"], "configured");
}

#[tokio::test]
async fn test_api_root() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("FitPlan API"));
}
