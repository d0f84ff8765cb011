//! Common test utilities for integration tests
//!
//! This module provides shared setup for router-level tests. Requests go
//! through `tower::ServiceExt::oneshot`; no port is bound.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitplan_backend::{
    config::{AiConfig, AppConfig},
    routes,
    state::AppState,
};
use fitplan_shared::form::ProfileForm;
use tower::ServiceExt;

/// Key accepted by the credential check
pub const TEST_API_KEY: &str = "AIzaTestKey123";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// App in demo mode: no API key configured
    pub fn new() -> Self {
        Self::from_config(test_config(None))
    }

    /// App whose Gemini provider talks to `base_url` (a wiremock server)
    pub fn with_gemini(base_url: &str) -> Self {
        let mut config = test_config(Some(TEST_API_KEY));
        config.ai.base_url = base_url.to_string();
        Self::from_config(config)
    }

    /// Gemini-backed app with a short inbound request timeout
    pub fn with_gemini_timeout(base_url: &str, request_timeout_secs: u64) -> Self {
        let mut config = test_config(Some(TEST_API_KEY));
        config.ai.base_url = base_url.to_string();
        config.server.request_timeout_secs = request_timeout_secs;
        Self::from_config(config)
    }

    fn from_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config(api_key: Option<&str>) -> AppConfig {
    AppConfig {
        server: fitplan_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        ai: AiConfig {
            api_key: api_key.map(str::to_string),
            ..AiConfig::default()
        },
    }
}

/// A valid profile as the creation form would submit it
pub fn profile_json(name: &str) -> String {
    let mut form = ProfileForm::default();
    form.set_field("name", name).unwrap();
    serde_json::to_string(&form.submit().unwrap()).unwrap()
}

/// Gemini `generateContent` body wrapping `text`
pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    })
}
