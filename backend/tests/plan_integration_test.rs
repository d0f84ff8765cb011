//! Integration tests for plan generation

mod common;

use axum::http::StatusCode;
use fake::faker::name::en::FirstName;
use fake::Fake;
use fitplan_shared::demo::demo_plan;
use fitplan_shared::models::{FitnessPlan, UserProfile};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn parse_plan(body: &str) -> FitnessPlan {
    serde_json::from_str(body).expect("response is a plan")
}

#[tokio::test]
async fn test_demo_plan_without_api_key() {
    let app = common::TestApp::new();
    let name: String = FirstName().fake();

    let (status, body) = app
        .post("/api/generate-plan", &common::profile_json(&name))
        .await;

    assert_eq!(status, StatusCode::OK);
    let plan = parse_plan(&body);
    assert_eq!(plan.workout_plan.len(), 7);
    assert!(plan.motivation.starts_with(&format!("{}, your journey to muscle gain", name)));
}

#[tokio::test]
async fn test_malformed_body_is_server_error() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/generate-plan", "{not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Failed to generate fitness plan");
}

#[tokio::test]
async fn test_out_of_range_profile_is_still_served() {
    let app = common::TestApp::new();
    let mut profile: serde_json::Value =
        serde_json::from_str(&common::profile_json("Kai")).unwrap();
    profile["age"] = serde_json::json!(7);
    profile["weight"] = serde_json::json!(250.0);

    let (status, body) = app.post("/api/generate-plan", &profile.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_plan(&body).workout_plan.len(), 7);
}

#[tokio::test]
async fn test_provider_plan_is_returned() {
    let server = MockServer::start().await;
    let profile: UserProfile = serde_json::from_str(&common::profile_json("Noor")).unwrap();
    let mut plan = demo_plan(&profile);
    plan.motivation = "Noor, the model believes in you.".to_string();
    let text = format!("```json\n{}\n```", serde_json::to_string(&plan).unwrap());

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::gemini_reply(&text)))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::TestApp::with_gemini(&server.uri());
    let (status, body) = app
        .post("/api/generate-plan", &common::profile_json("Noor"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_plan(&body), plan);
}

#[tokio::test]
async fn test_short_provider_plan_falls_back_to_demo() {
    let server = MockServer::start().await;
    let profile: UserProfile = serde_json::from_str(&common::profile_json("Noor")).unwrap();
    let mut short = demo_plan(&profile);
    short.workout_plan.truncate(3);
    short.motivation = "from the model".to_string();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::gemini_reply(
            &serde_json::to_string(&short).unwrap(),
        )))
        .mount(&server)
        .await;

    let app = common::TestApp::with_gemini(&server.uri());
    let (status, body) = app
        .post("/api/generate-plan", &common::profile_json("Noor"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_plan(&body), demo_plan(&profile));
}

#[tokio::test]
async fn test_provider_error_falls_back_to_demo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = common::TestApp::with_gemini(&server.uri());
    let (status, body) = app
        .post("/api/generate-plan", &common::profile_json("Ravi"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let plan = parse_plan(&body);
    assert_eq!(plan.workout_plan.len(), 7);
    assert!(plan.motivation.starts_with("Ravi,"));
}

#[tokio::test]
async fn test_slow_provider_is_not_cut_off_by_inbound_timeout() {
    let server = MockServer::start().await;
    let profile: UserProfile = serde_json::from_str(&common::profile_json("Ines")).unwrap();
    let mut plan = demo_plan(&profile);
    plan.motivation = "Ines, worth the wait.".to_string();

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::gemini_reply(&serde_json::to_string(&plan).unwrap()))
                .set_delay(Duration::from_millis(2500)),
        )
        .mount(&server)
        .await;

    let app = common::TestApp::with_gemini_timeout(&server.uri(), 1);
    let (status, body) = app
        .post("/api/generate-plan", &common::profile_json("Ines"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_plan(&body), plan);
}
