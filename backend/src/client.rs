//! HTTP client for the FitPlan API
//!
//! `PlanClient` is what the UI layer talks to. `CreatePlanFlow` drives the
//! creation form: validate, submit once, persist the result.

use fitplan_shared::errors::StorageError;
use fitplan_shared::form::ProfileForm;
use fitplan_shared::models::{FitnessPlan, UserProfile};
use fitplan_shared::session::PlanSession;
use fitplan_shared::storage::KeyValueStore;
use fitplan_shared::types::{
    ErrorResponse, GenerateImageRequest, GenerateVoiceRequest, ImageDescriptionResponse,
    MotivationResponse, VoiceResponse,
};
use fitplan_shared::validation::ValidationError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, warn};

/// Shown when a plan request fails for any reason
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate plan. Please try again.";

/// Quote shown when the motivation endpoint cannot be reached
pub const FALLBACK_QUOTE: &str = "Your only limit is you. Push harder today!";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid profile")]
    Invalid(Vec<ValidationError>),

    #[error("A plan is already being generated")]
    InFlight,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Messages for the form; field errors are listed individually
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            ClientError::Invalid(errors) => errors.iter().map(|e| e.user_message()).collect(),
            _ => vec![GENERATE_FAILED_MESSAGE.to_string()],
        }
    }
}

/// Client for the FitPlan HTTP API
#[derive(Debug, Clone)]
pub struct PlanClient {
    http: Client,
    base_url: String,
}

impl PlanClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8080`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::read(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::read(response).await
    }

    /// POST /api/generate-plan
    pub async fn generate_plan(&self, profile: &UserProfile) -> Result<FitnessPlan, ClientError> {
        self.post("/generate-plan", profile).await
    }

    /// GET /api/motivation, or the fallback quote on any failure
    pub async fn motivational_quote(&self) -> String {
        match self.get::<MotivationResponse>("/motivation").await {
            Ok(body) => body.quote,
            Err(e) => {
                warn!(error = %e, "Could not fetch quote, using fallback");
                FALLBACK_QUOTE.to_string()
            }
        }
    }

    /// POST /api/generate-image
    pub async fn describe_image(
        &self,
        prompt: &str,
    ) -> Result<ImageDescriptionResponse, ClientError> {
        let body = GenerateImageRequest {
            prompt: prompt.to_string(),
        };
        self.post("/generate-image", &body).await
    }

    /// POST /api/generate-voice
    pub async fn voice(&self, text: &str) -> Result<VoiceResponse, ClientError> {
        let body = GenerateVoiceRequest {
            text: text.to_string(),
        };
        self.post("/generate-voice", &body).await
    }
}

/// Clears the in-flight flag when a submission ends, however it ends
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        debug!("Released plan submission");
    }
}

/// Create-plan form submission
#[derive(Debug)]
pub struct CreatePlanFlow {
    client: PlanClient,
    in_flight: AtomicBool,
}

impl CreatePlanFlow {
    pub fn new(client: PlanClient) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is running; the submit control is disabled meanwhile
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate the form, request a plan, and persist it with the profile
    ///
    /// A second call while one is running fails with `InFlight` and sends
    /// nothing. Nothing is persisted on failure.
    pub async fn submit<S: KeyValueStore>(
        &self,
        form: &ProfileForm,
        session: &mut PlanSession<S>,
    ) -> Result<FitnessPlan, ClientError> {
        let profile = form.submit().map_err(ClientError::Invalid)?;
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(ClientError::InFlight)?;

        let plan = self.client.generate_plan(&profile).await?;
        session.save(&profile, &plan)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_shared::demo::demo_plan;
    use fitplan_shared::session::PlanView;
    use fitplan_shared::storage::MemoryStore;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn form(name: &str) -> ProfileForm {
        let mut form = ProfileForm::default();
        form.set_field("name", name).unwrap();
        form
    }

    async fn plan_server(delay: Duration) -> MockServer {
        let server = MockServer::start().await;
        let plan = demo_plan(&form("Sam").submit().unwrap());
        Mock::given(method("POST"))
            .and(path("/api/generate-plan"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(&plan)
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_generate_plan_posts_profile() {
        let server = MockServer::start().await;
        let profile = form("Sam").submit().unwrap();
        Mock::given(method("POST"))
            .and(path("/api/generate-plan"))
            .and(body_partial_json(serde_json::json!({"name": "Sam", "height": 170.0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(demo_plan(&profile)))
            .expect(1)
            .mount(&server)
            .await;

        let plan = PlanClient::new(server.uri())
            .generate_plan(&profile)
            .await
            .unwrap();
        assert_eq!(plan.workout_plan.len(), 7);
    }

    #[tokio::test]
    async fn test_status_error_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate-image"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Gemini API key not configured"
            })))
            .mount(&server)
            .await;

        let err = PlanClient::new(server.uri())
            .describe_image("squat")
            .await
            .unwrap_err();
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Gemini API key not configured");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_quote_falls_back_when_server_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/motivation"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let quote = PlanClient::new(server.uri()).motivational_quote().await;
        assert_eq!(quote, FALLBACK_QUOTE);
    }

    #[tokio::test]
    async fn test_quote_from_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/motivation"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"quote": "Earn it."})),
            )
            .mount(&server)
            .await;

        let quote = PlanClient::new(server.uri()).motivational_quote().await;
        assert_eq!(quote, "Earn it.");
    }

    #[tokio::test]
    async fn test_voice_echoes_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate-voice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "useBrowserSpeech": true, "text": "Day one"
            })))
            .mount(&server)
            .await;

        let voice = PlanClient::new(server.uri()).voice("Day one").await.unwrap();
        assert!(voice.use_browser_speech);
        assert_eq!(voice.text, "Day one");
    }

    #[tokio::test]
    async fn test_submit_persists_plan_and_profile() {
        let server = plan_server(Duration::ZERO).await;
        let flow = CreatePlanFlow::new(PlanClient::new(server.uri()));
        let mut session = PlanSession::new(MemoryStore::new());

        flow.submit(&form("Sam"), &mut session).await.unwrap();

        assert!(!flow.is_submitting());
        match session.load() {
            PlanView::Ready { profile, .. } => assert_eq!(profile.name, "Sam"),
            PlanView::RedirectToCreate => panic!("plan was not persisted"),
        }
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_form_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let flow = CreatePlanFlow::new(PlanClient::new(server.uri()));
        let mut session = PlanSession::new(MemoryStore::new());
        let err = flow.submit(&form("  "), &mut session).await.unwrap_err();

        assert!(matches!(err, ClientError::Invalid(_)));
        assert_eq!(err.user_messages().len(), 1);
        assert!(!session.load().is_ready());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_rejected() {
        let server = plan_server(Duration::from_millis(300)).await;
        let flow = CreatePlanFlow::new(PlanClient::new(server.uri()));
        let mut first = PlanSession::new(MemoryStore::new());
        let mut second = PlanSession::new(MemoryStore::new());
        let form = form("Sam");

        let (a, b) = tokio::join!(flow.submit(&form, &mut first), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flow.submit(&form, &mut second).await
        });

        assert!(a.is_ok());
        assert!(matches!(b, Err(ClientError::InFlight)));
        assert!(!second.load().is_ready());
        assert!(!flow.is_submitting());
    }

    #[tokio::test]
    async fn test_failed_submit_releases_flag_and_saves_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": "Failed to generate fitness plan"
            })))
            .mount(&server)
            .await;

        let flow = CreatePlanFlow::new(PlanClient::new(server.uri()));
        let mut session = PlanSession::new(MemoryStore::new());
        let err = flow.submit(&form("Sam"), &mut session).await.unwrap_err();

        assert_eq!(err.user_messages(), vec![GENERATE_FAILED_MESSAGE.to_string()]);
        assert!(!flow.is_submitting());
        assert!(!session.load().is_ready());
    }
}
