//! Voice API routes
//!
//! No audio is produced server-side; the client reads the text with its own
//! speech engine.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use fitplan_shared::types::{GenerateVoiceRequest, VoiceResponse};

const VOICE_FAILED: &str = "Failed to process voice request";

/// Create voice routes
pub fn voice_routes() -> Router<AppState> {
    Router::new().route("/generate-voice", post(generate_voice))
}

/// POST /api/generate-voice - Echo the text back for browser speech
async fn generate_voice(
    body: Result<Json<GenerateVoiceRequest>, JsonRejection>,
) -> Result<Json<VoiceResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::from_rejection(e, VOICE_FAILED))?;
    Ok(Json(VoiceResponse::browser(req.text)))
}
