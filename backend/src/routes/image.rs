//! Image description API routes

use crate::error::ApiError;
use crate::services::ImageService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use fitplan_shared::types::{GenerateImageRequest, ImageDescriptionResponse};

const IMAGE_FAILED: &str = "Failed to process image request";

/// Create image routes
pub fn image_routes() -> Router<AppState> {
    Router::new().route("/generate-image", post(generate_image))
}

/// POST /api/generate-image - Describe a subject in words
///
/// A key without the `AIza` prefix counts as missing, so it gets the 400
/// rather than an upstream call.
async fn generate_image(
    State(state): State<AppState>,
    body: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> Result<Json<ImageDescriptionResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::from_rejection(e, IMAGE_FAILED))?;
    let response =
        ImageService::describe(state.llm(), &state.config().ai.image_model, &req.prompt).await?;
    Ok(Json(response))
}
