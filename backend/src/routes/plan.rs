//! Plan generation API routes

use crate::error::ApiError;
use crate::services::PlanService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use fitplan_shared::models::{FitnessPlan, UserProfile};

const PLAN_FAILED: &str = "Failed to generate fitness plan";

/// Create plan routes
pub fn plan_routes() -> Router<AppState> {
    Router::new().route("/generate-plan", post(generate_plan))
}

/// POST /api/generate-plan - Generate a seven-day plan for a profile
///
/// Always answers with a plan once the body parses; the demo plan stands in
/// when the provider is missing or unusable.
async fn generate_plan(
    State(state): State<AppState>,
    body: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<FitnessPlan>, ApiError> {
    let Json(profile) = body.map_err(|e| ApiError::from_rejection(e, PLAN_FAILED))?;
    let plan = PlanService::generate(state.llm(), &profile).await;
    Ok(Json(plan))
}
