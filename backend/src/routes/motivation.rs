//! Motivational quote API routes

use crate::services::MotivationService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitplan_shared::types::MotivationResponse;

/// Create motivation routes
pub fn motivation_routes() -> Router<AppState> {
    Router::new().route("/motivation", get(get_motivation))
}

/// GET /api/motivation - A fresh quote, or a canned one
async fn get_motivation(State(state): State<AppState>) -> Json<MotivationResponse> {
    let quote = MotivationService::quote(state.llm()).await;
    Json(MotivationResponse { quote })
}
