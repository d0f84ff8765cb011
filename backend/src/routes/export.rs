//! Print export API routes

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use fitplan_shared::export::render_print_document;
use fitplan_shared::types::ExportRequest;

const EXPORT_FAILED: &str = "Failed to export fitness plan";

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new().route("/print", post(export_print))
}

/// POST /api/export/print - Printable HTML document for a plan
async fn export_print(
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::from_rejection(e, EXPORT_FAILED))?;
    let html = render_print_document(&req.plan, &req.profile);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    Ok((headers, html))
}
