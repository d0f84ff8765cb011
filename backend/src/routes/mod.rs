//! Route definitions for the FitPlan API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod export;
mod health;
mod image;
mod motivation;
mod plan;
mod voice;


pub use export::export_routes;
pub use image::image_routes;
pub use motivation::motivation_routes;
pub use plan::plan_routes;
pub use voice::voice_routes;

/// Create the main application router with all middleware
///
/// The inbound timeout covers only routes that never call the provider, so a
/// slow provider still ends in a plan, a quote or the image fallback.
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().server.request_timeout_secs);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .layer(TimeoutLayer::new(timeout))
        .nest("/api", api_routes(timeout))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes(timeout: Duration) -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "FitPlan API" }))
        .nest("/export", export::export_routes())
        .layer(TimeoutLayer::new(timeout))
        .merge(plan::plan_routes())
        .merge(image::image_routes())
        .merge(voice::voice_routes())
        .merge(motivation::motivation_routes())
}
