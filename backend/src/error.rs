//! Application error handling
//!
//! This module converts handler errors into HTTP responses. Bodies are flat
//! `{"error": "..."}` objects; the image endpoint's upstream failure also
//! carries a fallback description.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitplan_shared::types::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// The request body could not be read; reported as a server failure
    #[error("Request could not be processed: {0}")]
    RequestFailed(String),

    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable { message: String, description: String },
}

impl ApiError {
    /// Map a JSON extractor rejection to the endpoint's generic failure
    pub fn from_rejection(rejection: JsonRejection, message: &str) -> Self {
        error!(error = %rejection.body_text(), "{}", message);
        ApiError::RequestFailed(message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotConfigured(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    description: None,
                    success: None,
                },
            ),
            ApiError::RequestFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg,
                    description: None,
                    success: None,
                },
            ),
            ApiError::UpstreamUnavailable {
                message,
                description,
            } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse {
                    error: message,
                    description: Some(description),
                    success: Some(false),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
