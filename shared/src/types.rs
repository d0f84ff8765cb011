//! API request and response types

use crate::models::{FitnessPlan, UserProfile};
use serde::{Deserialize, Serialize};

/// Error body returned by the API: `{"error": "..."}`
///
/// The image endpoint adds a fallback description and `success: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

// ============================================================================
// Image description
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
}

/// Textual description returned instead of an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptionResponse {
    pub description: String,
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Voice
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateVoiceRequest {
    pub text: String,
}

/// Tells the client to read `text` with its own speech engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResponse {
    pub use_browser_speech: bool,
    pub text: String,
}

impl VoiceResponse {
    pub fn browser(text: String) -> Self {
        Self {
            use_browser_speech: true,
            text,
        }
    }
}

// ============================================================================
// Motivation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationResponse {
    pub quote: String,
}

// ============================================================================
// Export
// ============================================================================

/// Body of the print export endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub plan: FitnessPlan,
    pub profile: UserProfile,
}
