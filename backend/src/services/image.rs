//! Image description service
//!
//! The provider cannot draw, so "image generation" is a vivid text
//! description of the prompt.

use crate::error::ApiError;
use crate::llm::{CompletionRequest, LlmProvider};
use fitplan_shared::types::ImageDescriptionResponse;
use tracing::warn;

const IMAGE_TEMPERATURE: f32 = 0.8;
const IMAGE_MAX_TOKENS: u32 = 300;

pub const NOT_CONFIGURED_MESSAGE: &str = "Gemini API key not configured";
pub const UNAVAILABLE_MESSAGE: &str =
    "Image generation is currently unavailable. Gemini API provides descriptions, not actual images.";

fn build_prompt(subject: &str) -> String {
    format!(
        r#"Create a detailed, vivid description for: "{subject}".

Describe it as if you're painting a picture with words. Include:
- Visual appearance and form
- Colors and lighting
- Key details and characteristics
- Composition and perspective

Make it detailed enough that someone could visualize it clearly."#
    )
}

pub struct ImageService;

impl ImageService {
    /// Describe `subject` with the given model
    pub async fn describe(
        llm: Option<&dyn LlmProvider>,
        model: &str,
        subject: &str,
    ) -> Result<ImageDescriptionResponse, ApiError> {
        let llm = llm.ok_or_else(|| ApiError::NotConfigured(NOT_CONFIGURED_MESSAGE.to_string()))?;

        let request = CompletionRequest::new(build_prompt(subject), IMAGE_TEMPERATURE, IMAGE_MAX_TOKENS)
            .with_model(model);

        match llm.complete(&request).await {
            Ok(description) if !description.trim().is_empty() => Ok(ImageDescriptionResponse {
                description,
                success: true,
                message: format!("Generated visual description using {}", model),
            }),
            outcome => {
                if let Err(e) = outcome {
                    warn!(provider = llm.name(), error = %e, "Image description failed");
                } else {
                    warn!(provider = llm.name(), "Image description was empty");
                }
                Err(ApiError::UpstreamUnavailable {
                    message: UNAVAILABLE_MESSAGE.to_string(),
                    description: format!("Visual concept: {}", subject),
                })
            }
        }
    }
}
