//! LLM provider abstraction
//!
//! Services talk to a [`LlmProvider`]; the concrete Gemini client lives in
//! [`gemini`]. Tests substitute their own provider to drive the fallback
//! paths without a network.

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from an LLM call; every variant is an upstream failure
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// A single-prompt completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Model identifier; the provider default when `None`
    pub model: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Ask the provider for a JSON document instead of free text
    pub json_output: bool,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature,
            max_output_tokens,
            json_output: false,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Text completion provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider identifier used in logs
    fn name(&self) -> &'static str;

    /// Complete a prompt and return the generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
