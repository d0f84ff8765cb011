//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Build the provider once**: the HTTP client and key are set up at startup
//! 2. **Cheap cloning**: All fields use Arc
//! 3. **Immutable after creation**: State is read-only during request handling

use crate::config::AppConfig;
use crate::llm::{GeminiProvider, LlmProvider};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// LLM provider; `None` runs the service in demo mode
    pub llm: Option<Arc<dyn LlmProvider>>,
}

impl AppState {
    /// Create the state, building a Gemini provider when a key is configured
    pub fn new(config: AppConfig) -> Self {
        let llm = config.ai.credential().map(|key| {
            Arc::new(GeminiProvider::new(key, &config.ai.base_url, &config.ai.model))
                as Arc<dyn LlmProvider>
        });

        Self {
            config: Arc::new(config),
            llm,
        }
    }

    /// Create the state with an explicit provider (or none)
    pub fn with_provider(config: AppConfig, llm: Option<Arc<dyn LlmProvider>>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the provider, if configured
    #[inline]
    pub fn llm(&self) -> Option<&dyn LlmProvider> {
        self.llm.as_deref()
    }

    /// Whether the service is answering with demo content only
    pub fn is_demo_mode(&self) -> bool {
        self.llm.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;

    #[test]
    fn test_state_without_key_is_demo_mode() {
        let state = AppState::new(AppConfig::default());
        assert!(state.is_demo_mode());
        assert!(state.llm().is_none());
    }

    #[test]
    fn test_state_with_key_builds_provider() {
        let config = AppConfig {
            ai: AiConfig {
                api_key: Some("AIzaSyExample123".to_string()),
                ..AiConfig::default()
            },
            ..AppConfig::default()
        };
        let state = AppState::new(config);
        assert!(!state.is_demo_mode());
        assert_eq!(state.llm().map(|l| l.name()), Some("gemini"));
    }

    #[test]
    fn test_state_clone_shares_config() {
        let state = AppState::new(AppConfig::default());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }
}
