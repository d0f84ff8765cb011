//! Configuration management for the FitPlan backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FITPLAN__)
//! 4. `GEMINI_API_KEY`, the provider's conventional variable

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Conventional environment variable for the Gemini key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Value shipped in `.env.example`; treated the same as no key
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_key_here";

/// Prefix every Google AI Studio key starts with
const API_KEY_PREFIX: &str = "AIza";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Timeout applied to inbound requests that do not call the provider
    pub request_timeout_secs: u64,
}

/// AI/LLM configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    /// Model used for plans and quotes
    pub model: String,
    /// Model used for image descriptions
    pub image_model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-pro".to_string(),
        }
    }
}

impl AiConfig {
    /// The API key, if one is really configured
    ///
    /// A missing or blank key, the placeholder value, or a key without the
    /// provider's prefix all count as "not configured".
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| is_valid_credential(key))
    }

    pub fn is_configured(&self) -> bool {
        self.credential().is_some()
    }
}

fn is_valid_credential(key: &str) -> bool {
    !key.is_empty() && key != PLACEHOLDER_API_KEY && key.starts_with(API_KEY_PREFIX)
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 120,
            },
            ai: AiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FITPLAN__ prefix
    /// 4. GEMINI_API_KEY
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FITPLAN__ prefix)
            // e.g., FITPLAN__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("FITPLAN").separator("__"))
            .set_override_option("ai.api_key", env::var(GEMINI_API_KEY_ENV).ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.ai.api_key.is_none());
        assert!(!config.ai.is_configured());
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("   "), false)]
    #[case(Some(PLACEHOLDER_API_KEY), false)]
    #[case(Some("sk-not-a-gemini-key"), false)]
    #[case(Some("AIzaSyExample123"), true)]
    #[case(Some(" AIzaSyExample123 "), true)]
    fn test_credential_detection(#[case] key: Option<&str>, #[case] configured: bool) {
        let ai = AiConfig {
            api_key: key.map(str::to_string),
            ..AiConfig::default()
        };
        assert_eq!(ai.is_configured(), configured);
    }

    #[test]
    fn test_debug_redacts_key() {
        let ai = AiConfig {
            api_key: Some("AIzaSecret".to_string()),
            ..AiConfig::default()
        };
        let printed = format!("{:?}", ai);
        assert!(!printed.contains("AIzaSecret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
