//! Motivational quote service

use crate::llm::{CompletionRequest, LlmProvider};
use rand::seq::SliceRandom;
use tracing::warn;

const QUOTE_TEMPERATURE: f32 = 0.9;
const QUOTE_MAX_TOKENS: u32 = 50;

const QUOTE_PROMPT: &str = "Generate a short, powerful motivational fitness quote (max 20 words). Return only the quote, no quotation marks.";

/// Quotes served when the provider is missing or fails
pub const CANNED_QUOTES: [&str; 8] = [
    "Your only limit is you. Push harder today!",
    "Success starts with self-discipline and dedication.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Don't wish for it, work for it!",
    "Your body can stand almost anything. It's your mind you have to convince.",
    "The only bad workout is the one that didn't happen.",
    "Strive for progress, not perfection.",
    "Believe in yourself and all that you are capable of achieving.",
];

/// Uniformly random canned quote
pub fn random_quote() -> &'static str {
    CANNED_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CANNED_QUOTES[0])
}

pub struct MotivationService;

impl MotivationService {
    /// Fetch a fresh quote, or a canned one
    pub async fn quote(llm: Option<&dyn LlmProvider>) -> String {
        let Some(llm) = llm else {
            return random_quote().to_string();
        };

        let request = CompletionRequest::new(QUOTE_PROMPT, QUOTE_TEMPERATURE, QUOTE_MAX_TOKENS);
        match llm.complete(&request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                warn!("Empty quote from provider, using canned quote");
                random_quote().to_string()
            }
            Err(e) => {
                warn!(provider = llm.name(), error = %e, "Quote generation failed, using canned quote");
                random_quote().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;
    use async_trait::async_trait;

    struct FixedLlm(Option<&'static str>);

    #[async_trait]
    impl LlmProvider for FixedLlm {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            assert_eq!(request.max_output_tokens, QUOTE_MAX_TOKENS);
            self.0.map(str::to_string).ok_or(LlmError::Status {
                status: 429,
                message: "quota".to_string(),
            })
        }
    }

    #[test]
    fn test_random_quote_is_canned() {
        for _ in 0..50 {
            assert!(CANNED_QUOTES.contains(&random_quote()));
        }
    }

    #[tokio::test]
    async fn test_quote_without_provider_is_canned() {
        let quote = MotivationService::quote(None).await;
        assert!(CANNED_QUOTES.contains(&quote.as_str()));
    }

    #[tokio::test]
    async fn test_quote_is_trimmed() {
        let llm = FixedLlm(Some("  Lift heavy, rest well.\n"));
        assert_eq!(MotivationService::quote(Some(&llm)).await, "Lift heavy, rest well.");
    }

    #[tokio::test]
    async fn test_empty_or_failed_quote_is_canned() {
        let empty = FixedLlm(Some("   "));
        let quote = MotivationService::quote(Some(&empty)).await;
        assert!(CANNED_QUOTES.contains(&quote.as_str()));

        let failing = FixedLlm(None);
        let quote = MotivationService::quote(Some(&failing)).await;
        assert!(CANNED_QUOTES.contains(&quote.as_str()));
    }
}
