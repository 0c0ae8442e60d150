//! Claude Provider (placeholder)
//!
//! Not yet implemented: every call fails with an unavailable error. The
//! identifier is registered so that selecting "claude" is a valid
//! configuration that fails at call time, not an unknown-provider error.

use async_trait::async_trait;

use super::{GenerationOptions, LlmProvider, LlmResponse, ProviderConfig};
use crate::types::{ErrorCategory, LlmError, Result};

const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

#[derive(Debug)]
pub struct ClaudeProvider {
    model: String,
}

impl ClaudeProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            model: config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl LlmProvider for ClaudeProvider {
    async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<LlmResponse> {
        super::validate_prompt(prompt, self.name())?;

        Err(LlmError::with_provider(
            ErrorCategory::Unavailable,
            "Claude provider not yet implemented",
            "claude",
        )
        .into())
    }

    fn name(&self) -> &str {
        "claude"
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ForgeError;

    #[tokio::test]
    async fn test_always_fails_with_unavailable() {
        let provider = ClaudeProvider::new(ProviderConfig::default());
        let err = provider
            .generate("any prompt", &GenerationOptions::default())
            .await
            .unwrap_err();

        match err {
            ForgeError::Llm(llm) => assert_eq!(llm.category, ErrorCategory::Unavailable),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
