//! LLM Gateway
//!
//! Uniform interface over multiple hosted text-generation backends. A
//! provider accepts a prompt plus generation options and returns the raw
//! generated text with token-usage counters. Providers never validate that
//! the content is well-formed JSON - that is the caller's concern.
//!
//! No retries happen at this layer; retry policy (or its absence) belongs to
//! the caller.
//!
//! ## Providers
//!
//! - `openai`: OpenAI Chat Completions API
//! - `groq`: Groq's OpenAI-compatible chat API (default)
//! - `gemini`: Google Gemini generateContent API
//! - `claude`: placeholder, always fails with an unavailable error

mod claude;
mod gemini;
mod groq;
mod openai;

pub use claude::ClaudeProvider;
pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::{ErrorCategory, ForgeError, LlmError, Result};

// =============================================================================
// Response Types
// =============================================================================

/// Token usage counters reported by a backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Raw generation result: best-effort text plus usage metadata
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub usage: TokenUsage,
}

impl LlmResponse {
    /// Response with content only (backend reported no usage counters)
    pub fn content_only(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: TokenUsage::default(),
        }
    }
}

// =============================================================================
// Generation Options
// =============================================================================

/// Per-call generation parameters
///
/// Temperature is normally in [0, 1] but values above 1 are passed through
/// unvalidated - backends that reject them will report their own error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model override (provider default when None)
    pub model: Option<String>,
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: None,
            temperature: crate::constants::llm::DEFAULT_TEMPERATURE,
            max_tokens: crate::constants::llm::DEFAULT_MAX_TOKENS,
        }
    }
}

impl GenerationOptions {
    /// Options tuned for one analysis call: role-specific temperature with the
    /// fixed analysis token budget
    pub fn for_analysis(temperature: f32) -> Self {
        Self {
            model: None,
            temperature,
            max_tokens: crate::constants::agents::ANALYSIS_MAX_TOKENS,
        }
    }
}

// =============================================================================
// Provider Configuration
// =============================================================================

/// Configuration for LLM providers
///
/// Note: API keys are never serialized to output and are redacted in debug
/// output. Each provider converts the key to SecretString internally.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider identifier: "openai", "groq", "gemini", "claude"
    pub provider: String,
    /// Model name (provider-specific default when None)
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API key (falls back to the provider's env var)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: None,
            timeout_secs: crate::constants::llm::DEFAULT_TIMEOUT_SECS,
            api_key: None,
            api_base: None,
        }
    }
}

// =============================================================================
// LLM Provider Trait
// =============================================================================

/// Shared LLM provider handle injected into agents at startup
pub type SharedProvider = Arc<dyn LlmProvider + Send + Sync>;

/// Uniform contract over hosted text-generation backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for a prompt
    ///
    /// Transport and backend failures surface as `ForgeError::Llm`; the
    /// returned content is whatever the backend produced, unparsed.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<LlmResponse>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model used when the caller supplies no override
    fn default_model(&self) -> &str;
}

/// Reject empty prompts before any network call
pub(crate) fn validate_prompt(prompt: &str, provider: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(LlmError::with_provider(
            ErrorCategory::BadRequest,
            "Prompt must be non-empty",
            provider,
        )
        .into());
    }
    Ok(())
}

/// Create a shared provider from configuration
///
/// An unknown provider identifier is a configuration error, distinct from any
/// backend call failure.
pub fn create_provider(config: &ProviderConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiProvider::new(config.clone())?)),
        "groq" => Ok(Arc::new(GroqProvider::new(config.clone())?)),
        "gemini" => Ok(Arc::new(GeminiProvider::new(config.clone())?)),
        "claude" => Ok(Arc::new(ClaudeProvider::new(config.clone()))),
        _ => Err(ForgeError::Config(format!(
            "Unknown provider: {}. Supported: openai, groq, gemini, claude",
            config.provider
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        let config = ProviderConfig {
            provider: "mistral".to_string(),
            ..Default::default()
        };
        let err = create_provider(&config).map(|_| ()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_validate_prompt_rejects_empty() {
        assert!(validate_prompt("", "test").is_err());
        assert!(validate_prompt("   \n", "test").is_err());
        assert!(validate_prompt("analyze this", "test").is_ok());
    }

    #[test]
    fn test_analysis_options() {
        let options = GenerationOptions::for_analysis(0.3);
        assert_eq!(options.temperature, 0.3);
        assert_eq!(
            options.max_tokens,
            crate::constants::agents::ANALYSIS_MAX_TOKENS
        );
    }

    #[test]
    fn test_provider_config_debug_redacts_key() {
        let config = ProviderConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
