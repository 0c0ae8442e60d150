//! Configuration Types
//!
//! All configuration structures with sensible defaults. The LLM section reuses
//! `ProviderConfig` so a loaded config can be handed straight to
//! `create_provider`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::llm::ProviderConfig;
use crate::types::{ForgeError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// LLM provider settings
    pub llm: ProviderConfig,

    /// Agent pipeline settings
    pub pipeline: PipelineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: ProviderConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ForgeError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.llm.provider.trim().is_empty() {
            return Err(ForgeError::Config(
                "LLM provider must not be empty".to_string(),
            ));
        }

        if self.llm.timeout_secs == 0 {
            return Err(ForgeError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Pipeline Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Per-agent wall-clock limit in seconds. 0 disables the limit and each
    /// agent runs until its provider call returns.
    pub agent_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            agent_timeout_secs: 0,
        }
    }
}

impl PipelineConfig {
    /// Timeout as a `Duration`, `None` when disabled
    pub fn agent_timeout(&self) -> Option<Duration> {
        match self.agent_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.pipeline.agent_timeout_secs, 0);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_llm_timeout() {
        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_validate_rejects_empty_provider() {
        let mut config = Config::default();
        config.llm.provider = "  ".to_string();
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_agent_timeout_zero_disables() {
        let pipeline = PipelineConfig::default();
        assert_eq!(pipeline.agent_timeout(), None);

        let pipeline = PipelineConfig {
            agent_timeout_secs: 90,
        };
        assert_eq!(pipeline.agent_timeout(), Some(Duration::from_secs(90)));
    }
}
