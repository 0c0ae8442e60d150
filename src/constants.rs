//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// LLM gateway constants
pub mod llm {
    /// Default sampling temperature outside the analysis pipeline
    pub const DEFAULT_TEMPERATURE: f32 = 0.9;

    /// Default generation cap outside the analysis pipeline
    pub const DEFAULT_MAX_TOKENS: u32 = 4096;

    /// Default per-request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
}

/// Agent pipeline constants
pub mod agents {
    /// Generation cap for every analysis call
    pub const ANALYSIS_MAX_TOKENS: u32 = 2048;

    /// Confidence assigned to a report whose LLM output could not be parsed
    pub const PARSE_FALLBACK_CONFIDENCE: u8 = 30;

    /// Temperatures per role: analytical roles biased toward determinism,
    /// creative roles toward variety
    pub const RESEARCHER_TEMPERATURE: f32 = 0.3;
    pub const DESIGNER_TEMPERATURE: f32 = 0.4;
    pub const VALIDATOR_TEMPERATURE: f32 = 0.3;
    pub const GTM_TEMPERATURE: f32 = 0.5;
}

/// Synthesis verdict thresholds (mean confidence across reports)
pub mod synthesis {
    /// Mean confidence at or above this selects the proceed verdict
    pub const PROCEED_THRESHOLD: f64 = 70.0;

    /// Mean confidence at or above this (but below proceed) selects caution
    pub const CAUTION_THRESHOLD: f64 = 50.0;

    /// Maximum insights carried into the synthesis
    pub const MAX_INSIGHTS: usize = 5;

    /// Maximum recommendations carried into the synthesis
    pub const MAX_RECOMMENDATIONS: usize = 5;
}
