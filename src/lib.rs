//! IdeaForge - Multi-Agent Startup Idea Analysis
//!
//! Runs a generated startup idea through four specialized analysis agents
//! (market research, product design, business validation, go-to-market) in a
//! fixed sequence, each reading the reports of the agents before it, then
//! synthesizes a single proceed/caution/pivot verdict. A separate, fully
//! deterministic scorer rates how well an idea fits one founder's profile.
//!
//! ## Core Features
//!
//! - **Agent Pipeline**: sequential context-threading with per-role failure
//!   tolerance - one failed agent never aborts the run
//! - **Provider Gateway**: uniform interface over Groq, OpenAI and Gemini
//! - **Ikigai Fit Scoring**: pure 0-100 idea/founder fit with skill gap,
//!   network leverage and resource feasibility breakdowns
//! - **Layered Configuration**: defaults, global and project TOML, env vars
//!
//! ## Quick Start
//!
//! ```ignore
//! use ideaforge::{AgentContext, AgentCoordinator, AnalysisAgent, create_provider};
//!
//! let provider = create_provider(&config.llm)?;
//! let mut coordinator = AgentCoordinator::new(AnalysisAgent::full_set(provider));
//! let reports = coordinator.execute_all(&AgentContext::new(idea, profile), None).await;
//! let verdict = coordinator.synthesize(&reports);
//! ```
//!
//! ## Modules
//!
//! - [`agents`]: the four analysis agents and their coordinator
//! - [`llm`]: LLM provider abstraction and backends
//! - [`fit`]: deterministic ikigai fit scorer
//! - [`config`]: layered configuration

pub mod agents;
pub mod cli;
pub mod config;
pub mod constants;
pub mod fit;
pub mod llm;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, PipelineConfig};

// Error Types
pub use types::error::{ErrorCategory, ForgeError, LlmError, Result};

// Domain Types
pub use types::{BusinessModel, Domain, FounderProfile, IdeaSnapshot, Technology};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use agents::{
    AgentContext, AgentCoordinator, AgentReport, AgentRole, AnalysisAgent, CoordinatorState,
    PipelineStatus, generate_synthesis,
};

// =============================================================================
// LLM & Fit Re-exports
// =============================================================================

pub use llm::{GenerationOptions, LlmProvider, LlmResponse, SharedProvider, create_provider};

pub use fit::{IdeaFit, IkigaiScore, calculate_idea_fit, calculate_ikigai_score};
