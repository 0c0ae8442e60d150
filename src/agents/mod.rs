//! Multi-Agent Analysis Pipeline
//!
//! Four role-specialized agents analyze one idea in a fixed sequence, each
//! seeing the reports produced before it:
//!
//! researcher (market) -> designer (product) -> validator (business) -> gtm (launch)
//!
//! The role set is closed: dispatch goes through the [`AnalysisAgent`] enum
//! rather than trait objects, and the execution order is a hardcoded
//! contract, not configuration.
//!
//! ## Modules
//!
//! - `coordinator`: sequential execution, failure tolerance, synthesis
//! - `parse`: fence-stripping JSON extraction shared by all roles

mod coordinator;
mod designer;
mod gtm;
mod parse;
mod researcher;
mod validator;

pub use coordinator::{
    AgentCoordinator, CoordinatorState, PipelineStatus, ProgressCallback, generate_synthesis,
};
pub use designer::DesignerAgent;
pub use gtm::GtmAgent;
pub use researcher::ResearcherAgent;
pub use validator::ValidatorAgent;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::llm::SharedProvider;
use crate::types::{FounderProfile, IdeaSnapshot, Result};

// =============================================================================
// Roles
// =============================================================================

/// The four analysis roles, in no particular order (see [`EXECUTION_ORDER`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Researcher,
    Designer,
    Validator,
    Gtm,
}

impl AgentRole {
    /// Human-readable agent name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Researcher => "Market Researcher",
            Self::Designer => "Product Designer",
            Self::Validator => "Business Validator",
            Self::Gtm => "GTM Strategist",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Researcher => write!(f, "researcher"),
            Self::Designer => write!(f, "designer"),
            Self::Validator => write!(f, "validator"),
            Self::Gtm => write!(f, "gtm"),
        }
    }
}

/// Fixed pipeline order. Later roles depend on earlier roles' output, so the
/// coordinator must never reorder or parallelize this sequence.
pub const EXECUTION_ORDER: [AgentRole; 4] = [
    AgentRole::Researcher,
    AgentRole::Designer,
    AgentRole::Validator,
    AgentRole::Gtm,
];

/// Per-role status surfaced through progress notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Pending,
    Running,
    Complete,
    Error,
}

// =============================================================================
// Report & Context
// =============================================================================

/// Structured report from one agent execution. Immutable once created; list
/// orderings are significant and preserved through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReport {
    pub agent_role: AgentRole,
    pub summary: String,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub concerns: Vec<String>,
    /// Always in [0, 100]; fixed at the fallback value on parse failure
    pub confidence_score: u8,
    /// Wall-clock duration of the LLM call plus parsing
    pub execution_time_ms: u64,
    /// Agent-specific keys; always present, possibly with placeholder values
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Input snapshot for one pipeline run
///
/// Constructed once by the caller; the coordinator re-issues it to each agent
/// with `previous_reports` replaced by the reports accumulated so far. The
/// idea and profile fields are never mutated by the pipeline.
#[derive(Debug, Clone)]
pub struct AgentContext {
    pub idea: IdeaSnapshot,
    pub profile: Option<FounderProfile>,
    pub previous_reports: Vec<AgentReport>,
}

impl AgentContext {
    pub fn new(idea: IdeaSnapshot, profile: Option<FounderProfile>) -> Self {
        Self {
            idea,
            profile,
            previous_reports: Vec::new(),
        }
    }

    /// Look up a prior report by role. Absence is a normal, expected case -
    /// a failed earlier agent simply contributes nothing here.
    pub fn prior_report(&self, role: AgentRole) -> Option<&AgentReport> {
        self.previous_reports.iter().find(|r| r.agent_role == role)
    }
}

/// Progress notification emitted by the coordinator as roles run
#[derive(Debug, Clone)]
pub struct AgentProgress {
    pub agent_role: AgentRole,
    pub status: AgentStatus,
    pub message: String,
}

// =============================================================================
// Closed Agent Dispatch
// =============================================================================

/// Tagged dispatch over the closed role set
pub enum AnalysisAgent {
    Researcher(ResearcherAgent),
    Designer(DesignerAgent),
    Validator(ValidatorAgent),
    Gtm(GtmAgent),
}

impl AnalysisAgent {
    pub fn role(&self) -> AgentRole {
        match self {
            Self::Researcher(_) => AgentRole::Researcher,
            Self::Designer(_) => AgentRole::Designer,
            Self::Validator(_) => AgentRole::Validator,
            Self::Gtm(_) => AgentRole::Gtm,
        }
    }

    /// Run this agent: exactly one gateway call, then parse-or-fallback.
    /// Only transport failures surface as errors.
    pub async fn execute(&self, context: &AgentContext) -> Result<AgentReport> {
        match self {
            Self::Researcher(agent) => agent.execute(context).await,
            Self::Designer(agent) => agent.execute(context).await,
            Self::Validator(agent) => agent.execute(context).await,
            Self::Gtm(agent) => agent.execute(context).await,
        }
    }

    /// All four agents over one shared provider, in execution order
    pub fn full_set(provider: SharedProvider) -> Vec<AnalysisAgent> {
        vec![
            Self::Researcher(ResearcherAgent::new(provider.clone())),
            Self::Designer(DesignerAgent::new(provider.clone())),
            Self::Validator(ValidatorAgent::new(provider.clone())),
            Self::Gtm(GtmAgent::new(provider)),
        ]
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Stub provider and fixture data shared by agent and coordinator tests.

    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::llm::{GenerationOptions, LlmProvider, LlmResponse, TokenUsage};
    use crate::types::{
        BusinessModel, ErrorCategory, FounderProfile, IdeaSnapshot, LlmError, Result, Technology,
    };

    /// Stub provider returning canned responses in sequence. A `None` entry
    /// simulates a transport failure for that call.
    pub struct StubProvider {
        responses: Mutex<Vec<Option<String>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl StubProvider {
        pub fn new(responses: Vec<Option<String>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                prompts: Mutex::new(Vec::new()),
            }
        }

        /// Provider that answers every call with the same content
        pub fn always(content: &str) -> Self {
            Self::new(vec![Some(content.to_string()); 8])
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn generate(
            &self,
            prompt: &str,
            _options: &GenerationOptions,
        ) -> Result<LlmResponse> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let next = self.responses.lock().unwrap().remove(0);
            match next {
                Some(content) => Ok(LlmResponse {
                    content,
                    usage: TokenUsage::new(100, 50),
                }),
                None => Err(LlmError::with_provider(
                    ErrorCategory::Network,
                    "stub transport failure",
                    "stub",
                )
                .into()),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn default_model(&self) -> &str {
            "stub-model"
        }
    }

    pub fn sample_idea() -> IdeaSnapshot {
        IdeaSnapshot {
            id: "idea-1".to_string(),
            title: "Grid Sentinel".to_string(),
            tagline: "Early-warning analytics for power grids".to_string(),
            problem_title: "Grid resilience".to_string(),
            problem_description: "Aging grids fail under extreme weather".to_string(),
            solution_description: "ML anomaly detection on substation sensor feeds".to_string(),
            target_audience: "Utility operators".to_string(),
            revenue_model: "Annual platform license".to_string(),
            business_model: BusinessModel::B2bSaas,
            technology: Technology::AiMl,
            key_features: vec!["Anomaly alerts".to_string(), "Outage forecasts".to_string()],
        }
    }

    pub fn sample_profile() -> FounderProfile {
        FounderProfile {
            skills: vec![Technology::AiMl, Technology::WebPlatform],
            network: crate::types::FounderNetwork {
                enterprise_contacts: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// A well-formed agent response with the common report fields
    pub fn valid_response(confidence: u8) -> String {
        format!(
            r#"{{
  "summary": "Solid opportunity in a growing market.",
  "key_insights": ["Utilities budget for resilience", "Few direct competitors"],
  "recommendations": ["Pilot with one regional utility", "Price per substation"],
  "concerns": ["Long enterprise sales cycles"],
  "confidence_score": {confidence},
  "tam_estimate": "$12B",
  "sam_estimate": "$2B",
  "competitor_count": 4,
  "mvp_features": ["Anomaly alerts"],
  "tech_stack": "Rust ingestion, Python models",
  "revenue_viability": "High",
  "breakeven_estimate": "18 months",
  "primary_channel": "Industry conferences",
  "pricing_model": "Tiered per-substation",
  "launch_timeline": "12 weeks"
}}"#
        )
    }
}
