//! Multi-Agent Coordinator
//!
//! Runs the four agents in the fixed order researcher -> designer ->
//! validator -> gtm, threading accumulated reports forward and synthesizing
//! a final verdict.
//!
//! ## Failure Tolerance
//!
//! A transport failure in one role never aborts the run: the failure is
//! recorded, the role contributes nothing to later contexts, and the pipeline
//! continues. The caller always receives a report list (0 to 4 entries),
//! never an error. Later agents see exactly the successfully completed
//! earlier reports - never a partial or error placeholder.
//!
//! One coordinator instance serves one run at a time (`&mut self`); callers
//! needing concurrent runs use separate instances.

use std::time::Duration;
use tracing::{info, warn};

use super::{
    AgentContext, AgentProgress, AgentReport, AgentRole, AgentStatus, AnalysisAgent,
    EXECUTION_ORDER,
};
use crate::constants::synthesis::{
    CAUTION_THRESHOLD, MAX_INSIGHTS, MAX_RECOMMENDATIONS, PROCEED_THRESHOLD,
};
use crate::types::ForgeError;

/// Pipeline lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStatus {
    Idle,
    Running,
    Complete,
    Error,
}

/// Transient, process-local run state. Reset at the start of each run and
/// readable via a snapshot accessor; never persisted.
#[derive(Debug, Clone)]
pub struct CoordinatorState {
    pub current_agent: Option<AgentRole>,
    pub completed_agents: Vec<AgentRole>,
    pub reports: Vec<AgentReport>,
    pub status: PipelineStatus,
    pub last_error: Option<String>,
}

impl Default for CoordinatorState {
    fn default() -> Self {
        Self {
            current_agent: None,
            completed_agents: Vec::new(),
            reports: Vec::new(),
            status: PipelineStatus::Idle,
            last_error: None,
        }
    }
}

/// Progress callback invoked on each role transition
pub type ProgressCallback = dyn Fn(AgentProgress) + Send + Sync;

pub struct AgentCoordinator {
    agents: Vec<AnalysisAgent>,
    state: CoordinatorState,
    /// Bound on each agent's LLM call; a timeout counts as that role's failure
    agent_timeout: Option<Duration>,
}

impl AgentCoordinator {
    pub fn new(agents: Vec<AnalysisAgent>) -> Self {
        Self {
            agents,
            state: CoordinatorState::default(),
            agent_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent_timeout = Some(timeout);
        self
    }

    /// Execute all registered agents sequentially in [`EXECUTION_ORDER`].
    ///
    /// Each agent receives the input context with `previous_reports` replaced
    /// by the reports accumulated so far. Roles without a registered agent are
    /// skipped; failed roles are recorded and the run continues.
    pub async fn execute_all(
        &mut self,
        context: &AgentContext,
        on_progress: Option<&ProgressCallback>,
    ) -> Vec<AgentReport> {
        self.state = CoordinatorState {
            status: PipelineStatus::Running,
            ..Default::default()
        };

        for role in EXECUTION_ORDER {
            let Some(agent) = self.agents.iter().find(|a| a.role() == role) else {
                warn!("Agent {} not registered, skipping", role);
                continue;
            };

            self.state.current_agent = Some(role);
            notify(on_progress, role, AgentStatus::Running, "analysis started");

            let enriched = AgentContext {
                idea: context.idea.clone(),
                profile: context.profile.clone(),
                previous_reports: self.state.reports.clone(),
            };

            match self.run_agent(agent, &enriched).await {
                Ok(report) => {
                    info!(
                        "Agent {} complete (confidence {}, {}ms)",
                        role, report.confidence_score, report.execution_time_ms
                    );
                    self.state.reports.push(report);
                    self.state.completed_agents.push(role);
                    notify(on_progress, role, AgentStatus::Complete, "analysis complete");
                }
                Err(reason) => {
                    warn!("Agent {} failed: {}", role, reason);
                    self.state.last_error =
                        Some(format!("Agent {} execution failed: {}", role, reason));
                    notify(on_progress, role, AgentStatus::Error, &reason);
                    // Continue with remaining roles; a failed agent simply
                    // contributes nothing to later contexts
                }
            }
        }

        self.state.status = PipelineStatus::Complete;
        self.state.current_agent = None;
        self.state.reports.clone()
    }

    /// Run one agent, applying the per-agent timeout when configured.
    /// Returns the failure reason as a string - the per-role outcome the
    /// pipeline collects instead of propagating.
    async fn run_agent(
        &self,
        agent: &AnalysisAgent,
        context: &AgentContext,
    ) -> std::result::Result<AgentReport, String> {
        let outcome = match self.agent_timeout {
            Some(limit) => match tokio::time::timeout(limit, agent.execute(context)).await {
                Ok(result) => result,
                Err(_) => Err(ForgeError::timeout(
                    format!("{} agent", agent.role()),
                    limit,
                )),
            },
            None => agent.execute(context).await,
        };

        outcome.map_err(|e| e.to_string())
    }

    /// Defensive copy of the run state; mutating it cannot corrupt the run
    pub fn state(&self) -> CoordinatorState {
        self.state.clone()
    }

    /// See [`generate_synthesis`]
    pub fn synthesize(&self, reports: &[AgentReport]) -> String {
        generate_synthesis(reports)
    }
}

fn notify(
    on_progress: Option<&ProgressCallback>,
    role: AgentRole,
    status: AgentStatus,
    message: &str,
) {
    if let Some(callback) = on_progress {
        callback(AgentProgress {
            agent_role: role,
            status,
            message: message.to_string(),
        });
    }
}

// =============================================================================
// Synthesis
// =============================================================================

/// Generate a sectioned text synthesis from the final report list.
///
/// Pure function: mean confidence, the first insights and recommendations
/// across reports in report order, every concern, and a verdict chosen by
/// fixed thresholds on the mean. Sections with no source data are omitted
/// entirely.
pub fn generate_synthesis(reports: &[AgentReport]) -> String {
    if reports.is_empty() {
        return "No agent reports available for synthesis.".to_string();
    }

    let mut sections = Vec::new();

    let avg_confidence = reports
        .iter()
        .map(|r| r.confidence_score as f64)
        .sum::<f64>()
        / reports.len() as f64;
    sections.push(format!("**Overall Confidence:** {:.0}%", avg_confidence));

    let insights: Vec<&String> = reports
        .iter()
        .flat_map(|r| &r.key_insights)
        .take(MAX_INSIGHTS)
        .collect();
    if !insights.is_empty() {
        sections.push(format!("**Key Insights:**\n{}", bullet_list(&insights)));
    }

    let concerns: Vec<&String> = reports.iter().flat_map(|r| &r.concerns).collect();
    if !concerns.is_empty() {
        sections.push(format!("**Critical Concerns:**\n{}", bullet_list(&concerns)));
    }

    let recommendations: Vec<&String> = reports
        .iter()
        .flat_map(|r| &r.recommendations)
        .take(MAX_RECOMMENDATIONS)
        .collect();
    if !recommendations.is_empty() {
        sections.push(format!(
            "**Top Recommendations:**\n{}",
            bullet_list(&recommendations)
        ));
    }

    let verdict = if avg_confidence >= PROCEED_THRESHOLD {
        "**Verdict:** Strong potential - proceed with validation and MVP development."
    } else if avg_confidence >= CAUTION_THRESHOLD {
        "**Verdict:** Moderate potential - address concerns before investing heavily."
    } else {
        "**Verdict:** Significant challenges identified - consider pivoting or major refinements."
    };
    sections.push(verdict.to_string());

    sections.join("\n\n")
}

fn bullet_list(items: &[&String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tests
// =============================================================================
