//! Analyze Command
//!
//! Runs the full agent pipeline on one idea and prints every report plus the
//! synthesized verdict.
//!
//! Usage:
//!   ideaforge analyze idea.json [--profile profile.json] [--provider groq]

use console::style;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

use crate::agents::{
    AgentContext, AgentCoordinator, AgentProgress, AgentReport, AgentStatus, AnalysisAgent,
    ProgressCallback,
};
use crate::config::{Config, ConfigLoader};
use crate::llm::create_provider;
use crate::types::{FounderProfile, IdeaSnapshot, Result};

pub struct AnalyzeOptions {
    pub idea: PathBuf,
    pub profile: Option<PathBuf>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub json: bool,
}

pub async fn run(options: AnalyzeOptions) -> Result<()> {
    let config = effective_config(&options)?;

    let idea: IdeaSnapshot = read_json(&options.idea)?;
    let profile: Option<FounderProfile> = match &options.profile {
        Some(path) => Some(read_json(path)?),
        None => None,
    };

    let provider = create_provider(&config.llm)?;
    let mut coordinator = AgentCoordinator::new(AnalysisAgent::full_set(provider));
    if let Some(limit) = config.pipeline.agent_timeout() {
        coordinator = coordinator.with_timeout(limit);
    }

    if !options.json {
        println!(
            "Analyzing {} with {} ...",
            style(&idea.title).bold(),
            config.llm.provider
        );
    }

    let quiet = options.json;
    let progress = move |p: AgentProgress| {
        if quiet {
            return;
        }
        match p.status {
            AgentStatus::Running => println!("  {} {} ...", style("→").cyan(), p.agent_role),
            AgentStatus::Complete => println!("  {} {}", style("✓").green(), p.agent_role),
            AgentStatus::Error => {
                println!("  {} {}: {}", style("✗").red(), p.agent_role, p.message)
            }
            AgentStatus::Pending => {}
        }
    };
    let callback: &ProgressCallback = &progress;

    let context = AgentContext::new(idea, profile);
    let reports = coordinator.execute_all(&context, Some(callback)).await;
    let synthesis = coordinator.synthesize(&reports);
    let state = coordinator.state();

    if options.json {
        let output = json!({
            "reports": reports,
            "synthesis": synthesis,
            "last_error": state.last_error,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for report in &reports {
        print_report(report);
    }

    if let Some(error) = &state.last_error {
        println!("\n{} {}", style("⚠").yellow(), error);
    }

    println!("\n{}", style("Synthesis").bold().underlined());
    println!("{}", synthesis);

    Ok(())
}

/// Merge CLI overrides over the loaded configuration
fn effective_config(options: &AnalyzeOptions) -> Result<Config> {
    let mut config = ConfigLoader::load()?;

    if let Some(provider) = &options.provider {
        config.llm.provider = provider.clone();
    }
    if let Some(model) = &options.model {
        config.llm.model = Some(model.clone());
    }
    if let Some(secs) = options.timeout_secs {
        config.pipeline.agent_timeout_secs = secs;
    }

    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_report(report: &AgentReport) {
    println!(
        "\n{} (confidence {}%, {}ms)",
        style(report.agent_role.to_string()).bold(),
        report.confidence_score,
        report.execution_time_ms
    );
    println!("  {}", report.summary);

    if !report.key_insights.is_empty() {
        println!("  {}", style("Insights:").bold());
        for insight in &report.key_insights {
            println!("    - {}", insight);
        }
    }
    if !report.recommendations.is_empty() {
        println!("  {}", style("Recommendations:").bold());
        for recommendation in &report.recommendations {
            println!("    - {}", recommendation);
        }
    }
    if !report.concerns.is_empty() {
        println!("  {}", style("Concerns:").bold());
        for concern in &report.concerns {
            println!("    - {}", concern);
        }
    }
}
