//! Fit Command
//!
//! Scores one idea against one founder profile without any LLM calls.
//!
//! Usage:
//!   ideaforge fit idea.json profile.json [--format json]

use console::style;
use std::fs;
use std::path::Path;

use crate::fit::calculate_idea_fit;
use crate::types::{FounderProfile, IdeaSnapshot, Result};

pub fn run(idea_path: &Path, profile_path: &Path, as_json: bool) -> Result<()> {
    let idea: IdeaSnapshot = serde_json::from_str(&fs::read_to_string(idea_path)?)?;
    let profile: FounderProfile = serde_json::from_str(&fs::read_to_string(profile_path)?)?;

    let fit = calculate_idea_fit(&idea, &profile);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&fit)?);
        return Ok(());
    }

    println!("{}", style(&idea.title).bold().underlined());
    println!(
        "\nOverall fit: {}",
        style(format!("{}/100", fit.overall_fit)).bold()
    );

    println!("\n{}", style("Ikigai breakdown").bold());
    println!("  Love:        {:>2}/25", fit.ikigai.love);
    println!("  Good at:     {:>2}/25", fit.ikigai.good_at);
    println!("  World needs: {:>2}/25", fit.ikigai.world_needs);
    println!("  Paid for:    {:>2}/25", fit.ikigai.paid_for);

    println!("\n{}", style("Skill match").bold());
    println!("  Match: {}%", fit.skill_match.match_percentage);
    if !fit.skill_match.gap.is_empty() {
        let gap: Vec<String> = fit.skill_match.gap.iter().map(|t| t.to_string()).collect();
        println!("  Gap:   {}", gap.join(", "));
    }

    if !fit.network_leverage.useful.is_empty() || !fit.network_leverage.critical.is_empty() {
        println!("\n{}", style("Network leverage").bold());
        for entry in &fit.network_leverage.critical {
            println!("  {} {}", style("★").yellow(), entry);
        }
        for entry in &fit.network_leverage.useful {
            println!("  - {}", entry);
        }
    }

    println!("\n{}", style("Resources").bold());
    println!("  Timeline: {}", fit.resource_feasibility.timeline_estimate);
    if fit.resource_feasibility.budget_fit {
        println!("  Budget:   {} sufficient", style("✓").green());
    } else {
        println!(
            "  Budget:   {} capital-intensive, likely needs funding",
            style("✗").red()
        );
    }

    Ok(())
}
