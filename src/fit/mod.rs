//! Ikigai Fit Scorer
//!
//! Pure, deterministic scoring of how well a generated idea matches one
//! founder's self-reported profile. No LLM calls; safe to invoke
//! concurrently from any number of pipeline runs.
//!
//! The composite score (0-100) is the sum of four 0-25 dimensions:
//!
//! 1. `love` - passion alignment
//! 2. `good_at` - skill and expertise match
//! 3. `world_needs` - market-need relevance
//! 4. `paid_for` - monetization preference fit
//!
//! Missing profile sections score a neutral midpoint (12), never zero and
//! never full marks, so incomplete profiles are not unfairly penalized.

use serde::{Deserialize, Serialize};

use crate::types::{BusinessModel, FounderProfile, IdeaSnapshot, Technology, TimeCommitment};

/// Neutral sub-score when a profile section has no data
const NEUTRAL_SCORE: u8 = 12;

/// Points for a direct technology-skill match
const TECH_MATCH_POINTS: u8 = 15;

/// Partial credit for having some skills without a direct match
const TECH_PARTIAL_POINTS: u8 = 7;

/// Flat bonus for listing any domain expertise. Deliberately not checked
/// against idea content; relevance is the researcher agent's job.
const EXPERTISE_POINTS: u8 = 10;

// =============================================================================
// Result Types
// =============================================================================

/// Four-dimension ikigai breakdown, each in [0, 25], total in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IkigaiScore {
    pub love: u8,
    pub good_at: u8,
    pub world_needs: u8,
    pub paid_for: u8,
    pub total: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub required: Vec<Technology>,
    pub owned: Vec<Technology>,
    pub gap: Vec<Technology>,
    pub match_percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkLeverage {
    pub useful: Vec<String>,
    pub critical: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceFeasibility {
    pub timeline_estimate: String,
    pub budget_fit: bool,
}

/// Full fit analysis: ikigai plus skill gap, network leverage and resource
/// feasibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaFit {
    pub overall_fit: u8,
    pub skill_match: SkillMatch,
    pub network_leverage: NetworkLeverage,
    pub resource_feasibility: ResourceFeasibility,
    pub ikigai: IkigaiScore,
}

// =============================================================================
// Scoring
// =============================================================================

/// Calculate the ikigai-based fit score (0-100)
pub fn calculate_ikigai_score(idea: &IdeaSnapshot, profile: &FounderProfile) -> IkigaiScore {
    let love = match_passions(idea, &profile.passions);
    let good_at = match_skills(idea.technology, profile);
    let world_needs = match_market_needs(idea, profile);
    let paid_for = match_monetization(idea.business_model, &profile.monetization_prefs);

    IkigaiScore {
        love,
        good_at,
        world_needs,
        paid_for,
        total: love + good_at + world_needs + paid_for,
    }
}

/// Calculate the comprehensive fit analysis
pub fn calculate_idea_fit(idea: &IdeaSnapshot, profile: &FounderProfile) -> IdeaFit {
    let ikigai = calculate_ikigai_score(idea, profile);

    // Skill gap: the single required skill is the idea's technology tag
    let required = vec![idea.technology];
    let has_tech = profile.skills.contains(&idea.technology);
    let skill_match = SkillMatch {
        required,
        owned: if has_tech { vec![idea.technology] } else { vec![] },
        gap: if has_tech { vec![] } else { vec![idea.technology] },
        match_percentage: if has_tech { 100 } else { 0 },
    };

    IdeaFit {
        overall_fit: ikigai.total,
        skill_match,
        network_leverage: identify_network_leverage(idea, profile),
        resource_feasibility: assess_resource_feasibility(idea, profile),
        ikigai,
    }
}

// Passion alignment: fraction of passion keywords appearing anywhere in the
// idea's title + problem + solution text
fn match_passions(idea: &IdeaSnapshot, passions: &[String]) -> u8 {
    if passions.is_empty() {
        return NEUTRAL_SCORE;
    }

    let idea_text = format!(
        "{} {} {}",
        idea.title, idea.problem_description, idea.solution_description
    )
    .to_lowercase();

    let matches = passions
        .iter()
        .filter(|passion| idea_text.contains(&passion.to_lowercase()))
        .count();

    scaled_score(matches, passions.len())
}

// Skill alignment: direct technology match or partial credit, plus a flat
// bonus for any domain expertise
fn match_skills(idea_tech: Technology, profile: &FounderProfile) -> u8 {
    if profile.skills.is_empty() && profile.expertise.is_empty() {
        return NEUTRAL_SCORE;
    }

    let mut score = 0u8;

    if profile.skills.contains(&idea_tech) {
        score += TECH_MATCH_POINTS;
    } else if !profile.skills.is_empty() {
        score += TECH_PARTIAL_POINTS;
    }

    if !profile.expertise.is_empty() {
        score += EXPERTISE_POINTS;
    }

    score.min(25)
}

// Market-need alignment: fraction of pain points and market needs matching
// the idea's problem title + description
fn match_market_needs(idea: &IdeaSnapshot, profile: &FounderProfile) -> u8 {
    let total_items = profile.pain_points.len() + profile.market_needs.len();
    if total_items == 0 {
        return NEUTRAL_SCORE;
    }

    let idea_text =
        format!("{} {}", idea.problem_title, idea.problem_description).to_lowercase();

    let matches = profile
        .pain_points
        .iter()
        .chain(profile.market_needs.iter())
        .filter(|phrase| idea_text.contains(&phrase.to_lowercase()))
        .count();

    scaled_score(matches, total_items)
}

// Monetization fit: exact preference match, adjacent model, or baseline floor
fn match_monetization(idea_model: BusinessModel, prefs: &[BusinessModel]) -> u8 {
    if prefs.is_empty() {
        return NEUTRAL_SCORE;
    }

    if prefs.contains(&idea_model) {
        return 25;
    }

    if prefs
        .iter()
        .any(|pref| similar_models(*pref).contains(&idea_model))
    {
        return 15;
    }

    // Never zero: any stated preference still earns a floor
    5
}

/// round(25 * matched / total), capped at 25
fn scaled_score(matched: usize, total: usize) -> u8 {
    let scaled = (matched as f64 / total as f64 * 25.0).round() as u8;
    scaled.min(25)
}

/// Business models adjacent enough for partial monetization credit
fn similar_models(model: BusinessModel) -> &'static [BusinessModel] {
    match model {
        BusinessModel::B2bSaas => &[BusinessModel::ApiService],
        BusinessModel::B2cSubscription => &[BusinessModel::EdtechPlatform],
        BusinessModel::ApiService => &[BusinessModel::B2bSaas],
        BusinessModel::EdtechPlatform => &[BusinessModel::B2cSubscription],
        BusinessModel::Marketplace
        | BusinessModel::Consultancy
        | BusinessModel::HardwareSoftware
        | BusinessModel::NonprofitImpact => &[],
    }
}

// =============================================================================
// Network Leverage
// =============================================================================

fn identify_network_leverage(idea: &IdeaSnapshot, profile: &FounderProfile) -> NetworkLeverage {
    let network = &profile.network;
    let mut useful = Vec::new();
    let mut critical = Vec::new();

    // B2B ideas benefit from enterprise contacts
    if idea.business_model == BusinessModel::B2bSaas && network.enterprise_contacts {
        useful.push("Enterprise contacts for customer discovery".to_string());
    }

    // Technical co-founders matter for deep-tech builds
    if matches!(
        idea.technology,
        Technology::AiMl | Technology::Blockchain | Technology::Biotech
    ) && network.technical_cofounders
    {
        useful.push("Technical co-founders available".to_string());
    }

    // Domain experts are critical when their field matches the idea
    if !network.domain_experts.is_empty() {
        let idea_text = format!("{} {}", idea.title, idea.problem_description).to_lowercase();
        let relevant: Vec<&str> = network
            .domain_experts
            .iter()
            .filter(|expert| idea_text.contains(&expert.to_lowercase()))
            .map(String::as_str)
            .collect();

        if !relevant.is_empty() {
            critical.push(format!(
                "{} network provides unique advantage",
                relevant.join(", ")
            ));
        }
    }

    // Investors matter for capital-intensive hardware plays
    if idea.business_model == BusinessModel::HardwareSoftware && network.investors {
        useful.push("Investor network for fundraising".to_string());
    }

    NetworkLeverage { useful, critical }
}

// =============================================================================
// Resource Feasibility
// =============================================================================

/// Build complexity per technology tag (3-10 scale), at 4 weeks per point
fn tech_complexity(tech: Technology) -> u32 {
    match tech {
        Technology::Biotech => 10,
        Technology::AiMl | Technology::Blockchain | Technology::Robotics => 9,
        Technology::ArVr => 8,
        Technology::Iot => 7,
        Technology::MobileApp => 4,
        Technology::WebPlatform => 3,
    }
}

fn assess_resource_feasibility(idea: &IdeaSnapshot, profile: &FounderProfile) -> ResourceFeasibility {
    let resources = &profile.resources;

    let base_weeks = tech_complexity(idea.technology) * 4;
    let estimated_weeks = (base_weeks as f64 * resources.time.multiplier()).round() as u32;

    let timeline_estimate = match resources.time {
        TimeCommitment::FullTime => format!("{} weeks (full-time)", estimated_weeks),
        other => format!("{} weeks ({})", estimated_weeks, other.tag()),
    };

    // Capital-intensive plays need funding: hardware, marketplaces
    let capital_intensive = matches!(
        idea.business_model,
        BusinessModel::HardwareSoftware | BusinessModel::Marketplace
    );
    let budget_fit =
        resources.budget == crate::types::BudgetTier::WellFunded || !capital_intensive;

    ResourceFeasibility {
        timeline_estimate,
        budget_fit,
    }
}

// =============================================================================
// Tests
// =============================================================================
