//! Founder Profile Types
//!
//! Self-reported founder inventory used for context-aware analysis: skills,
//! domain expertise, network reach, resources, and the ikigai inputs
//! (passions, market needs, monetization preferences).
//!
//! Every list may be empty - an incomplete profile is a normal, expected case
//! and the fit scorer treats missing sections as neutral rather than zero.

use serde::{Deserialize, Serialize};

use super::idea::{BusinessModel, Domain, Technology};

/// Who the founder knows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderNetwork {
    pub investors: bool,
    pub technical_cofounders: bool,
    /// Expert types by keyword, e.g. "healthcare", "logistics"
    pub domain_experts: Vec<String>,
    pub enterprise_contacts: bool,
}

/// Available runway and working time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Bootstrap,
    SeedFunded,
    WellFunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCommitment {
    NightsWeekends,
    PartTime,
    FullTime,
}

impl TimeCommitment {
    /// Timeline stretch factor relative to full-time work
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::FullTime => 1.0,
            Self::PartTime => 1.5,
            Self::NightsWeekends => 2.0,
        }
    }

    /// Wire-format tag, used verbatim in timeline estimates
    pub fn tag(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::NightsWeekends => "nights_weekends",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderResources {
    pub budget: BudgetTier,
    pub time: TimeCommitment,
    pub unique_access: Vec<String>,
}

impl Default for FounderResources {
    fn default() -> Self {
        Self {
            budget: BudgetTier::Bootstrap,
            time: TimeCommitment::NightsWeekends,
            unique_access: Vec::new(),
        }
    }
}

/// Full founder profile, fetched by the caller alongside the idea
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderProfile {
    // Who am I?
    pub skills: Vec<Technology>,
    pub experience: Vec<String>,
    pub expertise: Vec<Domain>,

    // What do I know?
    pub industries: Vec<String>,
    pub pain_points: Vec<String>,

    // Who do I know?
    pub network: FounderNetwork,

    // What do I have?
    pub resources: FounderResources,

    // Ikigai inputs
    pub passions: Vec<String>,
    pub strengths: Vec<String>,
    pub market_needs: Vec<String>,
    pub monetization_prefs: Vec<BusinessModel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_deserializes() {
        let profile: FounderProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.skills.is_empty());
        assert!(!profile.network.investors);
        assert_eq!(profile.resources.budget, BudgetTier::Bootstrap);
    }

    #[test]
    fn test_time_multiplier() {
        assert_eq!(TimeCommitment::FullTime.multiplier(), 1.0);
        assert_eq!(TimeCommitment::PartTime.multiplier(), 1.5);
        assert_eq!(TimeCommitment::NightsWeekends.multiplier(), 2.0);
    }

    #[test]
    fn test_budget_tier_ordering() {
        assert!(BudgetTier::Bootstrap < BudgetTier::WellFunded);
        assert!(BudgetTier::SeedFunded < BudgetTier::WellFunded);
    }
}
