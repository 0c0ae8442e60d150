//! Idea Domain Types
//!
//! The startup-idea vocabulary shared by the agent pipeline and the fit
//! scorer: problem domains, business model and technology tags, and the
//! immutable idea snapshot a pipeline run analyzes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Problem Catalog Vocabulary
// =============================================================================

/// Grand-challenge problem domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Climate,
    Health,
    AiSafety,
    SocialImpact,
    Fintech,
    Edtech,
    Cybersecurity,
    FoodAgriculture,
}

impl Domain {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Climate => "Climate & Environment",
            Self::Health => "Health & Longevity",
            Self::AiSafety => "AI Safety & Ethics",
            Self::SocialImpact => "Social Impact",
            Self::Fintech => "FinTech & Payments",
            Self::Edtech => "Education & Skills",
            Self::Cybersecurity => "Cybersecurity",
            Self::FoodAgriculture => "Food & Agriculture",
        }
    }
}

/// Where a curated problem statement came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemSource {
    Xprize,
    Sdg,
    Wef,
    YcRfs,
    Gates,
}

// =============================================================================
// Business Model & Technology Tags
// =============================================================================

/// Business model tag attached to a generated idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessModel {
    B2bSaas,
    B2cSubscription,
    Marketplace,
    ApiService,
    Consultancy,
    EdtechPlatform,
    HardwareSoftware,
    NonprofitImpact,
}

impl BusinessModel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::B2bSaas => "B2B SaaS",
            Self::B2cSubscription => "B2C Subscription",
            Self::Marketplace => "Marketplace",
            Self::ApiService => "API Service",
            Self::Consultancy => "Consultancy",
            Self::EdtechPlatform => "EdTech Platform",
            Self::HardwareSoftware => "Hardware + Software",
            Self::NonprofitImpact => "Nonprofit / Impact",
        }
    }
}

impl std::fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Core technology tag attached to a generated idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    AiMl,
    Blockchain,
    Iot,
    MobileApp,
    WebPlatform,
    ArVr,
    Biotech,
    Robotics,
}

impl Technology {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AiMl => "AI / Machine Learning",
            Self::Blockchain => "Blockchain",
            Self::Iot => "IoT / Sensors",
            Self::MobileApp => "Mobile App",
            Self::WebPlatform => "Web Platform",
            Self::ArVr => "AR / VR",
            Self::Biotech => "Biotech",
            Self::Robotics => "Robotics",
        }
    }
}

impl std::fmt::Display for Technology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Idea Snapshot
// =============================================================================

/// Immutable snapshot of a generated idea, as fetched by the caller before a
/// pipeline run. Agents read it; nothing in the pipeline mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaSnapshot {
    pub id: String,
    pub title: String,
    pub tagline: String,
    /// Title of the underlying grand-challenge problem
    pub problem_title: String,
    pub problem_description: String,
    pub solution_description: String,
    pub target_audience: String,
    pub revenue_model: String,
    pub business_model: BusinessModel,
    pub technology: Technology,
    #[serde(default)]
    pub key_features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_wire_tags() {
        let json = serde_json::to_string(&BusinessModel::B2bSaas).unwrap();
        assert_eq!(json, "\"b2b_saas\"");

        let tech: Technology = serde_json::from_str("\"ai_ml\"").unwrap();
        assert_eq!(tech, Technology::AiMl);
    }

    #[test]
    fn test_idea_snapshot_round_trip() {
        let idea = IdeaSnapshot {
            id: "idea-1".to_string(),
            title: "Grid Sentinel".to_string(),
            tagline: "Early-warning analytics for power grids".to_string(),
            problem_title: "Grid resilience".to_string(),
            problem_description: "Aging grids fail under extreme weather".to_string(),
            solution_description: "ML anomaly detection on sensor feeds".to_string(),
            target_audience: "Utility operators".to_string(),
            revenue_model: "Annual platform license".to_string(),
            business_model: BusinessModel::B2bSaas,
            technology: Technology::AiMl,
            key_features: vec!["Anomaly alerts".to_string(), "Outage forecasts".to_string()],
        };

        let json = serde_json::to_string(&idea).unwrap();
        let back: IdeaSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.technology, Technology::AiMl);
        assert_eq!(back.key_features, idea.key_features);
    }
}
