//! Go-to-Market Strategist Agent
//!
//! Specializes in: customer acquisition, pricing strategy, launch tactics,
//! early traction. Last role in the pipeline; reads all three prior reports
//! plus the founder's network data when a profile is present.

use serde_json::{Map, Value, json};
use std::time::Instant;
use tracing::{debug, warn};

use super::parse;
use super::{AgentContext, AgentReport, AgentRole};
use crate::constants::agents::{GTM_TEMPERATURE, PARSE_FALLBACK_CONFIDENCE};
use crate::llm::{GenerationOptions, SharedProvider};
use crate::types::Result;

pub struct GtmAgent {
    provider: SharedProvider,
}

impl GtmAgent {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, context: &AgentContext) -> Result<AgentReport> {
        let start = Instant::now();

        let prompt = build_prompt(context);
        debug!("Running go-to-market analysis");

        let options = GenerationOptions::for_analysis(GTM_TEMPERATURE);
        let response = self.provider.generate(&prompt, &options).await?;

        let report = match parse::parse_response(&response.content) {
            Some(analysis) => report_from_analysis(&analysis, start.elapsed().as_millis() as u64),
            None => {
                warn!("Failed to parse GTM response, using fallback report");
                fallback_report(start.elapsed().as_millis() as u64)
            }
        };

        Ok(report)
    }
}

fn build_prompt(context: &AgentContext) -> String {
    let idea = &context.idea;
    let mut prior_sections = Vec::new();

    if let Some(research) = context.prior_report(AgentRole::Researcher) {
        prior_sections.push(format!("**TARGET MARKET:** {}", research.summary));
    }
    if let Some(design) = context.prior_report(AgentRole::Designer)
        && let Some(features) = design.metadata.get("mvp_features").and_then(Value::as_array)
    {
        let names: Vec<&str> = features.iter().filter_map(Value::as_str).collect();
        if !names.is_empty() {
            prior_sections.push(format!("**MVP SCOPE:** {}", names.join(", ")));
        }
    }
    if let Some(validation) = context.prior_report(AgentRole::Validator)
        && let Some(viability) = validation
            .metadata
            .get("revenue_model_viability")
            .and_then(Value::as_str)
    {
        prior_sections.push(format!("**BUSINESS MODEL:** {}", viability));
    }
    if let Some(profile) = &context.profile {
        // Network reach shapes which acquisition channels are realistic
        let network =
            serde_json::to_string(&profile.network).unwrap_or_else(|_| "{}".to_string());
        prior_sections.push(format!("**FOUNDER NETWORK:** {}", network));
    }

    format!(
        r#"You are an expert go-to-market strategist. Create a launch strategy for this startup.

**IDEA:**
- Title: {title}
- Target Audience: {audience}
- Business Model: {business_model}

{prior}

**YOUR TASK:**
Design a go-to-market strategy covering:

1. **Customer Acquisition Channels**
   - Top 3 channels to focus on (ranked)
   - Why these channels for this audience?
   - Estimated CAC per channel

2. **Pricing Strategy**
   - Recommended pricing model (freemium, tiered, usage-based, etc.)
   - Price point suggestion with justification
   - Competitive pricing analysis

3. **Launch Plan**
   - Pre-launch activities (weeks -4 to 0)
   - Launch week tactics
   - Post-launch growth strategy (weeks 1-12)
   - Suggested timeline to first 100 customers

4. **Early Traction Tactics**
   - How to get first 10 customers (specific tactics)
   - Beta testing strategy
   - Community building approach
   - Partnership opportunities

Respond in valid JSON only, no prose wrapper:
{{
  "summary": "2-3 sentence GTM strategy overview",
  "primary_channel": "Top recommended acquisition channel",
  "pricing_model": "Recommended pricing approach",
  "launch_timeline": "Estimated weeks to launch",
  "key_insights": ["insight 1", "insight 2", "insight 3"],
  "recommendations": ["recommendation 1", "recommendation 2", "recommendation 3"],
  "concerns": ["concern 1", "concern 2"],
  "confidence_score": 75
}}"#,
        title = idea.title,
        audience = idea.target_audience,
        business_model = idea.business_model,
        prior = prior_sections.join("\n"),
    )
}

fn report_from_analysis(analysis: &Value, execution_time_ms: u64) -> AgentReport {
    let mut metadata = Map::new();
    metadata.insert(
        "primary_channel".to_string(),
        parse::metadata_value(analysis, "primary_channel", json!("Unknown")),
    );
    metadata.insert(
        "pricing_model".to_string(),
        parse::metadata_value(analysis, "pricing_model", json!("Unable to determine")),
    );
    metadata.insert(
        "launch_timeline".to_string(),
        parse::metadata_value(analysis, "launch_timeline", json!("Unable to estimate")),
    );

    AgentReport {
        agent_role: AgentRole::Gtm,
        summary: parse::str_field(analysis, "summary", "GTM strategy created."),
        key_insights: parse::string_list(analysis, "key_insights"),
        recommendations: parse::string_list(analysis, "recommendations"),
        concerns: parse::string_list(analysis, "concerns"),
        confidence_score: parse::confidence_score(analysis),
        execution_time_ms,
        metadata,
    }
}

fn fallback_report(execution_time_ms: u64) -> AgentReport {
    let mut metadata = Map::new();
    metadata.insert("primary_channel".to_string(), json!("Unknown"));
    metadata.insert("pricing_model".to_string(), json!("Unable to determine"));
    metadata.insert("launch_timeline".to_string(), json!("Unable to estimate"));

    AgentReport {
        agent_role: AgentRole::Gtm,
        summary: "GTM strategy created with parsing issues.".to_string(),
        key_insights: vec!["GTM data unavailable".to_string()],
        recommendations: vec!["Re-run analysis".to_string()],
        concerns: vec!["Unable to parse GTM data".to_string()],
        confidence_score: PARSE_FALLBACK_CONFIDENCE,
        execution_time_ms,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::test_support::{StubProvider, sample_idea, sample_profile, valid_response};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_report_carries_gtm_metadata() {
        let provider = Arc::new(StubProvider::always(&valid_response(75)));
        let agent = GtmAgent::new(provider);

        let context = AgentContext::new(sample_idea(), Some(sample_profile()));
        let report = agent.execute(&context).await.unwrap();

        assert_eq!(report.agent_role, AgentRole::Gtm);
        assert_eq!(report.metadata["primary_channel"], "Industry conferences");
        assert_eq!(report.metadata["launch_timeline"], "12 weeks");
    }

    #[tokio::test]
    async fn test_fallback_keeps_metadata_keys() {
        let provider = Arc::new(StubProvider::always("no json here"));
        let agent = GtmAgent::new(provider);

        let context = AgentContext::new(sample_idea(), None);
        let report = agent.execute(&context).await.unwrap();

        assert_eq!(report.confidence_score, PARSE_FALLBACK_CONFIDENCE);
        assert!(report.metadata.contains_key("primary_channel"));
        assert!(report.metadata.contains_key("pricing_model"));
        assert!(report.metadata.contains_key("launch_timeline"));
    }

    #[test]
    fn test_prompt_includes_founder_network_when_profiled() {
        let context = AgentContext::new(sample_idea(), Some(sample_profile()));
        let prompt = build_prompt(&context);
        assert!(prompt.contains("FOUNDER NETWORK"));
        assert!(prompt.contains("enterprise_contacts"));
    }

    #[test]
    fn test_prompt_without_profile_or_priors() {
        let context = AgentContext::new(sample_idea(), None);
        let prompt = build_prompt(&context);
        assert!(!prompt.contains("FOUNDER NETWORK"));
        assert!(!prompt.contains("TARGET MARKET"));
        assert!(!prompt.contains("MVP SCOPE"));
    }
}
