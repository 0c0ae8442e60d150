//! Market Research Agent
//!
//! Specializes in: market size (TAM/SAM/SOM), competitive landscape, trends,
//! customer segments. First role in the pipeline; reads no prior reports.

use serde_json::{Map, Value, json};
use std::time::Instant;
use tracing::{debug, warn};

use super::parse;
use super::{AgentContext, AgentReport, AgentRole};
use crate::constants::agents::{PARSE_FALLBACK_CONFIDENCE, RESEARCHER_TEMPERATURE};
use crate::llm::{GenerationOptions, SharedProvider};
use crate::types::{IdeaSnapshot, Result};

pub struct ResearcherAgent {
    provider: SharedProvider,
}

impl ResearcherAgent {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, context: &AgentContext) -> Result<AgentReport> {
        let start = Instant::now();

        let prompt = build_prompt(&context.idea);
        debug!("Running market research analysis");

        let options = GenerationOptions::for_analysis(RESEARCHER_TEMPERATURE);
        let response = self.provider.generate(&prompt, &options).await?;

        let report = match parse::parse_response(&response.content) {
            Some(analysis) => report_from_analysis(&analysis, start.elapsed().as_millis() as u64),
            None => {
                warn!("Failed to parse researcher response, using fallback report");
                fallback_report(start.elapsed().as_millis() as u64)
            }
        };

        Ok(report)
    }
}

fn build_prompt(idea: &IdeaSnapshot) -> String {
    format!(
        r#"You are an expert market research analyst. Analyze this startup idea from a market perspective.

**IDEA:**
- Title: {title}
- Problem: {problem}
- Solution: {solution}
- Target Audience: {audience}
- Business Model: {business_model}

**YOUR TASK:**
Provide a comprehensive market analysis covering:

1. **Market Size Estimation**
   - TAM (Total Addressable Market): rough $ estimate
   - SAM (Serviceable Addressable Market): realistic subset
   - SOM (Serviceable Obtainable Market): first 2-3 years

2. **Competitive Landscape**
   - List 3-5 direct competitors (or closest alternatives)
   - Identify indirect competitors and substitutes
   - Analyze competitive advantages this idea could have

3. **Market Trends**
   - Current trends supporting this idea
   - Emerging opportunities in this space
   - Potential threats or headwinds

4. **Customer Segmentation**
   - Primary customer segment analysis
   - Secondary segments to consider
   - Early adopter characteristics

Respond in valid JSON format only, no prose wrapper:
{{
  "summary": "2-3 sentence overall market assessment",
  "tam_estimate": "TAM estimate string (e.g., '$50B global market')",
  "sam_estimate": "SAM estimate string",
  "competitor_count": "number of major competitors",
  "key_insights": ["insight 1", "insight 2", "insight 3"],
  "recommendations": ["recommendation 1", "recommendation 2", "recommendation 3"],
  "concerns": ["concern 1", "concern 2"],
  "confidence_score": 75
}}"#,
        title = idea.title,
        problem = idea.problem_description,
        solution = idea.solution_description,
        audience = idea.target_audience,
        business_model = idea.business_model,
    )
}

fn report_from_analysis(analysis: &Value, execution_time_ms: u64) -> AgentReport {
    let mut metadata = Map::new();
    metadata.insert(
        "tam_estimate".to_string(),
        parse::metadata_value(analysis, "tam_estimate", json!("Unable to determine")),
    );
    metadata.insert(
        "sam_estimate".to_string(),
        parse::metadata_value(analysis, "sam_estimate", json!("Unable to determine")),
    );
    metadata.insert(
        "competitor_count".to_string(),
        parse::metadata_value(analysis, "competitor_count", json!("Unknown")),
    );

    AgentReport {
        agent_role: AgentRole::Researcher,
        summary: parse::str_field(analysis, "summary", "Market analysis completed."),
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
    metadata.insert("tam_estimate".to_string(), json!("Unable to determine"));
    metadata.insert("sam_estimate".to_string(), json!("Unable to determine"));
    metadata.insert("competitor_count".to_string(), json!("Unknown"));

    AgentReport {
        agent_role: AgentRole::Researcher,
        summary: "Market analysis completed with parsing issues.".to_string(),
        key_insights: vec!["Market research data unavailable".to_string()],
        recommendations: vec!["Re-run analysis with better structured prompt".to_string()],
        concerns: vec!["Unable to parse market data".to_string()],
        confidence_score: PARSE_FALLBACK_CONFIDENCE,
        execution_time_ms,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::test_support::{StubProvider, sample_idea, valid_response};
    use std::sync::Arc;

    fn context() -> AgentContext {
        AgentContext::new(sample_idea(), None)
    }

    #[tokio::test]
    async fn test_valid_json_yields_report() {
        let provider = Arc::new(StubProvider::always(&valid_response(82)));
        let agent = ResearcherAgent::new(provider);

        let report = agent.execute(&context()).await.unwrap();
        assert_eq!(report.agent_role, AgentRole::Researcher);
        assert_eq!(report.confidence_score, 82);
        assert_eq!(report.metadata["tam_estimate"], "$12B");
    }

    #[tokio::test]
    async fn test_fenced_json_parses_like_unfenced() {
        let fenced = format!("```json\n{}\n```", valid_response(82));
        let provider = Arc::new(StubProvider::always(&fenced));
        let agent = ResearcherAgent::new(provider);

        let report = agent.execute(&context()).await.unwrap();
        assert_eq!(report.confidence_score, 82);
        assert_eq!(report.metadata["sam_estimate"], "$2B");
    }

    #[tokio::test]
    async fn test_unparseable_output_degrades_to_fallback() {
        let provider = Arc::new(StubProvider::always("not json"));
        let agent = ResearcherAgent::new(provider);

        let report = agent.execute(&context()).await.unwrap();
        assert_eq!(report.confidence_score, PARSE_FALLBACK_CONFIDENCE);
        assert!(!report.concerns.is_empty());
        // Metadata keys still present with placeholders
        assert!(report.metadata.contains_key("tam_estimate"));
        assert!(report.metadata.contains_key("competitor_count"));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let provider = Arc::new(StubProvider::new(vec![None]));
        let agent = ResearcherAgent::new(provider);

        assert!(agent.execute(&context()).await.is_err());
    }

    #[test]
    fn test_prompt_embeds_idea_fields() {
        let idea = sample_idea();
        let prompt = build_prompt(&idea);
        assert!(prompt.contains(&idea.title));
        assert!(prompt.contains(&idea.problem_description));
        assert!(prompt.contains("B2B SaaS"));
    }
}
