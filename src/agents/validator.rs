//! Business Validator Agent
//!
//! Specializes in: revenue models, unit economics, scalability, resource
//! requirements. Reads the researcher's market-size estimate and the
//! designer's MVP feature list when those reports exist.

use serde_json::{Map, Value, json};
use std::time::Instant;
use tracing::{debug, warn};

use super::parse;
use super::{AgentContext, AgentReport, AgentRole};
use crate::constants::agents::{PARSE_FALLBACK_CONFIDENCE, VALIDATOR_TEMPERATURE};
use crate::llm::{GenerationOptions, SharedProvider};
use crate::types::Result;

pub struct ValidatorAgent {
    provider: SharedProvider,
}

impl ValidatorAgent {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, context: &AgentContext) -> Result<AgentReport> {
        let start = Instant::now();

        let prompt = build_prompt(context);
        debug!("Running business validation analysis");

        let options = GenerationOptions::for_analysis(VALIDATOR_TEMPERATURE);
        let response = self.provider.generate(&prompt, &options).await?;

        let report = match parse::parse_response(&response.content) {
            Some(analysis) => report_from_analysis(&analysis, start.elapsed().as_millis() as u64),
            None => {
                warn!("Failed to parse validator response, using fallback report");
                fallback_report(start.elapsed().as_millis() as u64)
            }
        };

        Ok(report)
    }
}

fn build_prompt(context: &AgentContext) -> String {
    let idea = &context.idea;
    let mut prior_sections = Vec::new();

    if let Some(research) = context.prior_report(AgentRole::Researcher)
        && let Some(tam) = research.metadata.get("tam_estimate").and_then(Value::as_str)
    {
        prior_sections.push(format!("**MARKET SIZE:** {}", tam));
    }
    if let Some(design) = context.prior_report(AgentRole::Designer)
        && let Some(features) = design.metadata.get("mvp_features").and_then(Value::as_array)
    {
        let names: Vec<&str> = features.iter().filter_map(Value::as_str).collect();
        if !names.is_empty() {
            prior_sections.push(format!("**MVP FEATURES:** {}", names.join(", ")));
        }
    }

    format!(
        r#"You are an expert business analyst and financial strategist. Validate this startup's business model.

**IDEA:**
- Title: {title}
- Target Audience: {audience}
- Revenue Model: {revenue_model}
- Business Model: {business_model}

{prior}

**YOUR TASK:**
Assess business viability covering:

1. **Revenue Model Analysis**
   - Is the revenue model realistic for this market?
   - What's the expected revenue per customer (ARPU)?
   - Are there multiple revenue streams possible?

2. **Unit Economics**
   - Estimated CAC (Customer Acquisition Cost)
   - Estimated LTV (Lifetime Value)
   - LTV:CAC ratio assessment
   - Gross margin potential

3. **Scalability Assessment**
   - Can this scale to $1M ARR? $10M?
   - What are the scaling bottlenecks?
   - Is this a local/regional/global opportunity?

4. **Resource Requirements**
   - Initial capital needed (rough estimate)
   - Team size for MVP and scale
   - Time to revenue estimate

Respond in valid JSON only, no prose wrapper:
{{
  "summary": "2-3 sentence business viability assessment",
  "revenue_viability": "High/Medium/Low with brief justification",
  "breakeven_estimate": "Time to breakeven estimate",
  "key_insights": ["insight 1", "insight 2", "insight 3"],
  "recommendations": ["recommendation 1", "recommendation 2", "recommendation 3"],
  "concerns": ["concern 1", "concern 2"],
  "confidence_score": 70
}}"#,
        title = idea.title,
        audience = idea.target_audience,
        revenue_model = idea.revenue_model,
        business_model = idea.business_model,
        prior = prior_sections.join("\n"),
    )
}

fn report_from_analysis(analysis: &Value, execution_time_ms: u64) -> AgentReport {
    let mut metadata = Map::new();
    metadata.insert(
        "revenue_model_viability".to_string(),
        parse::metadata_value(analysis, "revenue_viability", json!("Unknown")),
    );
    metadata.insert(
        "breakeven_estimate".to_string(),
        parse::metadata_value(analysis, "breakeven_estimate", json!("Unable to determine")),
    );

    AgentReport {
        agent_role: AgentRole::Validator,
        summary: parse::str_field(analysis, "summary", "Business validation completed."),
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
    metadata.insert("revenue_model_viability".to_string(), json!("Unknown"));
    metadata.insert(
        "breakeven_estimate".to_string(),
        json!("Unable to determine"),
    );

    AgentReport {
        agent_role: AgentRole::Validator,
        summary: "Business validation completed with parsing issues.".to_string(),
        key_insights: vec!["Validation data unavailable".to_string()],
        recommendations: vec!["Re-run analysis".to_string()],
        concerns: vec!["Unable to parse validation data".to_string()],
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

    #[tokio::test]
    async fn test_report_carries_validator_metadata() {
        let provider = Arc::new(StubProvider::always(&valid_response(65)));
        let agent = ValidatorAgent::new(provider);

        let context = AgentContext::new(sample_idea(), None);
        let report = agent.execute(&context).await.unwrap();

        assert_eq!(report.agent_role, AgentRole::Validator);
        assert_eq!(report.metadata["revenue_model_viability"], "High");
        assert_eq!(report.metadata["breakeven_estimate"], "18 months");
    }

    #[tokio::test]
    async fn test_fallback_confidence_on_bad_output() {
        let provider = Arc::new(StubProvider::always("I think this idea is great!"));
        let agent = ValidatorAgent::new(provider);

        let context = AgentContext::new(sample_idea(), None);
        let report = agent.execute(&context).await.unwrap();

        assert_eq!(report.confidence_score, PARSE_FALLBACK_CONFIDENCE);
        assert!(!report.concerns.is_empty());
    }

    #[test]
    fn test_prompt_threads_prior_metadata() {
        let mut context = AgentContext::new(sample_idea(), None);

        let mut research_meta = Map::new();
        research_meta.insert("tam_estimate".to_string(), json!("$12B"));
        context.previous_reports.push(AgentReport {
            agent_role: AgentRole::Researcher,
            summary: String::new(),
            key_insights: vec![],
            recommendations: vec![],
            concerns: vec![],
            confidence_score: 80,
            execution_time_ms: 1,
            metadata: research_meta,
        });

        let mut design_meta = Map::new();
        design_meta.insert("mvp_features".to_string(), json!(["Anomaly alerts"]));
        context.previous_reports.push(AgentReport {
            agent_role: AgentRole::Designer,
            summary: String::new(),
            key_insights: vec![],
            recommendations: vec![],
            concerns: vec![],
            confidence_score: 75,
            execution_time_ms: 1,
            metadata: design_meta,
        });

        let prompt = build_prompt(&context);
        assert!(prompt.contains("**MARKET SIZE:** $12B"));
        assert!(prompt.contains("**MVP FEATURES:** Anomaly alerts"));
    }

    #[test]
    fn test_prompt_tolerates_missing_priors() {
        let context = AgentContext::new(sample_idea(), None);
        let prompt = build_prompt(&context);
        assert!(!prompt.contains("MARKET SIZE"));
        assert!(!prompt.contains("MVP FEATURES"));
    }
}
