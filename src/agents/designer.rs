//! Product Design Agent
//!
//! Specializes in: feature prioritization, UX, technical architecture, MVP
//! scope. Reads the researcher's report when one is available; its absence
//! simply drops the market-insight section from the prompt.

use serde_json::{Map, Value, json};
use std::time::Instant;
use tracing::{debug, warn};

use super::parse;
use super::{AgentContext, AgentReport, AgentRole};
use crate::constants::agents::{DESIGNER_TEMPERATURE, PARSE_FALLBACK_CONFIDENCE};
use crate::llm::{GenerationOptions, SharedProvider};
use crate::types::Result;

pub struct DesignerAgent {
    provider: SharedProvider,
}

impl DesignerAgent {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, context: &AgentContext) -> Result<AgentReport> {
        let start = Instant::now();

        let prompt = build_prompt(context);
        debug!("Running product design analysis");

        let options = GenerationOptions::for_analysis(DESIGNER_TEMPERATURE);
        let response = self.provider.generate(&prompt, &options).await?;

        let report = match parse::parse_response(&response.content) {
            Some(analysis) => report_from_analysis(&analysis, start.elapsed().as_millis() as u64),
            None => {
                warn!("Failed to parse designer response, using fallback report");
                fallback_report(start.elapsed().as_millis() as u64)
            }
        };

        Ok(report)
    }
}

fn build_prompt(context: &AgentContext) -> String {
    let idea = &context.idea;

    let market_insights = match context.prior_report(AgentRole::Researcher) {
        Some(research) => format!(
            "\n**MARKET RESEARCH INSIGHTS:**\n- {}",
            research.key_insights.join("\n- ")
        ),
        None => String::new(),
    };

    let features = if idea.key_features.is_empty() {
        "Not specified".to_string()
    } else {
        idea.key_features.join(", ")
    };

    format!(
        r#"You are an expert product designer and UX strategist. Critique this startup idea's product design.

**IDEA:**
- Title: {title}
- Solution: {solution}
- Key Features: {features}
- Technology: {technology}
{market_insights}

**YOUR TASK:**
Analyze the product design and provide:

1. **Feature Prioritization**
   - Which features are essential for MVP? (top 3-5)
   - Which features can be delayed to v2?
   - Any missing critical features?

2. **UX/UI Considerations**
   - Key user flows to nail
   - Potential UX pitfalls to avoid
   - Design principles to follow

3. **Technical Architecture**
   - Suggested tech stack (be specific)
   - Scalability considerations
   - Technical risks to mitigate

4. **MVP Scope**
   - Recommended MVP timeline (weeks)
   - Core value proposition to prove
   - Success metrics to track

Respond in valid JSON only, no prose wrapper:
{{
  "summary": "2-3 sentence product design assessment",
  "mvp_features": ["feature 1", "feature 2", "feature 3"],
  "tech_stack": "Recommended stack description",
  "key_insights": ["insight 1", "insight 2", "insight 3"],
  "recommendations": ["recommendation 1", "recommendation 2", "recommendation 3"],
  "concerns": ["concern 1", "concern 2"],
  "confidence_score": 80
}}"#,
        title = idea.title,
        solution = idea.solution_description,
        features = features,
        technology = idea.technology,
        market_insights = market_insights,
    )
}

fn report_from_analysis(analysis: &Value, execution_time_ms: u64) -> AgentReport {
    let mut metadata = Map::new();
    metadata.insert(
        "mvp_features".to_string(),
        parse::metadata_value(analysis, "mvp_features", json!([])),
    );
    metadata.insert(
        "tech_stack_suggestion".to_string(),
        parse::metadata_value(analysis, "tech_stack", json!("Unable to determine")),
    );

    AgentReport {
        agent_role: AgentRole::Designer,
        summary: parse::str_field(analysis, "summary", "Product design analysis completed."),
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
    metadata.insert("mvp_features".to_string(), json!([]));
    metadata.insert(
        "tech_stack_suggestion".to_string(),
        json!("Unable to determine"),
    );

    AgentReport {
        agent_role: AgentRole::Designer,
        summary: "Product design analysis completed with parsing issues.".to_string(),
        key_insights: vec!["Design analysis data unavailable".to_string()],
        recommendations: vec!["Re-run analysis".to_string()],
        concerns: vec!["Unable to parse design data".to_string()],
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
    async fn test_report_carries_designer_metadata() {
        let provider = Arc::new(StubProvider::always(&valid_response(70)));
        let agent = DesignerAgent::new(provider);

        let context = AgentContext::new(sample_idea(), None);
        let report = agent.execute(&context).await.unwrap();

        assert_eq!(report.agent_role, AgentRole::Designer);
        assert!(report.metadata.contains_key("mvp_features"));
        assert!(report.metadata.contains_key("tech_stack_suggestion"));
    }

    #[tokio::test]
    async fn test_fallback_on_unparseable_output() {
        let provider = Arc::new(StubProvider::always("```json\n{\"broken\": \n```"));
        let agent = DesignerAgent::new(provider);

        let context = AgentContext::new(sample_idea(), None);
        let report = agent.execute(&context).await.unwrap();

        assert_eq!(report.confidence_score, PARSE_FALLBACK_CONFIDENCE);
        assert_eq!(report.concerns, vec!["Unable to parse design data"]);
    }

    #[test]
    fn test_prompt_includes_researcher_insights_when_present() {
        let mut context = AgentContext::new(sample_idea(), None);
        context.previous_reports.push(AgentReport {
            agent_role: AgentRole::Researcher,
            summary: "s".to_string(),
            key_insights: vec!["Utilities budget for resilience".to_string()],
            recommendations: vec![],
            concerns: vec![],
            confidence_score: 80,
            execution_time_ms: 1,
            metadata: Map::new(),
        });

        let prompt = build_prompt(&context);
        assert!(prompt.contains("MARKET RESEARCH INSIGHTS"));
        assert!(prompt.contains("Utilities budget for resilience"));
    }

    #[test]
    fn test_prompt_omits_market_section_without_researcher() {
        let context = AgentContext::new(sample_idea(), None);
        let prompt = build_prompt(&context);
        assert!(!prompt.contains("MARKET RESEARCH INSIGHTS"));
    }
}
