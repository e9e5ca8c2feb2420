//! Idea analysis stage.

use apo_core::{Completion, CompletionRequest, Result, StageOutput};
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are a startup product strategist. Return strict JSON only. \
     Be concise but specific and practical.";

/// Extracts problem definition, user persona, and market opportunity.
pub struct AnalyzerAgent {
    client: Arc<dyn Completion>,
}

impl AnalyzerAgent {
    pub fn new(client: Arc<dyn Completion>) -> Self {
        Self { client }
    }

    pub fn build_request(&self, startup_idea: &str) -> CompletionRequest {
        let user_prompt = format!(
            r#"
Analyze this startup idea:
{startup_idea}

Return JSON with keys:
- problem_definition: {{"pain_point": str, "why_now": str, "current_alternatives": [str]}}
- target_user: {{"primary_persona": str, "jobs_to_be_done": [str], "adoption_barriers": [str]}}
- market_opportunity: {{"market_size_signal": str, "demand_indicators": [str], "wedge_strategy": str}}
"#
        );
        CompletionRequest::new(SYSTEM_PROMPT, user_prompt)
    }

    pub async fn run(&self, startup_idea: &str) -> Result<StageOutput> {
        self.client.complete_json(self.build_request(startup_idea)).await
    }
}
