//! MoSCoW prioritization stage with strict MVP scoping.

use crate::render_stage;
use apo_core::{Completion, CompletionRequest, Result, StageOutput};
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are a strict product owner. Reject feature creep and overbuilding. \
     Output valid JSON only.";

/// Builds MoSCoW priorities and enforces MVP scope discipline.
pub struct PrioritizerAgent {
    client: Arc<dyn Completion>,
}

impl PrioritizerAgent {
    pub fn new(client: Arc<dyn Completion>) -> Self {
        Self { client }
    }

    pub fn build_request(&self, startup_idea: &str, analysis: &StageOutput) -> CompletionRequest {
        let analysis = render_stage(analysis);
        let user_prompt = format!(
            r#"
Startup idea:
{startup_idea}

Analysis JSON:
{analysis}

Create a prioritized feature set using MoSCoW.
Return JSON with keys:
- moscow: {{"must_have": [str], "should_have": [str], "could_have": [str], "wont_have_now": [str]}}
- mvp_scope: {{"strict_goal": str, "included_features": [str], "excluded_to_prevent_creep": [str], "release_criteria": [str]}}
- rationale: {{"priority_logic": [str], "tradeoffs": [str]}}

Rules:
1) Must-have items should be minimal and enough to prove value quickly.
2) Excluded list should be explicit and opinionated.
3) Keep total included MVP features between 3 and 6.
"#
        );
        CompletionRequest::new(SYSTEM_PROMPT, user_prompt)
    }

    pub async fn run(&self, startup_idea: &str, analysis: &StageOutput) -> Result<StageOutput> {
        self.client.complete_json(self.build_request(startup_idea, analysis)).await
    }
}
