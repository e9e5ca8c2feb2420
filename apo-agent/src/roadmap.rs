//! Roadmap and execution planning stage.

use crate::render_stage;
use apo_core::{Completion, CompletionRequest, Result, StageOutput};
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are a pragmatic engineering manager and technical architect. \
     Return strict JSON. Favor delivery speed with production-quality basics.";

/// Converts MVP scope into implementation tasks and a 7-day plan.
pub struct RoadmapAgent {
    client: Arc<dyn Completion>,
}

impl RoadmapAgent {
    pub fn new(client: Arc<dyn Completion>) -> Self {
        Self { client }
    }

    pub fn build_request(
        &self,
        startup_idea: &str,
        analysis: &StageOutput,
        prioritization: &StageOutput,
    ) -> CompletionRequest {
        let analysis = render_stage(analysis);
        let prioritization = render_stage(prioritization);
        let user_prompt = format!(
            r#"
Startup idea:
{startup_idea}

Analysis JSON:
{analysis}

Prioritization JSON:
{prioritization}

Return JSON with keys:
- technical_architecture: {{"stack": [str], "core_components": [str], "data_model_notes": [str], "security_basics": [str]}}
- cursor_ready_tasks: [{{"id": str, "title": str, "description": str, "depends_on": [str], "acceptance_criteria": [str]}}]
- execution_plan_7_days: [{{"day": int, "focus": str, "deliverables": [str], "dependencies": [str]}}]
- kpis: [{{"name": str, "target": str, "measurement": str}}]
- risks: [{{"risk": str, "impact": str, "mitigation": str}}]

Rules:
1) Task IDs should be sequential like TASK-1, TASK-2.
2) Include realistic dependencies.
3) Keep plan to exactly 7 days.
"#
        );
        CompletionRequest::new(SYSTEM_PROMPT, user_prompt)
    }

    pub async fn run(
        &self,
        startup_idea: &str,
        analysis: &StageOutput,
        prioritization: &StageOutput,
    ) -> Result<StageOutput> {
        self.client.complete_json(self.build_request(startup_idea, analysis, prioritization)).await
    }
}
