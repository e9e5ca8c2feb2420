//! Sequential four-stage pipeline.

use crate::{AnalyzerAgent, PrioritizerAgent, RoadmapAgent};
use apo_core::{Completion, Result, StageOutput};
use apo_eval::{EvaluationResult, Evaluator};
use apo_telemetry::{Instrument, stage_span};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything produced for one startup idea, in output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub startup_idea: String,
    pub analysis: StageOutput,
    pub prioritization: StageOutput,
    pub roadmap: StageOutput,
    pub evaluation: EvaluationResult,
}

/// Runs analyze, prioritize, roadmap, and evaluate in order.
///
/// The first failing stage aborts the run and its error is returned
/// unchanged; no partial report is produced.
pub struct Pipeline {
    model: String,
    analyzer: AnalyzerAgent,
    prioritizer: PrioritizerAgent,
    roadmap: RoadmapAgent,
    evaluator: Evaluator,
}

impl Pipeline {
    pub fn new(client: Arc<dyn Completion>) -> Self {
        Self {
            model: client.name().to_string(),
            analyzer: AnalyzerAgent::new(client.clone()),
            prioritizer: PrioritizerAgent::new(client.clone()),
            roadmap: RoadmapAgent::new(client),
            evaluator: Evaluator::new(),
        }
    }

    /// Name of the model backing every stage.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn run(&self, startup_idea: &str) -> Result<PlanReport> {
        tracing::info!(model = %self.model, idea_chars = startup_idea.len(), "pipeline started");

        let analysis = self.analyzer.run(startup_idea).instrument(stage_span("analyze")).await?;

        let prioritization = self
            .prioritizer
            .run(startup_idea, &analysis)
            .instrument(stage_span("prioritize"))
            .await?;

        let roadmap = self
            .roadmap
            .run(startup_idea, &analysis, &prioritization)
            .instrument(stage_span("roadmap"))
            .await?;

        let evaluation = stage_span("evaluate")
            .in_scope(|| self.evaluator.evaluate(&analysis, &prioritization, &roadmap));

        tracing::info!(total_score = evaluation.total_score, "pipeline finished");

        Ok(PlanReport {
            startup_idea: startup_idea.to_string(),
            analysis,
            prioritization,
            roadmap,
            evaluation,
        })
    }
}
