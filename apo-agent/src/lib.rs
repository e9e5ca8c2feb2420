//! # apo-agent
//!
//! Stage agents and the pipeline that chains them.
//!
//! ```text
//! idea ──► AnalyzerAgent ──► PrioritizerAgent ──► RoadmapAgent ──► Evaluator ──► PlanReport
//! ```
//!
//! Each agent builds one system/user prompt pair and delegates to a shared
//! [`apo_core::Completion`] backend, so switching provider never touches agent
//! code.

pub mod analyzer;
pub mod pipeline;
pub mod prioritizer;
pub mod roadmap;

pub use analyzer::AnalyzerAgent;
pub use pipeline::{Pipeline, PlanReport};
pub use prioritizer::PrioritizerAgent;
pub use roadmap::RoadmapAgent;

use apo_core::StageOutput;
use serde_json::Value;

/// Pretty-printed JSON of an earlier stage, for embedding in a prompt.
pub(crate) fn render_stage(output: &StageOutput) -> String {
    format!("{:#}", Value::Object(output.clone()))
}
