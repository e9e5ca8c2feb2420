//! Evaluation output types

use serde::{Deserialize, Serialize};

pub const CLARITY_WEIGHT: u32 = 200;
pub const PRIORITY_STRENGTH_WEIGHT: u32 = 300;
pub const MVP_STRICTNESS_WEIGHT: u32 = 300;
pub const EXECUTION_FEASIBILITY_WEIGHT: u32 = 200;

pub const SCORE_FORMULA: &str = "(Clarity × 200) + (Priority Strength × 300) + \
     (MVP Strictness × 300) + (Execution Feasibility × 200)";

/// Per-dimension scores, each in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscores {
    pub clarity: u32,
    pub priority_strength: u32,
    pub mvp_strictness: u32,
    pub execution_feasibility: u32,
}

impl Subscores {
    /// Weighted total on the 1-10000 scale.
    pub fn total(&self) -> u32 {
        self.clarity * CLARITY_WEIGHT
            + self.priority_strength * PRIORITY_STRENGTH_WEIGHT
            + self.mvp_strictness * MVP_STRICTNESS_WEIGHT
            + self.execution_feasibility * EXECUTION_FEASIBILITY_WEIGHT
    }
}

/// Final evaluation stage output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub subscores: Subscores,
    #[serde(rename = "score_formula")]
    pub formula_description: String,
    #[serde(rename = "total_score_1_to_10000")]
    pub total_score: u32,
    #[serde(rename = "scoring_explanation")]
    pub explanation: Vec<String>,
}

impl EvaluationResult {
    pub fn from_subscores(subscores: Subscores) -> Self {
        Self {
            subscores,
            formula_description: SCORE_FORMULA.to_string(),
            total_score: subscores.total(),
            explanation: vec![
                "Each subscore is normalized on a 1-10 scale from structural quality signals."
                    .to_string(),
                "Priority and MVP strictness carry the highest weights to discourage feature creep."
                    .to_string(),
                "Execution feasibility rewards realistic dependencies, sequencing, and measurable outcomes."
                    .to_string(),
            ],
        }
    }
}
