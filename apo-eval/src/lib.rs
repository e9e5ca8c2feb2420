//! # apo-eval
//!
//! Deterministic scoring of a generated plan.
//!
//! Four subscores on a 1-10 scale are derived from structural signals in the
//! analysis, prioritization, and roadmap outputs, then combined into a total
//! on a 1-10000 scale:
//!
//! ```text
//! (Clarity × 200) + (Priority Strength × 300) + (MVP Strictness × 300) + (Execution Feasibility × 200)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use apo_core::StageOutput;
//! use apo_eval::Evaluator;
//!
//! let empty = StageOutput::new();
//! let result = Evaluator::new().evaluate(&empty, &empty, &empty);
//! assert_eq!(result.total_score, 3500);
//! ```

pub mod report;
pub mod scoring;

pub use report::{EvaluationResult, Subscores};
pub use scoring::Evaluator;
