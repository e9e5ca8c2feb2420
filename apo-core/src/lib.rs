//! # apo-core
//!
//! Shared contracts for ai-priority-architect.
//!
//! - [`Completion`] - provider-agnostic text generation with a JSON variant
//! - [`ApoError`] - the single error taxonomy surfaced to the CLI boundary
//! - [`StageOutput`] - opaque JSON object produced by each pipeline stage

pub mod error;
pub mod model;

pub use error::{ApoError, Result};
pub use model::{Completion, CompletionRequest, StageOutput, parse_json_object};
