//! # apo-cli
//!
//! Command-line boundary for ai-priority-architect.
//!
//! Reads the idea and the provider configuration, runs the pipeline, and
//! maps each error kind to a process exit code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success |
//! | 1 | unexpected error |
//! | 2 | input error (missing file, blank idea, invalid flag values) |
//! | 3 | provider or completion error |

pub mod cli;
pub mod config;
pub mod idea;

pub use cli::Cli;
pub use config::provider_config;
pub use idea::{DEFAULT_DEMO_IDEA, IdeaSource, load_idea};

use anyhow::{Context, Result};
use apo_agent::Pipeline;
use apo_core::ApoError;
use apo_model::LlmClient;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "ai-priority-architect";

/// Log filter when `RUST_LOG` is unset; stderr carries only the diagnostic.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const EXIT_UNEXPECTED: u8 = 1;
pub const EXIT_INPUT: u8 = 2;
pub const EXIT_COMPLETION: u8 = 3;

/// Run the whole pipeline for the parsed arguments and render the report.
pub async fn run(cli: &Cli) -> Result<String> {
    let (startup_idea, source) = load_idea(cli.idea.as_deref(), cli.idea_file.as_deref())?;
    if source == IdeaSource::Demo {
        eprintln!("No idea provided. Using default demo idea.");
    }

    let config = provider_config(cli)?;
    tracing::info!(provider = %config.provider(), model = config.model(), "provider configured");

    let client = LlmClient::new(config)?;
    let report = Pipeline::new(Arc::new(client)).run(&startup_idea).await?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    rendered.context("failed to serialize report")
}

/// Exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ApoError>() {
        Some(e) if e.is_completion_error() => EXIT_COMPLETION,
        Some(ApoError::Input(_) | ApoError::Io(_) | ApoError::Config(_)) => EXIT_INPUT,
        _ => EXIT_UNEXPECTED,
    }
}

/// One-line diagnostic for stderr.
pub fn diagnostic(err: &anyhow::Error) -> String {
    match exit_code(err) {
        EXIT_COMPLETION => format!("LLM error: {err}"),
        EXIT_INPUT => format!("Input error: {err}"),
        _ => format!("Unexpected error: {err:#}"),
    }
}
