use apo_core::{ApoError, Result};
use std::path::Path;

pub const DEFAULT_DEMO_IDEA: &str =
    "Build an AI crypto portfolio tracking app for retail investors.";

/// Where the startup idea came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaSource {
    Argument,
    File,
    Demo,
}

/// Resolve the idea: positional argument, then file, then the demo idea.
pub fn load_idea(idea: Option<&str>, idea_file: Option<&Path>) -> Result<(String, IdeaSource)> {
    let (text, source) = match (idea, idea_file) {
        (Some(idea), _) => (idea.trim().to_string(), IdeaSource::Argument),
        (None, Some(path)) => (std::fs::read_to_string(path)?.trim().to_string(), IdeaSource::File),
        (None, None) => (DEFAULT_DEMO_IDEA.to_string(), IdeaSource::Demo),
    };

    if text.is_empty() {
        return Err(ApoError::Input("startup idea must not be empty".to_string()));
    }
    Ok((text, source))
}
