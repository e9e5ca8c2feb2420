use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ai-priority-architect")]
#[command(about = "Convert a raw startup idea into an actionable APO plan.", long_about = None)]
pub struct Cli {
    /// Raw startup idea text. If omitted, use --idea-file.
    pub idea: Option<String>,

    /// Path to a text file containing the startup idea
    #[arg(long)]
    pub idea_file: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Provider override (openai or anthropic); defaults to LLM_PROVIDER
    #[arg(long)]
    pub provider: Option<String>,

    /// Model override; defaults to LLM_MODEL
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature in [0, 2]
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
