use crate::{ApoError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed output of one pipeline stage.
///
/// The shape is whatever the model produced; the only guarantee is that it
/// parsed as a JSON object.
pub type StageOutput = Map<String, Value>;

/// A single system/user prompt pair sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl CompletionRequest {
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self { system_prompt: system_prompt.into(), user_prompt: user_prompt.into() }
    }
}

/// Provider-agnostic text generation.
///
/// Implementors only supply [`Completion::complete`]; the JSON contract in
/// [`Completion::complete_json`] is shared so every backend rejects malformed
/// model output the same way.
#[async_trait]
pub trait Completion: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    async fn complete_json(&self, request: CompletionRequest) -> Result<StageOutput> {
        let raw = self.complete(request).await?;
        parse_json_object(&raw)
    }
}

/// Parse generated text as a JSON object.
pub fn parse_json_object(raw: &str) -> Result<StageOutput> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApoError::InvalidResponseFormat(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(ApoError::InvalidResponseFormat(e.to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
