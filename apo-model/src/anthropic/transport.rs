use super::convert::{Message, MessagesRequest, MessagesResponse};
use crate::config::ProviderConfig;
use crate::transport::Transport;
use apo_core::{ApoError, CompletionRequest, Result};
use serde::Deserialize;
use serde_json::Value;

pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

const PROVIDER_NAME: &str = "Anthropic";
const JSON_REMINDER: &str = "Always return valid JSON.";

/// Anthropic-style transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicTransport;

fn format_error(reason: impl Into<String>) -> ApoError {
    ApoError::ProviderResponseFormat { provider: PROVIDER_NAME.to_string(), reason: reason.into() }
}

impl Transport for AnthropicTransport {
    type Body = MessagesRequest;

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn default_base_url(&self) -> &'static str {
        ANTHROPIC_API_BASE
    }

    fn path(&self) -> &'static str {
        "/v1/messages"
    }

    fn headers(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("x-api-key", api_key.to_string()),
            ("anthropic-version", ANTHROPIC_API_VERSION.to_string()),
        ]
    }

    fn build_request(&self, config: &ProviderConfig, request: &CompletionRequest) -> Self::Body {
        MessagesRequest {
            model: config.model().to_string(),
            max_tokens: config.max_tokens(),
            temperature: config.temperature(),
            system: format!("{}\n{JSON_REMINDER}", request.system_prompt),
            messages: vec![Message { role: "user", content: request.user_prompt.clone() }],
        }
    }

    fn parse_response(&self, body: &Value) -> Result<String> {
        let response =
            MessagesResponse::deserialize(body).map_err(|e| format_error(e.to_string()))?;

        let mut texts = Vec::new();
        for block in response.content {
            if block.kind.as_deref() != Some("text") {
                continue;
            }
            match block.text {
                Some(text) => texts.push(text),
                None => return Err(format_error("text block without a text field")),
            }
        }

        if texts.is_empty() {
            return Err(format_error("response had no text content"));
        }
        Ok(texts.join("\n"))
    }
}
