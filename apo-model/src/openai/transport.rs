use super::convert::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ResponseFormat,
};
use crate::config::ProviderConfig;
use crate::transport::Transport;
use apo_core::{ApoError, CompletionRequest, Result};
use serde::Deserialize;
use serde_json::Value;

pub const OPENAI_API_BASE: &str = "https://api.openai.com";

const PROVIDER_NAME: &str = "OpenAI";

/// OpenAI-style transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAITransport;

impl Transport for OpenAITransport {
    type Body = ChatCompletionRequest;

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn default_base_url(&self) -> &'static str {
        OPENAI_API_BASE
    }

    fn path(&self) -> &'static str {
        "/v1/chat/completions"
    }

    fn headers(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![("Authorization", format!("Bearer {api_key}"))]
    }

    fn build_request(&self, config: &ProviderConfig, request: &CompletionRequest) -> Self::Body {
        ChatCompletionRequest {
            model: config.model().to_string(),
            messages: vec![
                ChatMessage { role: "system", content: request.system_prompt.clone() },
                ChatMessage { role: "user", content: request.user_prompt.clone() },
            ],
            temperature: config.temperature(),
            response_format: ResponseFormat { kind: "json_object" },
        }
    }

    fn parse_response(&self, body: &Value) -> Result<String> {
        let response = ChatCompletionResponse::deserialize(body).map_err(format_error)?;

        let first = response.choices.into_iter().next().ok_or_else(|| {
            ApoError::ProviderResponseFormat {
                provider: PROVIDER_NAME.to_string(),
                reason: "response contained no choices".to_string(),
            }
        })?;

        let choice = Choice::deserialize(first).map_err(format_error)?;
        Ok(choice.message.content)
    }
}

fn format_error(error: serde_json::Error) -> ApoError {
    ApoError::ProviderResponseFormat { provider: PROVIDER_NAME.to_string(), reason: error.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let config = ProviderConfig::new(Provider::OpenAI, "gpt-4o-mini").with_temperature(0.3);
        let request = CompletionRequest::new("be strict", "analyze this");
        let body = serde_json::to_value(OpenAITransport.build_request(&config, &request)).unwrap();

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0], json!({"role": "system", "content": "be strict"}));
        assert_eq!(body["messages"][1], json!({"role": "user", "content": "analyze this"}));
        assert_eq!(body["response_format"], json!({"type": "json_object"}));
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_bearer_header() {
        let headers = OpenAITransport.headers("sk-test");
        assert_eq!(headers, vec![("Authorization", "Bearer sk-test".to_string())]);
    }

    #[test]
    fn test_extracts_first_choice() {
        let body = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "{\"ok\": true}"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        });
        assert_eq!(OpenAITransport.parse_response(&body).unwrap(), "{\"ok\": true}");
    }

    #[test]
    fn test_malformed_later_choice_is_ignored() {
        let body = json!({
            "choices": [
                {"message": {"content": "{\"ok\": true}"}},
                {"finish_reason": "content_filter"}
            ]
        });
        assert_eq!(OpenAITransport.parse_response(&body).unwrap(), "{\"ok\": true}");
    }

    #[test]
    fn test_first_choice_without_message_is_format_error() {
        let body = json!({"choices": [{"finish_reason": "length"}]});
        let err = OpenAITransport.parse_response(&body).unwrap_err();
        assert!(matches!(err, ApoError::ProviderResponseFormat { ref reason, .. } if reason.contains("message")));
    }

    #[test]
    fn test_missing_choices_is_format_error() {
        let err = OpenAITransport.parse_response(&json!({"id": "chatcmpl-1"})).unwrap_err();
        assert!(matches!(err, ApoError::ProviderResponseFormat { ref provider, .. } if provider == "OpenAI"));
    }

    #[test]
    fn test_empty_choices_is_format_error() {
        let err = OpenAITransport.parse_response(&json!({"choices": []})).unwrap_err();
        assert!(matches!(err, ApoError::ProviderResponseFormat { .. }));
    }

    #[test]
    fn test_null_content_is_format_error() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": null}}]});
        let err = OpenAITransport.parse_response(&body).unwrap_err();
        assert!(matches!(err, ApoError::ProviderResponseFormat { .. }));
    }
}
