//! HTTP completion client.

use crate::anthropic::AnthropicTransport;
use crate::config::{Provider, ProviderConfig};
use crate::openai::OpenAITransport;
use crate::transport::Transport;
use apo_core::{ApoError, Completion, CompletionRequest, Result};
use apo_telemetry::{Instrument, model_call_span};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Completion client for the configured provider.
///
/// Each call issues exactly one POST bounded by the configured timeout. Errors
/// are mapped onto [`ApoError`] and returned as-is; nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use apo_core::{Completion, CompletionRequest};
/// use apo_model::{LlmClient, ProviderConfig};
///
/// # async fn run() -> apo_core::Result<()> {
/// let client = LlmClient::new(ProviderConfig::from_env()?)?;
/// let plan = client
///     .complete_json(CompletionRequest::new("Return JSON only.", "Plan a todo app"))
///     .await?;
/// println!("{plan:?}");
/// # Ok(())
/// # }
/// ```
pub struct LlmClient {
    client: Client,
    config: ProviderConfig,
}

impl LlmClient {
    /// Create a client after validating the configuration.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        // No idle pooling: every call opens and closes its own connection.
        let client = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ApoError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn send<T: Transport>(&self, transport: &T, request: &CompletionRequest) -> Result<String> {
        let api_key = self.config.api_key()?;
        let provider = transport.provider_name();
        let url = transport.endpoint(self.config.base_url());
        let body = transport.build_request(&self.config, request);

        let mut builder = self.client.post(&url).json(&body);
        for (name, value) in transport.headers(api_key) {
            builder = builder.header(name, value);
        }

        tracing::debug!(%url, "sending completion request");
        let response = builder.send().await.map_err(|e| transport_error(provider, &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            tracing::debug!(status = status.as_u16(), "provider returned error status");
            return Err(ApoError::ProviderHttp {
                provider: provider.to_string(),
                status_code: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|e| transport_error(provider, &e))?;
        let data: Value = serde_json::from_str(&text).map_err(|e| {
            ApoError::ProviderResponseFormat {
                provider: provider.to_string(),
                reason: format!("non-JSON response body: {e}"),
            }
        })?;

        let content = transport.parse_response(&data)?;
        tracing::debug!(chars = content.len(), "completion received");
        Ok(content)
    }
}

/// Body text for an error status; a failed read is reported in its place.
fn error_body<E: std::fmt::Display>(read: std::result::Result<String, E>) -> String {
    read.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to read error response body");
        format!("<unreadable response body: {e}>")
    })
}

/// Split reqwest failures into timeouts and connection-level errors.
fn transport_error(provider: &str, error: &reqwest::Error) -> ApoError {
    if error.is_timeout() {
        return ApoError::ProviderTimeout { provider: provider.to_string() };
    }
    ApoError::ProviderNetwork { provider: provider.to_string(), reason: error_chain(error) }
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}

#[async_trait]
impl Completion for LlmClient {
    fn name(&self) -> &str {
        self.config.model()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let span = model_call_span(self.config.provider().as_str(), self.config.model());
        match self.config.provider() {
            Provider::OpenAI => self.send(&OpenAITransport, &request).instrument(span).await,
            Provider::Anthropic => self.send(&AnthropicTransport, &request).instrument(span).await,
        }
    }
}
