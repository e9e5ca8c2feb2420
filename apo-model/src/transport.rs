//! Wire contract shared by every provider variant.

use crate::config::ProviderConfig;
use apo_core::{CompletionRequest, Result};
use serde::Serialize;
use serde_json::Value;

/// One provider's HTTP contract: where to POST, how to authenticate, what the
/// body looks like, and where the generated text lives in the response.
///
/// Adding a provider means adding a [`crate::Provider`] variant and one
/// implementation of this trait.
pub trait Transport: Send + Sync {
    /// Request body serialized as JSON.
    type Body: Serialize + Send + Sync;

    /// Display name used in diagnostics (e.g., "OpenAI").
    fn provider_name(&self) -> &'static str;

    /// Public API host used when no base URL override is configured.
    fn default_base_url(&self) -> &'static str;

    /// Endpoint path appended to the base URL.
    fn path(&self) -> &'static str;

    /// Authentication and versioning headers.
    fn headers(&self, api_key: &str) -> Vec<(&'static str, String)>;

    fn build_request(&self, config: &ProviderConfig, request: &CompletionRequest) -> Self::Body;

    /// Extract the generated text from a decoded response body.
    fn parse_response(&self, body: &Value) -> Result<String>;

    fn endpoint(&self, base_url: Option<&str>) -> String {
        let base = base_url.unwrap_or(self.default_base_url());
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}
