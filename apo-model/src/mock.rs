use apo_core::{ApoError, Completion, CompletionRequest, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted completion backend for tests.
///
/// Responses are returned in the order they were added; every request is
/// recorded so callers can inspect the prompts that were sent.
pub struct MockCompletion {
    name: String,
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    pub fn with_error(self, error: ApoError) -> Self {
        self.push(Err(error));
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn push(&self, response: Result<String>) {
        self.responses.lock().unwrap_or_else(|p| p.into_inner()).push_back(response);
    }
}

#[async_trait]
impl Completion for MockCompletion {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap_or_else(|p| p.into_inner()).push(request);
        self.responses.lock().unwrap_or_else(|p| p.into_inner()).pop_front().unwrap_or_else(|| {
            Err(ApoError::ProviderResponseFormat {
                provider: self.name.clone(),
                reason: "no scripted response left".to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_responses_in_order() {
        let mock = MockCompletion::new("mock").with_response("first").with_response("second");

        let first = mock.complete(CompletionRequest::new("s", "u1")).await.unwrap();
        let second = mock.complete(CompletionRequest::new("s", "u2")).await.unwrap();
        assert_eq!((first.as_str(), second.as_str()), ("first", "second"));
        assert_eq!(mock.requests()[1].user_prompt, "u2");
    }

    #[tokio::test]
    async fn test_mock_errors_when_exhausted() {
        let mock = MockCompletion::new("mock");
        let err = mock.complete(CompletionRequest::new("s", "u")).await.unwrap_err();
        assert!(matches!(err, ApoError::ProviderResponseFormat { .. }));
    }

    #[tokio::test]
    async fn test_mock_complete_json_rejects_plain_text() {
        let mock = MockCompletion::new("mock").with_response("not json");
        let err = mock.complete_json(CompletionRequest::new("s", "u")).await.unwrap_err();
        assert!(matches!(err, ApoError::InvalidResponseFormat(_)));
    }
}
