#[derive(Debug, thiserror::Error)]
pub enum ApoError {
    #[error("Missing {env_var} environment variable.")]
    MissingCredential { env_var: String },

    #[error("Unsupported LLM_PROVIDER '{0}'. Use 'openai' or 'anthropic'.")]
    UnsupportedProvider(String),

    #[error("{provider} request failed ({status_code}): {body}")]
    ProviderHttp { provider: String, status_code: u16, body: String },

    #[error("{provider} network error: {reason}")]
    ProviderNetwork { provider: String, reason: String },

    #[error("{provider} request timed out.")]
    ProviderTimeout { provider: String },

    #[error("Unexpected {provider} response format: {reason}")]
    ProviderResponseFormat { provider: String, reason: String },

    #[error("Model returned invalid JSON ({0}). Tighten the prompt or switch model.")]
    InvalidResponseFormat(String),

    #[error("{0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApoError {
    /// True for failures raised by the completion layer: credentials, provider
    /// selection, transport, and response parsing.
    pub fn is_completion_error(&self) -> bool {
        matches!(
            self,
            ApoError::MissingCredential { .. }
                | ApoError::UnsupportedProvider(_)
                | ApoError::ProviderHttp { .. }
                | ApoError::ProviderNetwork { .. }
                | ApoError::ProviderTimeout { .. }
                | ApoError::ProviderResponseFormat { .. }
                | ApoError::InvalidResponseFormat(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ApoError>;
