use std::time::Duration;

pub use yatra_types::LanguageCode;

pub mod chat;

pub use chat::ChatCompletionTranslator;

/// Hosted translation provider interface.
///
/// One call is one attempt: implementations never retry. Bounding the wait is
/// the caller's job; a dropped future must leave nothing behind.
#[async_trait::async_trait]
pub trait RemoteTranslator: Send + Sync {
    /// Translate using the prompt pair carried by the request
    async fn translate(&self, request: &RemoteRequest) -> Result<String, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    /// Display name of the target language ("Spanish")
    pub target_name: String,
    pub system_prompt: String,
    pub user_prompt: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

/// Coarse failure class reported to the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Http,
    Network,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

impl TranslateError {
    pub fn kind(&self) -> FailureKind {
        match self {
            TranslateError::Timeout(_) => FailureKind::Timeout,
            TranslateError::NetworkError(e) if e.is_timeout() => FailureKind::Timeout,
            TranslateError::NetworkError(_) => FailureKind::Network,
            TranslateError::Http { .. }
            | TranslateError::InvalidResponse(_)
            | TranslateError::RateLimitExceeded
            | TranslateError::AuthenticationError => FailureKind::Http,
        }
    }
}
