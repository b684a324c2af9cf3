use serde::{Deserialize, Serialize};

pub use phrase_core::language::LanguageCode;
pub use phrase_core::types::{ErrorKind, ServiceError, TranslationRequest};

pub mod classify;
pub mod service;

pub use classify::{classify, to_service_error};
pub use service::TranslationService;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Detect language of text
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
    /// Source language reported by the backend when `from` was `auto`
    pub detected: Option<LanguageCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub name: String,
}

/// Raw backend failure, before classification
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("429 Too Many Requests")]
    RateLimitExceeded,

    #[error("403 Forbidden")]
    AuthenticationError,
}

impl TranslateError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslateError::Http { status, .. } => Some(*status),
            TranslateError::RateLimitExceeded => Some(429),
            TranslateError::AuthenticationError => Some(403),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        // Connect timeouts report both flags; count them as timeouts
        if err.is_timeout() {
            TranslateError::Timeout(err.to_string())
        } else if err.is_connect() {
            TranslateError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            TranslateError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            TranslateError::ApiError(err.to_string())
        }
    }
}
