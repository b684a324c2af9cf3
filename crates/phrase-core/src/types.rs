use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::LanguageCode;

/// One user-initiated translate action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub id: Uuid,
    pub text: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Failure categories surfaced to the user.
///
/// Every kind is terminal for the request that produced it; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidInput,
    NetworkError,
    TimeoutError,
    BackendError,
    RateLimited,
    AccessDenied,
    Unavailable,
    UnknownError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::NetworkError => "network error",
            ErrorKind::TimeoutError => "timeout",
            ErrorKind::BackendError => "backend error",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::AccessDenied => "access denied",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::UnknownError => "unknown error",
        };
        f.write_str(label)
    }
}

/// Uniform failure of a translation service operation.
/// `message` is meant for direct display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ServiceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // Front end -> event loop
    TranslateText(String),
    SetSourceLanguage(String),
    SetTargetLanguage(String),
    SwapLanguages,
    /// Detect the given text, or the current input when `None`
    DetectLanguage(Option<String>),
    CheckAvailability,
    SaveTranslation(PathBuf),
    Shutdown,

    // Worker -> event loop
    TranslationFinished {
        id: Uuid,
        result: Result<String, ServiceError>,
    },
    LanguageDetected(Result<LanguageCode, ServiceError>),
    AvailabilityChecked(bool),

    // Event loop -> front end
    ShowTranslation {
        text: String,
        from_lang: String,
        to_lang: String,
    },
    ShowError(ServiceError),
    LanguagesChanged {
        source: String,
        target: String,
    },
    InputReplaced(String),
    StatusUpdate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_get_distinct_ids() {
        let a = TranslationRequest::new("hello", "en", "es");
        let b = TranslationRequest::new("hello", "en", "es");
        assert_ne!(a.id, b.id);
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_service_error_displays_message() {
        let err = ServiceError::new(ErrorKind::RateLimited, "slow down");
        assert_eq!(err.to_string(), "slow down");
        assert_eq!(err.kind.to_string(), "rate limited");
    }
}
