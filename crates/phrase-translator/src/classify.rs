//! Backend failure classification.
//!
//! Backends do not report errors in a structured, stable way, so the rules
//! below look at the error variant, the HTTP status when there is one, and
//! substrings of the rendered message. Rules are evaluated top to bottom and
//! the first match wins; anything unmatched is [`ErrorKind::UnknownError`].

use phrase_core::types::{ErrorKind, ServiceError};

use crate::TranslateError;

struct Rule {
    kind: ErrorKind,
    matches: fn(&TranslateError, &str) -> bool,
}

static RULES: &[Rule] = &[
    Rule {
        kind: ErrorKind::NetworkError,
        matches: |err, _| matches!(err, TranslateError::Connection(_)),
    },
    Rule {
        kind: ErrorKind::TimeoutError,
        matches: |err, _| matches!(err, TranslateError::Timeout(_)),
    },
    Rule {
        kind: ErrorKind::RateLimited,
        matches: |err, text| {
            err.status() == Some(429) || text.contains("429") || text.contains("too many requests")
        },
    },
    Rule {
        kind: ErrorKind::AccessDenied,
        matches: |err, text| {
            err.status() == Some(403) || text.contains("403") || text.contains("forbidden")
        },
    },
    Rule {
        kind: ErrorKind::Unavailable,
        matches: |err, text| err.status() == Some(503) || text.contains("service unavailable"),
    },
    Rule {
        kind: ErrorKind::BackendError,
        matches: |err, _| matches!(err, TranslateError::Http { .. }),
    },
];

pub fn classify(err: &TranslateError) -> ErrorKind {
    let text = err.to_string().to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(err, &text))
        .map(|rule| rule.kind)
        .unwrap_or(ErrorKind::UnknownError)
}

/// Classify and attach the message shown to the user
pub fn to_service_error(err: &TranslateError) -> ServiceError {
    let kind = classify(err);
    let message = match kind {
        ErrorKind::NetworkError => "Network error: Please check your internet connection".to_string(),
        ErrorKind::TimeoutError => "Translation timeout: Please try again".to_string(),
        ErrorKind::RateLimited => {
            "Rate limit exceeded: Please wait a moment and try again".to_string()
        }
        ErrorKind::AccessDenied => {
            "Translation service access denied: Please check your connection".to_string()
        }
        ErrorKind::Unavailable => "Translation service temporarily unavailable".to_string(),
        ErrorKind::BackendError => format!("Translation service error: {err}"),
        ErrorKind::InvalidInput | ErrorKind::UnknownError => format!("Translation failed: {err}"),
    };

    ServiceError::new(kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, message: &str) -> TranslateError {
        TranslateError::Http {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_transport_failures() {
        assert_eq!(
            classify(&TranslateError::Connection("connection refused".into())),
            ErrorKind::NetworkError
        );
        assert_eq!(
            classify(&TranslateError::Timeout("operation timed out".into())),
            ErrorKind::TimeoutError
        );
    }

    #[test]
    fn test_rate_limit_by_status_or_text() {
        assert_eq!(classify(&http(429, "slow down")), ErrorKind::RateLimited);
        assert_eq!(classify(&TranslateError::RateLimitExceeded), ErrorKind::RateLimited);
        assert_eq!(
            classify(&TranslateError::ApiError("upstream said 429".into())),
            ErrorKind::RateLimited
        );
        assert_eq!(
            classify(&TranslateError::ApiError("Too Many Requests".into())),
            ErrorKind::RateLimited
        );
    }

    #[test]
    fn test_access_denied() {
        assert_eq!(classify(&http(403, "nope")), ErrorKind::AccessDenied);
        assert_eq!(classify(&TranslateError::AuthenticationError), ErrorKind::AccessDenied);
        assert_eq!(
            classify(&TranslateError::ApiError("Forbidden by policy".into())),
            ErrorKind::AccessDenied
        );
    }

    #[test]
    fn test_unavailable() {
        assert_eq!(classify(&http(503, "maintenance")), ErrorKind::Unavailable);
        assert_eq!(
            classify(&TranslateError::ApiError("Service Unavailable".into())),
            ErrorKind::Unavailable
        );
    }

    #[test]
    fn test_other_http_is_backend_error() {
        let err = http(500, "internal error");
        assert_eq!(classify(&err), ErrorKind::BackendError);

        let failure = to_service_error(&err);
        assert_eq!(failure.kind, ErrorKind::BackendError);
        assert!(failure.message.contains("internal error"));
    }

    #[test]
    fn test_unknown_preserves_message() {
        let err = TranslateError::ApiError("malformed payload".into());
        let failure = to_service_error(&err);
        assert_eq!(failure.kind, ErrorKind::UnknownError);
        assert_eq!(failure.message, "Translation failed: API error: malformed payload");
    }

    #[test]
    fn test_transport_rules_win_over_text() {
        // "429" in a connection error is still a network problem
        let err = TranslateError::Connection("tcp connect to 10.0.0.1:429 refused".into());
        assert_eq!(classify(&err), ErrorKind::NetworkError);
    }
}
