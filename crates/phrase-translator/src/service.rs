use std::sync::Arc;

use phrase_core::language::{self, LanguageCode};
use phrase_core::types::{ErrorKind, ServiceError, TranslationRequest};
use tokio::task::JoinHandle;

use crate::classify::to_service_error;
use crate::{ProviderMetadata, Translation, Translator};

pub const DEFAULT_MAX_CHARS: usize = 5000;

const CANARY_TEXT: &str = "test";
const CANARY_FROM: &str = "en";
const CANARY_TO: &str = "es";

/// Validates requests, calls the backend and classifies its failures.
///
/// Holds no per-request state, so clones can be used from any number of
/// tasks at once. Serializing user actions is the caller's job.
#[derive(Clone)]
pub struct TranslationService {
    backend: Arc<dyn Translator>,
    max_chars: usize,
}

impl TranslationService {
    pub fn new(backend: Arc<dyn Translator>) -> Self {
        Self {
            backend,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn provider(&self) -> ProviderMetadata {
        self.backend.metadata()
    }

    /// Checks that run before any network I/O
    pub fn validate(&self, request: &TranslationRequest) -> Result<(), ServiceError> {
        if request.text.trim().is_empty() {
            return Err(ServiceError::invalid_input("Please enter text to translate"));
        }

        if request.text.chars().count() > self.max_chars {
            return Err(ServiceError::invalid_input(format!(
                "Text too long. Maximum {} characters allowed.",
                self.max_chars
            )));
        }

        if language::is_auto(&request.target) {
            return Err(ServiceError::invalid_input(
                "Auto Detect can only be used as the source language",
            ));
        }

        Ok(())
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<Translation, ServiceError> {
        self.validate(request)?;

        if request.source == request.target && !language::is_auto(&request.source) {
            tracing::debug!(id = %request.id, "same source and target, skipping backend");
            return Ok(Translation {
                text: request.text.clone(),
                from: request.source.clone(),
                to: request.target.clone(),
                provider: "identity".to_string(),
                detected: None,
            });
        }

        tracing::debug!(
            id = %request.id,
            from = %request.source,
            to = %request.target,
            chars = request.text.chars().count(),
            "sending translation request"
        );

        match self
            .backend
            .translate(&request.text, request.source.clone(), request.target.clone())
            .await
        {
            Ok(translation) => Ok(translation),
            Err(err) => {
                let failure = to_service_error(&err);
                tracing::warn!(id = %request.id, kind = ?failure.kind, "translation failed: {err}");
                Err(failure)
            }
        }
    }

    /// Run [`Self::translate`] on its own task
    pub fn spawn_translate(
        &self,
        request: TranslationRequest,
    ) -> JoinHandle<Result<Translation, ServiceError>> {
        let service = self.clone();
        tokio::spawn(async move { service.translate(&request).await })
    }

    pub async fn detect_language(&self, text: &str) -> Result<LanguageCode, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::invalid_input(
                "No text provided for language detection",
            ));
        }

        self.backend.detect_language(text).await.map_err(|err| {
            tracing::warn!("language detection failed: {err}");
            ServiceError::new(
                ErrorKind::UnknownError,
                format!("Language detection failed: {err}"),
            )
        })
    }

    /// Canary translation. A `false` is only a hint: transient rate limiting
    /// fails the probe just as well as an outage does.
    pub async fn check_availability(&self) -> bool {
        match self
            .backend
            .translate(CANARY_TEXT, CANARY_FROM.to_string(), CANARY_TO.to_string())
            .await
        {
            Ok(_) => true,
            Err(err) => {
                tracing::info!("translation service availability check failed: {err}");
                false
            }
        }
    }
}
