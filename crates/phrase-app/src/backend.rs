use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use phrase_config::translator::TranslatorConfig;
use phrase_provider_google::GoogleTranslator;
use phrase_translator::{TranslationService, Translator};

/// Build the configured provider and wrap it in the request service
pub fn build_service(config: &TranslatorConfig) -> anyhow::Result<TranslationService> {
    let backend: Arc<dyn Translator> = match config.provider.as_str() {
        "google" => Arc::new(GoogleTranslator::with_timeout(
            config.api_url.clone(),
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )?),
        other => bail!("Unknown translation provider '{other}'"),
    };

    tracing::debug!(
        "using {} at {} (timeout {}s)",
        backend.metadata().name,
        config.api_url,
        config.timeout_seconds
    );

    Ok(TranslationService::new(backend).with_max_chars(config.max_chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_google() {
        let service = build_service(&TranslatorConfig::default()).unwrap();
        assert_eq!(service.provider().name, "Google Translate");
        assert_eq!(service.max_chars(), 5000);
    }

    #[test]
    fn test_unknown_provider() {
        let config = TranslatorConfig {
            provider: "babelfish".to_string(),
            ..TranslatorConfig::default()
        };
        let err = build_service(&config).err().unwrap();
        assert!(err.to_string().contains("babelfish"));
    }
}
