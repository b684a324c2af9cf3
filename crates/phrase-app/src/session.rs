use phrase_core::export::SavedTranslation;
use phrase_core::language::{self, AUTO_DETECT_NAME, Listing};
use phrase_core::types::TranslationRequest;
use phrase_config::ui::UiConfig;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("A translation is already in progress")]
    Busy,

    #[error("Cannot swap while the source language is Auto Detect")]
    SwapFromAuto,

    #[error("Unknown language '{query}'{}", suggestion_suffix(.suggestions))]
    UnknownLanguage {
        query: String,
        suggestions: Vec<&'static str>,
    },

    #[error("No translation to save")]
    NothingToSave,
}

fn suggestion_suffix(suggestions: &[&'static str]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

const MAX_SUGGESTIONS: usize = 5;

/// What one front end currently shows: selected languages, input, output,
/// and the request it is waiting on.
///
/// At most one translation is in flight per session. Completions carrying
/// any other id are stale and get dropped.
#[derive(Debug, Clone)]
pub struct Session {
    source_language: &'static str,
    target_language: &'static str,
    input: String,
    output: Option<String>,
    in_flight: Option<Uuid>,
}

impl Session {
    pub fn new(config: &UiConfig) -> Self {
        let source_language = language::resolve(&config.source_language, Listing::Source)
            .map(|l| l.name)
            .unwrap_or_else(|| {
                tracing::warn!(
                    "unknown default source language '{}', using {AUTO_DETECT_NAME}",
                    config.source_language
                );
                AUTO_DETECT_NAME
            });

        let target_language = language::resolve(&config.target_language, Listing::Target)
            .map(|l| l.name)
            .unwrap_or_else(|| {
                tracing::warn!(
                    "unknown default target language '{}', using {}",
                    config.target_language,
                    language::FALLBACK_NAME
                );
                language::FALLBACK_NAME
            });

        Self {
            source_language,
            target_language,
            input: String::new(),
            output: None,
            in_flight: None,
        }
    }

    pub fn source_language(&self) -> &'static str {
        self.source_language
    }

    pub fn target_language(&self) -> &'static str {
        self.target_language
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    #[cfg(test)]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn is_translating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn set_source_language(&mut self, query: &str) -> Result<&'static str, SessionError> {
        self.source_language = pick(query, Listing::Source)?;
        Ok(self.source_language)
    }

    pub fn set_target_language(&mut self, query: &str) -> Result<&'static str, SessionError> {
        self.target_language = pick(query, Listing::Target)?;
        Ok(self.target_language)
    }

    /// Swap languages; a shown translation becomes the new input.
    /// Returns the replaced input, if any.
    pub fn swap(&mut self) -> Result<Option<String>, SessionError> {
        if self.source_language == AUTO_DETECT_NAME {
            return Err(SessionError::SwapFromAuto);
        }

        std::mem::swap(&mut self.source_language, &mut self.target_language);

        Ok(self.output.take().map(|output| {
            self.input = output.clone();
            output
        }))
    }

    /// Start translating the current input
    pub fn begin(&mut self) -> Result<TranslationRequest, SessionError> {
        if self.in_flight.is_some() {
            return Err(SessionError::Busy);
        }

        let request = TranslationRequest::new(
            self.input.trim(),
            language::code_for_name(self.source_language),
            language::code_for_name(self.target_language),
        );
        self.in_flight = Some(request.id);
        Ok(request)
    }

    /// Accept the completion for `id`. Returns false for stale completions.
    pub fn finish(&mut self, id: Uuid, output: Option<String>) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }

        self.in_flight = None;
        if output.is_some() {
            self.output = output;
        }
        true
    }

    pub fn saved_translation(&self) -> Result<SavedTranslation, SessionError> {
        let output = self.output.as_deref().ok_or(SessionError::NothingToSave)?;
        Ok(SavedTranslation::new(
            self.source_language,
            self.target_language,
            self.input.as_str(),
            output,
        ))
    }
}

fn pick(query: &str, listing: Listing) -> Result<&'static str, SessionError> {
    language::resolve(query, listing)
        .map(|l| l.name)
        .ok_or_else(|| SessionError::UnknownLanguage {
            query: query.trim().to_string(),
            suggestions: language::search_names(query, listing)
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&UiConfig::default())
    }

    #[test]
    fn test_defaults_from_config() {
        let session = session();
        assert_eq!(session.source_language(), "Auto Detect");
        assert_eq!(session.target_language(), "Spanish");

        let odd = Session::new(&UiConfig {
            source_language: "Elvish".into(),
            target_language: "Auto Detect".into(),
        });
        assert_eq!(odd.source_language(), "Auto Detect");
        assert_eq!(odd.target_language(), "English");
    }

    #[test]
    fn test_begin_uses_codes() {
        let mut session = session();
        session.set_source_language("french").unwrap();
        session.set_input("  bonjour \n");

        let request = session.begin().unwrap();
        assert_eq!(request.text, "bonjour");
        assert_eq!(request.source, "fr");
        assert_eq!(request.target, "es");
        assert!(session.is_translating());
    }

    #[test]
    fn test_single_flight() {
        let mut session = session();
        session.set_input("hello");

        let first = session.begin().unwrap();
        assert_eq!(session.begin().unwrap_err(), SessionError::Busy);

        assert!(!session.finish(Uuid::new_v4(), Some("stale".into())));
        assert!(session.is_translating());

        assert!(session.finish(first.id, Some("hola".into())));
        assert_eq!(session.output(), Some("hola"));
        assert!(!session.is_translating());

        assert!(session.begin().is_ok());
    }

    #[test]
    fn test_failed_finish_keeps_previous_output() {
        let mut session = session();
        session.set_input("hello");

        let first = session.begin().unwrap();
        session.finish(first.id, Some("hola".into()));

        let second = session.begin().unwrap();
        assert!(session.finish(second.id, None));
        assert_eq!(session.output(), Some("hola"));
    }

    #[test]
    fn test_swap_refused_from_auto() {
        let mut session = session();
        assert_eq!(session.swap().unwrap_err(), SessionError::SwapFromAuto);
        assert_eq!(session.source_language(), "Auto Detect");
    }

    #[test]
    fn test_swap_moves_output_into_input() {
        let mut session = session();
        session.set_source_language("English").unwrap();
        session.set_input("hello");
        let request = session.begin().unwrap();
        session.finish(request.id, Some("hola".into()));

        let replaced = session.swap().unwrap();
        assert_eq!(replaced.as_deref(), Some("hola"));
        assert_eq!(session.source_language(), "Spanish");
        assert_eq!(session.target_language(), "English");
        assert_eq!(session.input(), "hola");
        assert_eq!(session.output(), None);

        // Nothing shown, nothing moved
        assert_eq!(session.swap().unwrap(), None);
    }

    #[test]
    fn test_unknown_language_suggests() {
        let mut session = session();
        let err = session.set_target_language("chin").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown language 'chin' (did you mean: Chinese (Simplified), Chinese (Traditional)?)"
        );
        assert!(session.set_target_language("auto detect").is_err());
        assert_eq!(session.target_language(), "Spanish");
    }

    #[test]
    fn test_saved_translation() {
        let mut session = session();
        assert_eq!(
            session.saved_translation().unwrap_err(),
            SessionError::NothingToSave
        );

        session.set_input("hello");
        let request = session.begin().unwrap();
        session.finish(request.id, Some("hola".into()));

        let saved = session.saved_translation().unwrap();
        assert_eq!(saved.source_language, "Auto Detect");
        assert_eq!(saved.target_language, "Spanish");
        assert_eq!(saved.original, "hello");
        assert_eq!(saved.translation, "hola");
    }
}
