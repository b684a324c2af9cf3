use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const EXPORT_TITLE: &str = "Phrase Bridge Translation";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No translation to save")]
    NothingToSave,

    #[error("Failed to save translation: {0}")]
    Io(#[from] std::io::Error),
}

/// A translation as written to a plain-text file.
///
/// Languages are stored by display name, exactly as the user picked them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTranslation {
    pub source_language: String,
    pub target_language: String,
    pub original: String,
    pub translation: String,
}

impl SavedTranslation {
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        original: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            original: original.into(),
            translation: translation.into(),
        }
    }

    /// File body. Existing saved files depend on this exact layout.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(EXPORT_TITLE);
        out.push('\n');
        out.push_str(&"=".repeat(31));
        out.push_str("\n\n");
        out.push_str(&format!("Source Language: {}\n", self.source_language));
        out.push_str(&format!("Target Language: {}\n\n", self.target_language));
        out.push_str(&format!("Original Text:\n{}\n\n", self.original.trim()));
        out.push_str(&format!("Translation:\n{}\n", self.translation.trim()));
        out
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        if self.translation.trim().is_empty() {
            return Err(ExportError::NothingToSave);
        }
        fs::write(path, self.render())?;
        Ok(())
    }
}
