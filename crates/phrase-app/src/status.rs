use std::sync::Arc;
use std::time::SystemTime;

use phrase_core::types::ErrorKind;
use tokio::sync::RwLock;

/// Translation counters and the last message shown to the user
#[derive(Clone, Debug, Default)]
pub struct TranslationStatus {
    pub translating: bool,
    pub last_completed: Option<SystemTime>,
    pub completed_count: u64,
    pub error_count: u64,
    pub last_error: Option<ErrorKind>,
    /// Result of the most recent availability probe
    pub available: Option<bool>,
    pub current_message: String,
}

/// Application status
pub struct AppStatus {
    pub translation: Arc<RwLock<TranslationStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            translation: Arc::new(RwLock::new(TranslationStatus {
                current_message: "Ready to translate".to_string(),
                ..TranslationStatus::default()
            })),
        }
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
