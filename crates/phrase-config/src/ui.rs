use std::env;

use serde::{Deserialize, Serialize};

fn default_source_language() -> String {
    "Auto Detect".to_string()
}

fn default_target_language() -> String {
    "Spanish".to_string()
}

/// Languages preselected when a session starts, by display name
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            source_language: env::var("DEFAULT_SOURCE_LANGUAGE")
                .unwrap_or_else(|_| default_source_language()),
            target_language: env::var("DEFAULT_TARGET_LANGUAGE")
                .unwrap_or_else(|_| default_target_language()),
        }
    }
}
