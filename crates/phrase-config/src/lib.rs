use std::env;

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod translator;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub ui: UiConfig,

    /// Capacity of each channel between the front end and the event loop
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            ui: UiConfig::default(),
            channel_capacity: default_channel_capacity(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        let channel_capacity = env::var("CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_channel_capacity);

        let json_logs = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Config {
            translator: TranslatorConfig::new(),
            ui: UiConfig::new(),
            channel_capacity,
            json_logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "translator": { "timeout_seconds": 3 } }"#).unwrap();

        assert_eq!(config.translator.timeout_seconds, 3);
        assert_eq!(config.translator.max_chars, 5000);
        assert_eq!(config.ui.source_language, "Auto Detect");
        assert_eq!(config.ui.target_language, "Spanish");
        assert_eq!(config.channel_capacity, 64);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.translator.api_url, TranslatorConfig::default().api_url);
        assert!(config.translator.check_on_startup);
    }
}
