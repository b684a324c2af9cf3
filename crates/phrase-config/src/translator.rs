use std::env;

use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "google".to_string()
}

fn default_api_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_max_chars() -> usize {
    5000
}

fn default_user_agent() -> String {
    concat!("phrase-bridge/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_check_on_startup() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Applied by the HTTP client; the service itself never times out a request
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Run the canary request in the background at startup
    #[serde(default = "default_check_on_startup")]
    pub check_on_startup: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
            max_chars: default_max_chars(),
            user_agent: default_user_agent(),
            check_on_startup: default_check_on_startup(),
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let provider = env::var("TRANSLATOR_PROVIDER").unwrap_or(defaults.provider);
        let api_url = env::var("TRANSLATOR_API_URL").unwrap_or(defaults.api_url);

        let timeout_seconds = env::var("TRANSLATOR_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        let max_chars = env::var("TRANSLATOR_MAX_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_chars);

        let check_on_startup = env::var("TRANSLATOR_CHECK_ON_STARTUP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.check_on_startup);

        Self {
            provider,
            api_url,
            timeout_seconds,
            max_chars,
            user_agent: defaults.user_agent,
            check_on_startup,
        }
    }
}
