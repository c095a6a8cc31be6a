use serde::Deserialize;

use crate::utils::constants::{SPOTIFY_API_BASE_URL, SPOTIFY_TOKEN_URL};

/// ================================
/// Client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// two-letter market appended to every request
    pub market: Option<String>,
    pub timeout_ms: Option<u64>,
    pub logging: Option<LoggingConfig>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            token_url: default_token_url(),
            market: None,
            timeout_ms: None,
            logging: None,
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new (level: String, format: LogFormat) -> Self {
        Self { level: level, format: format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

fn default_api_base_url() -> String {
    SPOTIFY_API_BASE_URL.to_string()
}

fn default_token_url() -> String {
    SPOTIFY_TOKEN_URL.to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::from_env()
}
