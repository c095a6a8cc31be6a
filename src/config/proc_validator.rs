//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Checks URLs, market code, timeout and logging invariants

use reqwest::Url;
use tracing::{error, info};

use crate::client::Market;
use crate::config::settings::SettingsConfig;
use crate::config::types::{ClientConfig, SecretValue};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_client_config(cfg: &ClientConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);
    validate_secret("credentials.client_id", &cfg.credentials.client_id, &mut errors);
    validate_secret("credentials.client_secret", &cfg.credentials.client_secret, &mut errors);

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config: {}", e);
        }
        Err(errors)
    }
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    validate_url("settings.api_base_url", &settings.api_base_url, errors);
    validate_url("settings.token_url", &settings.token_url, errors);

    if let Some(market) = &settings.market {
        if let Err(e) = market.parse::<Market>() {
            errors.push(format!("settings.market: {}", e));
        }
    }

    if settings.timeout_ms == Some(0) {
        errors.push("settings.timeout_ms must be > 0".to_string());
    }

    if let Some(logging) = &settings.logging {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' is not one of {:?}",
                logging.level, LOG_LEVELS
            ));
        }
    }
}

fn validate_url(field: &str, raw: &str, errors: &mut Vec<String>) {
    match Url::parse(raw) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(format!("{}: unsupported scheme '{}'", field, url.scheme())),
        Err(e) => errors.push(format!("{}: '{}' is not a valid url ({})", field, raw, e)),
    }
}

fn validate_secret(field: &str, value: &SecretValue, errors: &mut Vec<String>) {
    let empty = match value {
        SecretValue::Literal { value } => value.trim().is_empty(),
        SecretValue::FromEnv { from_env } => from_env.trim().is_empty(),
        SecretValue::FromFile { path } => path.trim().is_empty(),
    };
    if empty {
        errors.push(format!("{} must not be empty", field));
    }
}
