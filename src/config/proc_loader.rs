use std::path::Path;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::proc_validator;
use crate::config::types::ClientConfig;

/// Load and validate config from YAML file
pub async fn file_to_config(path: &Path) -> Result<ClientConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading config '{}'", path.display()))?;

    let expanded = expand_env_vars(&content);
    parse_config(&expanded)
}

pub fn parse_config(content: &str) -> Result<ClientConfig> {
    let client_config: ClientConfig = serde_yaml::from_str(content)
        .inspect_err(|e| {
            error!("parse config error: {}", e);
        })?;

    debug!("validation config ...");
    proc_validator::validate_client_config(&client_config)
        .map_err(|errors| anyhow!("config is not valid:\n  - {}", errors.join("\n  - ")))?;

    Ok(client_config)
}

/// Replace `${VAR}` and `${VAR:default}` with environment values.
pub fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("static env pattern");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
