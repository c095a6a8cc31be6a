use std::{env, fs};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use serde::Deserialize;

use crate::client::{Market, SpotifyClient};
use crate::config::settings::SettingsConfig;
use crate::sources::CredentialSource;
use crate::transport::ReqwestTransport;

/// ================================
/// Full client configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    pub credentials: CredentialsConfig,
}

/// ================================
/// Credentials
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct CredentialsConfig {
    pub client_id: SecretValue,
    pub client_secret: SecretValue,
}

/// Where a credential value comes from
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SecretValue {
    Literal {
        value: String,
    },
    FromEnv {
        from_env: String,
    },
    FromFile {
        path: String,
    },
}

impl SecretValue {
    pub fn resolve(&self) -> Result<String> {
        match self {
            SecretValue::Literal { value } => Ok(value.to_owned()),
            SecretValue::FromEnv { from_env } => env::var(from_env)
                .map_err(|err| anyhow!("env var '{}': {}", from_env, err)),
            SecretValue::FromFile { path } => fs::read_to_string(path)
                .map(|res| res.trim().to_string())
                .with_context(|| format!("reading secret file '{}'", path)),
        }
    }
}

impl ClientConfig {
    pub fn credential_source(&self) -> Result<CredentialSource> {
        let id = self.credentials.client_id.resolve().context("client_id")?;
        let secret = self.credentials.client_secret.resolve().context("client_secret")?;
        Ok(CredentialSource::client_credentials(id, secret))
    }

    pub fn market(&self) -> Result<Option<Market>> {
        self.settings
            .market
            .as_deref()
            .map(|m| m.parse::<Market>().map_err(|e| anyhow!(e)))
            .transpose()
    }

    /// Resolve secrets and build a client over the reqwest transport.
    pub fn into_client(&self) -> Result<SpotifyClient<ReqwestTransport>> {
        let api_base_url = Url::parse(&self.settings.api_base_url)
            .with_context(|| format!("api_base_url '{}'", self.settings.api_base_url))?;
        let token_url = Url::parse(&self.settings.token_url)
            .with_context(|| format!("token_url '{}'", self.settings.token_url))?;

        let mut builder = SpotifyClient::builder(self.credential_source()?)
            .api_base_url(api_base_url)
            .token_url(token_url);
        if let Some(market) = self.market()? {
            builder = builder.market(market);
        }
        if let Some(timeout_ms) = self.settings.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        Ok(builder.build()?)
    }
}
