//! Credential sources
//!
//! Defines the ways an access token can be obtained and dispatches issuance
//! to the active variant.

use std::fmt;

use reqwest::Url;

use crate::error::AuthError;
use crate::transport::HttpTransport;

pub mod client_credentials;
pub mod delegated;

pub use client_credentials::ClientCredentials;
pub use delegated::DelegatedIssuer;

/// Token handed out by a credential source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    /// Lifetime in seconds; `None` falls back to the default TTL.
    pub expires_in: Option<u64>,
}

impl IssuedToken {
    pub fn new(access_token: impl Into<String>, expires_in: Option<u64>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_in,
        }
    }
}

#[derive(Clone)]
pub enum CredentialSource {
    ClientCredentials(ClientCredentials),
    Delegated(DelegatedIssuer),
}

impl CredentialSource {
    pub fn client_credentials(id: impl Into<String>, secret: impl Into<String>) -> Self {
        CredentialSource::ClientCredentials(ClientCredentials::new(id, secret))
    }

    /// Defer issuance to caller logic, e.g. a backend that holds the secret.
    pub fn delegated<F, Fut>(issue: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = anyhow::Result<IssuedToken>> + Send + 'static,
    {
        CredentialSource::Delegated(DelegatedIssuer::new(issue))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CredentialSource::ClientCredentials(_) => "client_credentials",
            CredentialSource::Delegated(_) => "delegated",
        }
    }

    pub async fn issue<T: HttpTransport>(
        &self,
        transport: &T,
        token_url: &Url,
    ) -> Result<IssuedToken, AuthError> {
        match self {
            CredentialSource::ClientCredentials(c) => c.exchange(transport, token_url).await,
            CredentialSource::Delegated(d) => d.issue().await,
        }
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::ClientCredentials(c) => f.debug_tuple("ClientCredentials").field(c).finish(),
            CredentialSource::Delegated(_) => f.write_str("Delegated"),
        }
    }
}
