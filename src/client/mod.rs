//! Spotify Web API client.
//!
//! [`SpotifyClient`] glues the token manager to the request pipeline and
//! exposes the catalog endpoints on top.
//!
//! ```ignore
//! use spotify_catalog::{CredentialSource, SpotifyClient};
//!
//! let client = SpotifyClient::builder(CredentialSource::client_credentials("id", "secret"))
//!     .market("de".parse()?)
//!     .build()?;
//!
//! let first = client.has_playlist_changed("37i9dQZF1DXcBWIGoYBM5M", None).await?;
//! let again = client.has_playlist_changed(&first.id, first.etag.as_deref()).await?;
//! assert!(again.updates.is_none());
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Url;

use crate::cache::token_manager::TokenManager;
use crate::error::{AuthError, TransportError};
use crate::helpers::time::{Clock, SystemClock};
use crate::sources::CredentialSource;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::utils::constants::{DEFAULT_HTTP_TIMEOUT_MS, SPOTIFY_API_BASE_URL, SPOTIFY_TOKEN_URL};

pub mod conditional;
pub mod endpoints;
pub mod pipeline;
pub mod query;

pub use conditional::ConditionalFetch;
pub use pipeline::{Dispatched, ResponseMeta};
pub use query::{clamp_limit, Market, QueryParam};

pub struct SpotifyClient<T: HttpTransport = ReqwestTransport> {
    transport: Arc<T>,
    tokens: TokenManager<T>,
    api_base_url: Url,
    market: Option<Market>,
}

impl SpotifyClient<ReqwestTransport> {
    pub fn builder(credentials: CredentialSource) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }
}

impl<T: HttpTransport> SpotifyClient<T> {
    /// Market appended to every request, `None` to stop sending one.
    pub fn set_market(&mut self, market: Option<Market>) {
        self.market = market;
    }

    pub fn market(&self) -> Option<&Market> {
        self.market.as_ref()
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Current access token, issuing a new one when the cached one expired.
    pub async fn access_token(&self) -> Result<String, AuthError> {
        self.tokens.get_token().await
    }

    pub fn token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.tokens.expires_at()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

pub struct ClientBuilder {
    credentials: CredentialSource,
    api_base_url: Url,
    token_url: Url,
    market: Option<Market>,
    clock: Arc<dyn Clock>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new(credentials: CredentialSource) -> Self {
        Self {
            credentials,
            api_base_url: default_url(SPOTIFY_API_BASE_URL),
            token_url: default_url(SPOTIFY_TOKEN_URL),
            market: None,
            clock: Arc::new(SystemClock),
            timeout: Some(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS)),
        }
    }

    pub fn api_base_url(mut self, url: Url) -> Self {
        self.api_base_url = url;
        self
    }

    pub fn token_url(mut self, url: Url) -> Self {
        self.token_url = url;
        self
    }

    pub fn market(mut self, market: Market) -> Self {
        self.market = Some(market);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Request timeout of the default reqwest transport, 5 s unless set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<SpotifyClient<ReqwestTransport>, TransportError> {
        let transport = ReqwestTransport::new(self.timeout)?;
        Ok(self.build_with_transport(transport))
    }

    pub fn build_with_transport<T: HttpTransport>(self, transport: T) -> SpotifyClient<T> {
        let transport = Arc::new(transport);
        let tokens = TokenManager::new(
            Arc::new(self.credentials),
            transport.clone(),
            self.token_url,
            self.clock,
        );
        SpotifyClient {
            transport,
            tokens,
            api_base_url: self.api_base_url,
            market: self.market,
        }
    }
}

fn default_url(raw: &'static str) -> Url {
    Url::parse(raw).expect("built-in url constant is valid")
}
