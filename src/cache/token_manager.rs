use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use reqwest::Url;
use tracing::{debug, info, warn};

use crate::cache::expiring::ExpiringValue;
use crate::error::AuthError;
use crate::helpers::time::Clock;
use crate::sources::CredentialSource;
use crate::transport::HttpTransport;
use crate::utils::constants::DEFAULT_TOKEN_TTL_SECS;

type Issuance = Shared<BoxFuture<'static, Result<String, AuthError>>>;

/// Owns the access token slot and coalesces concurrent refreshes.
///
/// A live token is served straight from the slot. On a miss every caller
/// joins the same in-flight issuance, so the credential source is hit at most
/// once per expiry no matter how many requests race.
pub struct TokenManager<T: HttpTransport> {
    source: Arc<CredentialSource>,
    transport: Arc<T>,
    token_url: Url,
    clock: Arc<dyn Clock>,
    slot: Arc<RwLock<ExpiringValue<String>>>,
    in_flight: Mutex<Option<Issuance>>,
}

impl<T: HttpTransport> TokenManager<T> {
    pub fn new(
        source: Arc<CredentialSource>,
        transport: Arc<T>,
        token_url: Url,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            transport,
            token_url,
            clock,
            slot: Arc::new(RwLock::new(ExpiringValue::new())),
            in_flight: Mutex::new(None),
        }
    }

    pub async fn get_token(&self) -> Result<String, AuthError> {
        if let Some(token) = self.cached() {
            return Ok(token);
        }

        let issuance = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            // a flight may have landed between the first read and the lock
            if let Some(token) = self.cached() {
                return Ok(token);
            }
            match in_flight.as_ref() {
                Some(issuance) => {
                    debug!("joining in-flight token issuance");
                    issuance.clone()
                }
                None => {
                    let issuance = self.start_issuance();
                    *in_flight = Some(issuance.clone());
                    issuance
                }
            }
        };

        let result = issuance.clone().await;

        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if in_flight.as_ref().is_some_and(|current| current.ptr_eq(&issuance)) {
            *in_flight = None;
        }
        result
    }

    /// Expiry of the currently stored token, live or not.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .expires_at()
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }

    fn cached(&self) -> Option<String> {
        let now = self.clock.now();
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(now)
            .cloned()
    }

    fn start_issuance(&self) -> Issuance {
        let source = self.source.clone();
        let transport = self.transport.clone();
        let token_url = self.token_url.clone();
        let clock = self.clock.clone();
        let slot = self.slot.clone();

        async move {
            debug!(source = source.kind(), "access token missing or expired, issuing");
            let issued = source
                .issue(transport.as_ref(), &token_url)
                .await
                .inspect_err(|e| warn!(source = source.kind(), error = %e, "token issuance failed"))?;

            let ttl = ttl_from_secs(issued.expires_in.unwrap_or(DEFAULT_TOKEN_TTL_SECS));
            slot.write()
                .unwrap_or_else(PoisonError::into_inner)
                .set(issued.access_token.clone(), ttl, clock.now());

            info!(source = source.kind(), expires_in = ttl.num_seconds(), "access token issued");
            Ok::<_, AuthError>(issued.access_token)
        }
        .boxed()
        .shared()
    }
}

fn ttl_from_secs(secs: u64) -> Duration {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}
