use http::{header, HeaderMap, HeaderValue, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::pipeline::ensure_success;
use crate::client::query::QueryParam;
use crate::client::SpotifyClient;
use crate::error::{decode, RequestError, Result};
use crate::transport::HttpTransport;

/// Outcome of a fetch guarded by a resource validator (etag).
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionalFetch<D> {
    Unchanged { validator: Option<String> },
    Changed { data: D, validator: Option<String> },
}

impl<D> ConditionalFetch<D> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ConditionalFetch::Unchanged { .. })
    }

    /// Validator to present on the next fetch.
    pub fn validator(&self) -> Option<&str> {
        match self {
            ConditionalFetch::Unchanged { validator } | ConditionalFetch::Changed { validator, .. } => {
                validator.as_deref()
            }
        }
    }

    pub fn into_parts(self) -> (Option<D>, Option<String>) {
        match self {
            ConditionalFetch::Unchanged { validator } => (None, validator),
            ConditionalFetch::Changed { data, validator } => (Some(data), validator),
        }
    }
}

/// 304, or a 200 echoing the validator we sent while replay protection is on.
///
/// Validators compare as options: no validator sent and none received is a
/// match too.
pub fn is_not_modified(
    status: StatusCode,
    sent: Option<&str>,
    received: Option<&str>,
    prevent_stale_replay: bool,
) -> bool {
    if status == StatusCode::NOT_MODIFIED {
        return true;
    }
    prevent_stale_replay && status == StatusCode::OK && sent == received
}

impl<T: HttpTransport> SpotifyClient<T> {
    pub async fn fetch_conditional<D: DeserializeOwned>(
        &self,
        path: &str,
        query: &[QueryParam],
        validator: Option<&str>,
        prevent_stale_replay: bool,
    ) -> Result<ConditionalFetch<D>> {
        let mut headers = HeaderMap::new();
        if let Some(validator) = validator {
            let value = HeaderValue::from_str(validator)
                .map_err(|e| RequestError::InvalidHeader(format!("validator: {}", e)))?;
            headers.insert(header::IF_NONE_MATCH, value);
        }

        let dispatched = self.dispatch(path, query, &headers).await?;
        let received = dispatched.meta.etag().map(str::to_owned);

        if is_not_modified(
            dispatched.meta.status,
            validator,
            received.as_deref(),
            prevent_stale_replay,
        ) {
            debug!(path = %path, status = %dispatched.meta.status, "resource not modified");
            return Ok(ConditionalFetch::Unchanged {
                validator: received,
            });
        }

        ensure_success(&dispatched)?;
        let data = decode(&dispatched.body)?;
        debug!(path = %path, validator = ?received, "resource changed");
        Ok(ConditionalFetch::Changed {
            data,
            validator: received,
        })
    }
}
