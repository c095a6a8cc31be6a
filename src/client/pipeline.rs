use http::{header, HeaderMap, HeaderValue, StatusCode};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::query::{build_url, QueryParam};
use crate::client::SpotifyClient;
use crate::error::{decode, RequestError, Result};
use crate::transport::{HttpRequest, HttpTransport};

/// Status line and headers of a dispatched request.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseMeta {
    /// Resource version tag; header lookup is case-insensitive.
    pub fn etag(&self) -> Option<&str> {
        self.headers
            .get(header::ETAG)
            .and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Clone)]
pub struct Dispatched {
    pub body: Vec<u8>,
    pub meta: ResponseMeta,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl<T: HttpTransport> SpotifyClient<T> {
    /// URL a request for `path` + `query` is sent to, market included.
    pub fn request_url(&self, path: &str, query: &[QueryParam]) -> Url {
        build_url(&self.api_base_url, path, query, self.market.as_ref())
    }

    /// Authenticated GET through the transport.
    ///
    /// Caller headers are applied first; an `Authorization` among them is
    /// dropped so the bearer token always wins.
    pub async fn dispatch(
        &self,
        path: &str,
        query: &[QueryParam],
        extra_headers: &HeaderMap,
    ) -> Result<Dispatched> {
        let token = self.tokens.get_token().await?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| RequestError::InvalidHeader(format!("access token: {}", e)))?;

        let mut request = HttpRequest::get(self.request_url(path, query));
        for (name, value) in extra_headers {
            if name == header::AUTHORIZATION {
                warn!(path = %path, "ignoring caller-supplied Authorization header");
                continue;
            }
            request.headers.append(name.clone(), value.clone());
        }
        request.headers.insert(header::AUTHORIZATION, bearer);

        debug!(url = %request.url, "dispatching api request");
        let response = self.transport.send(request).await?;
        let body = response.body.ok_or(RequestError::NoData)?;

        Ok(Dispatched {
            body,
            meta: ResponseMeta {
                status: response.status,
                headers: response.headers,
            },
        })
    }

    /// GET decoded into `D`; non-success statuses become [`RequestError::Status`].
    pub async fn get_decodable<D: DeserializeOwned>(
        &self,
        path: &str,
        query: &[QueryParam],
    ) -> Result<D> {
        let dispatched = self.dispatch(path, query, &HeaderMap::new()).await?;
        ensure_success(&dispatched)?;
        Ok(decode(&dispatched.body)?)
    }
}

pub(crate) fn ensure_success(dispatched: &Dispatched) -> std::result::Result<(), RequestError> {
    let status = dispatched.meta.status;
    if status.is_success() {
        return Ok(());
    }
    let message = serde_json::from_slice::<ApiErrorBody>(&dispatched.body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(&dispatched.body).into_owned());
    warn!(status = %status, message = %message, "api request failed");
    Err(RequestError::Status {
        status: status.as_u16(),
        message,
    })
}
