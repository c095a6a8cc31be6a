use std::fmt;

use base64::Engine;
use http::{header, HeaderValue};
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::sources::IssuedToken;
use crate::transport::{HttpRequest, HttpTransport};

const GRANT_BODY: &str = "grant_type=client_credentials";

/// Client id + secret pair for the client-credentials grant.
#[derive(Clone)]
pub struct ClientCredentials {
    id: String,
    secret: String,
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    expires_in: u64,
    #[serde(default)]
    scope: Option<String>,
}

impl ClientCredentials {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `Basic base64(id:secret)` header value.
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.id, self.secret);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw.as_bytes())
        )
    }

    pub async fn exchange<T: HttpTransport>(
        &self,
        transport: &T,
        token_url: &Url,
    ) -> Result<IssuedToken, AuthError> {
        let authorization = HeaderValue::from_str(&self.basic_authorization())
            .map_err(|e| AuthError::MalformedResponse(format!("unusable client credentials: {}", e)))?;

        let mut request = HttpRequest::post_form(token_url.clone(), GRANT_BODY);
        request.headers.insert(header::AUTHORIZATION, authorization);

        debug!(url = %token_url, client_id = %self.id, "requesting client-credentials token");
        let response = transport
            .send(request)
            .await
            .map_err(AuthError::TransportFailure)?;

        let status = response.status;
        let body = response.body.unwrap_or_default();
        let parsed: AccessTokenResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(status = %status, "token endpoint body is not a token response");
            AuthError::MalformedResponse(format!("status {}: {}", status.as_u16(), e))
        })?;

        debug!(
            expires_in = parsed.expires_in,
            token_type = parsed.token_type.as_deref().unwrap_or(""),
            scope = parsed.scope.as_deref().unwrap_or(""),
            "token endpoint answered"
        );
        Ok(IssuedToken::new(parsed.access_token, Some(parsed.expires_in)))
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
