use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// [`HttpTransport`] over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::new)?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(TransportError::new)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(TransportError::new)?;
        debug!(status = %status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body: Some(body.to_vec()),
        })
    }
}
