//! Error types for the catalog client.

use std::sync::Arc;

use thiserror::Error;

/// Network-level failure reported by an [`HttpTransport`](crate::transport::HttpTransport).
///
/// The underlying cause is kept opaque and shared so the error can be handed
/// to every waiter of a single token issuance.
#[derive(Error, Debug, Clone)]
#[error("transport failure: {inner}")]
pub struct TransportError {
    #[source]
    inner: Arc<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self { inner: Arc::new(err) }
    }

    /// Build from a plain message, for transports without a typed cause.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        let boxed: Box<dyn std::error::Error + Send + Sync> = message.into();
        Self { inner: Arc::from(boxed) }
    }
}

/// Failures while obtaining an access token.
#[derive(Error, Debug, Clone)]
pub enum AuthError {
    /// Token endpoint could not be reached
    #[error("token endpoint unreachable: {0}")]
    TransportFailure(#[source] TransportError),

    /// Token endpoint answered with a body that is not a token response
    #[error("token endpoint returned a malformed response: {0}")]
    MalformedResponse(String),

    /// Caller-supplied issuer reported an error
    #[error("delegated token issuance failed: {0:#}")]
    DelegateFailure(Arc<anyhow::Error>),
}

/// Failures of the request pipeline itself.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Transport reported success without a body or an error
    #[error("transport returned neither data nor an error")]
    NoData,

    /// API answered with a non-success status
    #[error("api responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// A header value could not be encoded
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

/// Response body did not match the expected shape.
#[derive(Error, Debug)]
#[error("failed to decode {type_name}: {source}")]
pub struct DecodeError {
    pub type_name: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Any failure surfaced by [`SpotifyClient`](crate::client::SpotifyClient).
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Decode a JSON body into `T`, tagging failures with the target type.
pub fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> std::result::Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|source| DecodeError {
        type_name: std::any::type_name::<T>(),
        source,
    })
}
