//! # Spotify Catalog Library
//!
//! Client for the Spotify Web API catalog: authenticates with cached
//! client-credentials tokens, issues GET requests through a pluggable
//! transport and detects playlist changes with etags.
//!
//! Modules:
//! - `config`: YAML configuration, secret resolution and validation
//! - `cache`: expiring values and the single-flight token manager
//! - `sources`: credential sources (client credentials, delegated)
//! - `transport`: HTTP transport seam and its reqwest implementation
//! - `client`: request pipeline, conditional fetch and catalog endpoints
//! - `models`: catalog resources as returned by the API

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod sources;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::client::{ClientBuilder, ConditionalFetch, Market, QueryParam, SpotifyClient};
pub use crate::config::ClientConfig;
pub use crate::error::{AuthError, DecodeError, Error, RequestError, Result, TransportError};
pub use crate::helpers::time::{Clock, ManualClock, SystemClock};
pub use crate::sources::{CredentialSource, IssuedToken};
pub use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
