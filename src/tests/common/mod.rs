// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use http::{Method, StatusCode};

use crate::client::SpotifyClient;
use crate::error::TransportError;
use crate::helpers::time::ManualClock;
use crate::sources::CredentialSource;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

type Handler = dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync;

/// Scripted transport: records every request and answers through `handler`.
pub struct StubTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<HttpRequest>>,
    delay: Option<Duration>,
}

impl StubTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Token endpoint answers `tok1`/3600, every GET goes to `api`.
    pub fn api<F>(api: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        Self::new(move |req| {
            if req.method == Method::POST {
                Ok(token_response("tok1", 3600))
            } else {
                api(req)
            }
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn token_calls(&self) -> usize {
        self.requests().iter().filter(|r| r.method == Method::POST).count()
    }

    pub fn api_requests(&self) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::GET)
            .collect()
    }
}

impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.handler)(&request)
    }
}

pub fn token_response(token: &str, expires_in: u64) -> HttpResponse {
    HttpResponse::json(
        StatusCode::OK,
        &json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": expires_in
        }),
    )
}

/// Client with id "a" / secret "b" over a stub transport and manual clock.
pub fn stub_client(transport: StubTransport, clock: Arc<ManualClock>) -> SpotifyClient<StubTransport> {
    SpotifyClient::builder(CredentialSource::client_credentials("a", "b"))
        .clock(clock)
        .build_with_transport(transport)
}

pub fn playlist_fields(name: &str, snapshot: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": "weekly picks",
        "snapshot_id": snapshot
    })
}

pub fn simple_artist(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("artist {}", id),
        "uri": format!("spotify:artist:{}", id)
    })
}

pub fn simple_track(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("track {}", id),
        "duration_ms": 215000,
        "track_number": 1,
        "disc_number": 1,
        "explicit": false,
        "artists": [simple_artist("ar1")],
        "uri": format!("spotify:track:{}", id)
    })
}
