//! Shared constants and invariants

pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Lifetime assumed when an issuer does not say how long a token lives.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

pub const MARKET_QUERY_KEY: &str = "market";

// Endpoint bounds
pub const MAX_SEARCH_LIMIT: u32 = 50;
pub const MAX_ARTIST_ALBUMS_LIMIT: u32 = 50;
pub const MAX_PLAYLIST_TRACKS_LIMIT: u32 = 100;
pub const MAX_TRACK_IDS: usize = 50;

pub const PLAYLIST_VERSION_FIELDS: &str = "name,description,snapshot_id";
