use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::album::Album;
use crate::models::artist::Artist;
use crate::models::common::Paging;
use crate::models::playlist::Playlist;
use crate::models::track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
        }
    }

    /// Comma-separated value of the `type` query parameter.
    pub fn join(types: &[SearchType]) -> String {
        types.iter().map(SearchType::as_str).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "album" => Ok(SearchType::Album),
            "artist" => Ok(SearchType::Artist),
            "playlist" => Ok(SearchType::Playlist),
            "track" => Ok(SearchType::Track),
            other => Err(format!("unknown search type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub tracks: Option<Paging<Track>>,
    pub albums: Option<Paging<Album>>,
    pub artists: Option<Paging<Artist>>,
    pub playlists: Option<Paging<Playlist>>,
}
