use serde::{Deserialize, Serialize};

use crate::models::common::{Followers, Image, PublicUser};
use crate::models::track::Track;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PublicUser,
    pub public: Option<bool>,
    pub collaborative: bool,
    pub description: Option<String>,
    pub followers: Option<Followers>,
    pub images: Vec<Image>,
    pub snapshot_id: String,
    pub tracks: TracksReference,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracksReference {
    pub href: String,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub added_at: String,
    /// `None` for tracks that are no longer available.
    pub track: Option<Track>,
}

/// Fields compared to decide whether a playlist changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalPlaylist {
    pub name: String,
    pub description: Option<String>,
    pub snapshot_id: String,
}

/// Result of a playlist change check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistVersion {
    pub id: String,
    /// Validator to present on the next check.
    pub etag: Option<String>,
    /// `None` when the playlist is unchanged.
    pub updates: Option<MinimalPlaylist>,
}

impl PlaylistVersion {
    pub fn has_changed(&self) -> bool {
        self.updates.is_some()
    }
}
