use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::album::Album;
use crate::models::artist::Artist;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub popularity: Option<u32>,
    pub duration_ms: u64,
    pub track_number: u32,
    pub disc_number: u32,
    pub explicit: bool,
    pub artists: Vec<Artist>,
    /// Absent when the track is embedded in its own album.
    pub album: Option<Box<Album>>,
    pub external_ids: Option<HashMap<String, String>>,
    pub uri: String,
}
