use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::artist::Artist;
use crate::models::common::{Image, Paging};
use crate::models::track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
}

impl AlbumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumType::Album => "album",
            AlbumType::Single => "single",
            AlbumType::Compilation => "compilation",
        }
    }
}

impl fmt::Display for AlbumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub album_type: AlbumType,
    pub artists: Vec<Artist>,
    pub images: Vec<Image>,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub uri: String,

    // full object only
    pub external_ids: Option<HashMap<String, String>>,
    pub genres: Option<Vec<String>>,
    pub label: Option<String>,
    pub popularity: Option<u32>,
    pub tracks: Option<Paging<Track>>,
}

impl Album {
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }
}
