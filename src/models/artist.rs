use serde::{Deserialize, Serialize};

use crate::models::common::Image;

/// Artist object; the simplified form embedded in tracks and albums lacks
/// popularity, genres and images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub popularity: Option<u32>,
    pub genres: Option<Vec<String>>,
    pub images: Option<Vec<Image>>,
    pub uri: String,
}
