use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub display_name: Option<String>,
    pub images: Option<Vec<Image>>,
    pub followers: Option<Followers>,
    pub uri: String,
}

/// One page of an offset-paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
    pub total: u32,
}

impl<T> Paging<T> {
    /// Offset of the following page, if there is one.
    pub fn next_offset(&self) -> Option<u32> {
        let next = self.offset.saturating_add(self.items.len() as u32);
        (next < self.total && !self.items.is_empty()).then_some(next)
    }
}
