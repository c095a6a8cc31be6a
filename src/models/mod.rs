//! Response shapes of the Web API catalog endpoints.

pub mod album;
pub mod artist;
pub mod common;
pub mod playlist;
pub mod search;
pub mod track;

pub use album::{Album, AlbumType};
pub use artist::Artist;
pub use common::{Followers, Image, Paging, PublicUser};
pub use playlist::{MinimalPlaylist, Playlist, PlaylistTrack, PlaylistVersion, TracksReference};
pub use search::{SearchResult, SearchType};
pub use track::Track;
