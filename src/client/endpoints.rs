use serde::Deserialize;
use tracing::warn;

use crate::client::query::{clamp_limit, QueryParam};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{
    Album, AlbumType, Artist, MinimalPlaylist, Paging, Playlist, PlaylistTrack, PlaylistVersion,
    SearchResult, SearchType, Track,
};
use crate::transport::HttpTransport;
use crate::utils::constants::{
    MAX_ARTIST_ALBUMS_LIMIT, MAX_PLAYLIST_TRACKS_LIMIT, MAX_SEARCH_LIMIT, MAX_TRACK_IDS,
    PLAYLIST_VERSION_FIELDS,
};

#[derive(Deserialize)]
struct TrackList {
    tracks: Vec<Track>,
}

#[derive(Deserialize)]
struct ArtistList {
    artists: Vec<Artist>,
}

impl<T: HttpTransport> SpotifyClient<T> {
    pub async fn search(
        &self,
        query: &str,
        types: &[SearchType],
        limit: u32,
        offset: u32,
    ) -> Result<SearchResult> {
        let types = if types.is_empty() {
            SearchType::Track.as_str().to_owned()
        } else {
            SearchType::join(types)
        };
        self.get_decodable(
            "/search",
            &[
                QueryParam::new("q", query),
                QueryParam::new("type", types),
                QueryParam::new("limit", clamp_limit(limit, MAX_SEARCH_LIMIT).to_string()),
                QueryParam::new("offset", offset.to_string()),
            ],
        )
        .await
    }

    pub async fn get_track(&self, id: &str) -> Result<Track> {
        self.get_decodable(&format!("/tracks/{}", id), &[]).await
    }

    /// Several tracks in one request; ids beyond the API maximum are dropped.
    pub async fn get_tracks(&self, ids: &[&str]) -> Result<Vec<Track>> {
        if ids.len() > MAX_TRACK_IDS {
            warn!(
                requested = ids.len(),
                max = MAX_TRACK_IDS,
                "too many track ids, extra ids dropped"
            );
        }
        let ids = ids
            .iter()
            .take(MAX_TRACK_IDS)
            .copied()
            .collect::<Vec<_>>()
            .join(",");
        let list: TrackList = self
            .get_decodable("/tracks", &[QueryParam::new("ids", ids)])
            .await?;
        Ok(list.tracks)
    }

    pub async fn get_album(&self, id: &str) -> Result<Album> {
        self.get_decodable(&format!("/albums/{}", id), &[]).await
    }

    pub async fn get_artist(&self, id: &str) -> Result<Artist> {
        self.get_decodable(&format!("/artists/{}", id), &[]).await
    }

    /// Simplified albums of an artist, optionally filtered by album type.
    pub async fn get_artist_albums(
        &self,
        artist_id: &str,
        types: Option<&[AlbumType]>,
        limit: u32,
        offset: u32,
    ) -> Result<Paging<Album>> {
        let include_groups = types.map(|types| {
            types
                .iter()
                .map(AlbumType::as_str)
                .collect::<Vec<_>>()
                .join(",")
        });
        self.get_decodable(
            &format!("/artists/{}/albums", artist_id),
            &[
                QueryParam::new(
                    "limit",
                    clamp_limit(limit, MAX_ARTIST_ALBUMS_LIMIT).to_string(),
                ),
                QueryParam::new("offset", offset.to_string()),
                QueryParam::optional("include_groups", include_groups),
            ],
        )
        .await
    }

    pub async fn get_artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>> {
        let list: TrackList = self
            .get_decodable(&format!("/artists/{}/top-tracks", artist_id), &[])
            .await?;
        Ok(list.tracks)
    }

    pub async fn get_related_artists(&self, artist_id: &str) -> Result<Vec<Artist>> {
        let list: ArtistList = self
            .get_decodable(&format!("/artists/{}/related-artists", artist_id), &[])
            .await?;
        Ok(list.artists)
    }

    pub async fn get_playlist(&self, id: &str) -> Result<Playlist> {
        self.get_decodable(&format!("/playlists/{}", id), &[]).await
    }

    pub async fn get_playlist_tracks(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Paging<PlaylistTrack>> {
        self.get_decodable(
            &format!("/playlists/{}/tracks", playlist_id),
            &[
                QueryParam::new(
                    "limit",
                    clamp_limit(limit, MAX_PLAYLIST_TRACKS_LIMIT).to_string(),
                ),
                QueryParam::new("offset", offset.to_string()),
            ],
        )
        .await
    }

    /// Check a playlist against the etag seen last time.
    ///
    /// Persist the returned `etag` and pass it on the next call; `updates` is
    /// only filled when the playlist changed.
    pub async fn has_playlist_changed(
        &self,
        playlist_id: &str,
        etag: Option<&str>,
    ) -> Result<PlaylistVersion> {
        let (updates, etag) = self
            .fetch_conditional::<MinimalPlaylist>(
                &format!("/playlists/{}", playlist_id),
                &[QueryParam::new("fields", PLAYLIST_VERSION_FIELDS)],
                etag,
                true,
            )
            .await?
            .into_parts();

        Ok(PlaylistVersion {
            id: playlist_id.to_owned(),
            etag,
            updates,
        })
    }
}
