// Catalog endpoints: paths, query parameters and decoding of the shapes the
// Web API returns.

#[cfg(test)]
mod test {

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use crate::helpers::time::ManualClock;
use crate::models::{AlbumType, SearchType};
use crate::tests::common::{simple_artist, simple_track, stub_client, StubTransport};
use crate::transport::HttpResponse;

fn album_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Album",
        "album_type": "single",
        "artists": [simple_artist("ar1")],
        "images": [{"height": 640, "width": 640, "url": "https://i.scdn.co/image/x"}],
        "release_date": "2019-05-03",
        "release_date_precision": "day",
        "uri": format!("spotify:album:{}", id)
    })
}

fn paging(items: Vec<serde_json::Value>, offset: u32, total: u32) -> serde_json::Value {
    json!({"items": items, "limit": 20, "offset": offset, "total": total})
}

#[tokio::test]
async fn search_defaults_to_tracks_and_clamps_limit() {
    let transport = StubTransport::api(|req| {
        assert_eq!(req.url.path(), "/v1/search");
        assert_eq!(
            req.url.query(),
            Some("q=daft+punk&type=track&limit=50&offset=0")
        );
        Ok(HttpResponse::json(
            StatusCode::OK,
            &json!({"tracks": paging(vec![simple_track("t1")], 0, 1)}),
        ))
    });
    let client = stub_client(transport, Arc::new(ManualClock::default()));

    let result = client.search("daft punk", &[], 500, 0).await.unwrap();

    let tracks = result.tracks.unwrap();
    assert_eq!(tracks.items[0].id, "t1");
    assert_eq!(tracks.next_offset(), None);
    assert!(result.albums.is_none());
}

#[tokio::test]
async fn search_joins_requested_types() {
    let transport = StubTransport::api(|req| {
        let query = req.url.query().unwrap_or_default();
        assert!(query.contains("type=album%2Cartist"));
        Ok(HttpResponse::json(
            StatusCode::OK,
            &json!({
                "albums": paging(vec![album_json("al1")], 0, 40),
                "artists": paging(vec![simple_artist("ar1")], 0, 1)
            }),
        ))
    });
    let client = stub_client(transport, Arc::new(ManualClock::default()));

    let result = client
        .search("x", &[SearchType::Album, SearchType::Artist], 20, 0)
        .await
        .unwrap();

    assert_eq!(result.albums.as_ref().unwrap().next_offset(), Some(1));
    assert_eq!(result.artists.unwrap().items[0].name, "artist ar1");
}

#[tokio::test]
async fn get_tracks_drops_ids_over_the_maximum() {
    let transport = StubTransport::api(|req| {
        let ids = req
            .url
            .query_pairs()
            .find(|(k, _)| k == "ids")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        let tracks: Vec<_> = ids.split(',').map(simple_track).collect();
        Ok(HttpResponse::json(StatusCode::OK, &json!({"tracks": tracks})))
    });
    let client = stub_client(transport, Arc::new(ManualClock::default()));

    let ids: Vec<String> = (0..60).map(|i| format!("t{}", i)).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let tracks = client.get_tracks(&refs).await.unwrap();

    assert_eq!(tracks.len(), 50);
    assert_eq!(tracks[49].id, "t49");
}

#[tokio::test]
async fn album_decodes_with_release_year() {
    let transport = StubTransport::api(|req| {
        assert_eq!(req.url.path(), "/v1/albums/al1");
        Ok(HttpResponse::json(StatusCode::OK, &album_json("al1")))
    });
    let client = stub_client(transport, Arc::new(ManualClock::default()));

    let album = client.get_album("al1").await.unwrap();
    assert_eq!(album.album_type, AlbumType::Single);
    assert_eq!(album.release_year(), Some("2019"));
    assert!(album.tracks.is_none());
}

#[tokio::test]
async fn artist_albums_filter_by_group() {
    let transport = StubTransport::api(|req| {
        assert_eq!(req.url.path(), "/v1/artists/ar1/albums");
        assert_eq!(
            req.url.query(),
            Some("limit=10&offset=20&include_groups=album%2Csingle")
        );
        Ok(HttpResponse::json(StatusCode::OK, &paging(vec![album_json("al1")], 20, 21)))
    });
    let client = stub_client(transport, Arc::new(ManualClock::default()));

    let page = client
        .get_artist_albums("ar1", Some(&[AlbumType::Album, AlbumType::Single][..]), 10, 20)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next_offset(), None);
}

#[tokio::test]
async fn artist_top_tracks_and_related_artists_unwrap_lists() {
    let transport = StubTransport::api(|req| match req.url.path() {
        "/v1/artists/ar1/top-tracks" => Ok(HttpResponse::json(
            StatusCode::OK,
            &json!({"tracks": [simple_track("t1"), simple_track("t2")]}),
        )),
        "/v1/artists/ar1/related-artists" => Ok(HttpResponse::json(
            StatusCode::OK,
            &json!({"artists": [simple_artist("ar2")]}),
        )),
        other => panic!("unexpected path {}", other),
    });
    let mut client = stub_client(transport, Arc::new(ManualClock::default()));
    client.set_market(Some("se".parse().unwrap()));

    let top = client.get_artist_top_tracks("ar1").await.unwrap();
    let related = client.get_related_artists("ar1").await.unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(related[0].id, "ar2");
    let sent = client.transport().api_requests();
    assert_eq!(sent[0].url.query(), Some("market=SE"));
}

#[tokio::test]
async fn playlist_tracks_skip_unavailable_entries() {
    let transport = StubTransport::api(|req| {
        assert_eq!(req.url.path(), "/v1/playlists/p1/tracks");
        assert_eq!(req.url.query(), Some("limit=100&offset=0"));
        Ok(HttpResponse::json(
            StatusCode::OK,
            &paging(
                vec![
                    json!({"added_at": "2024-01-01T00:00:00Z", "track": simple_track("t1")}),
                    json!({"added_at": "2024-01-02T00:00:00Z", "track": null}),
                ],
                0,
                2,
            ),
        ))
    });
    let client = stub_client(transport, Arc::new(ManualClock::default()));

    let page = client.get_playlist_tracks("p1", 1000, 0).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert!(page.items[0].track.is_some());
    assert!(page.items[1].track.is_none());
}

#[tokio::test]
async fn playlist_decodes_owner_and_tracks_reference() {
    let transport = StubTransport::api(|_| {
        Ok(HttpResponse::json(
            StatusCode::OK,
            &json!({
                "id": "p1",
                "name": "Mix",
                "owner": {"id": "u1", "display_name": "User", "uri": "spotify:user:u1"},
                "public": true,
                "collaborative": false,
                "description": null,
                "followers": {"total": 12},
                "images": [],
                "snapshot_id": "s1",
                "tracks": {"href": "https://api.spotify.com/v1/playlists/p1/tracks", "total": 2},
                "uri": "spotify:playlist:p1"
            }),
        ))
    });
    let client = stub_client(transport, Arc::new(ManualClock::default()));

    let playlist = client.get_playlist("p1").await.unwrap();
    assert_eq!(playlist.owner.display_name.as_deref(), Some("User"));
    assert_eq!(playlist.tracks.total, 2);
    assert_eq!(playlist.followers.map(|f| f.total), Some(12));
}

}
