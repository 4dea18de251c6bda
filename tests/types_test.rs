use tastemix::types::{ArtistsPage, SearchTracksResponse, TopTracksResponse};

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|i| id(i).to_string()).collect()
}

#[test]
fn test_search_page_skips_null_and_idless_tracks() {
    let body = r#"{
        "tracks": {
            "items": [
                { "id": "a", "name": "Cardigan", "popularity": 80,
                  "album": { "release_date": "2020-07-24" }, "uri": "spotify:track:a" },
                null,
                { "id": null, "name": "Unavailable", "popularity": 10 },
                { "id": "b", "name": "Exile", "popularity": null, "duration_ms": null },
                { "name": "No id at all" }
            ]
        }
    }"#;

    let page: SearchTracksResponse = serde_json::from_str(body).unwrap();
    let tracks = page.tracks.into_tracks();

    assert_eq!(ids(&tracks, |t| &t.id), vec!["a", "b"]);
    assert_eq!(tracks[0].popularity, 80);
    assert_eq!(tracks[0].release_date(), Some("2020-07-24"));
    assert_eq!(tracks[1].popularity, 0);
    assert_eq!(tracks[1].duration_ms, 0);
}

#[test]
fn test_top_tracks_tolerates_null_entries() {
    let body = r#"{ "tracks": [ null, { "id": "x", "name": "Willow",
        "artists": [ { "id": null, "name": null } ] } ] }"#;

    let res: TopTracksResponse = serde_json::from_str(body).unwrap();
    let tracks = res.into_tracks();

    assert_eq!(ids(&tracks, |t| &t.id), vec!["x"]);
    assert_eq!(tracks[0].artists.len(), 1);
    assert!(tracks[0].artists[0].name.is_empty());
}

#[test]
fn test_null_lists_decode_as_empty() {
    let res: TopTracksResponse = serde_json::from_str(r#"{ "tracks": null }"#).unwrap();
    assert!(res.into_tracks().is_empty());

    let page: ArtistsPage = serde_json::from_str(r#"{ "items": null }"#).unwrap();
    assert!(page.into_artists().is_empty());
}

#[test]
fn test_artist_page_skips_null_and_idless_artists() {
    let body = r#"{ "items": [
        { "id": "1", "name": "Phoebe Bridgers", "genres": null },
        null,
        { "id": null, "name": "Ghost" },
        { "id": "2", "name": "Bon Iver", "genres": ["indie folk"] }
    ] }"#;

    let page: ArtistsPage = serde_json::from_str(body).unwrap();
    let artists = page.into_artists();

    assert_eq!(ids(&artists, |a| &a.id), vec!["1", "2"]);
    assert!(artists[0].genres.is_empty());
    assert_eq!(artists[1].genres, vec!["indie folk".to_string()]);
}
