use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, RawQuery},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tastemix::playlist::{Assembler, GENRE_SEARCH_LIMIT, Source};
use tastemix::preferences::PreferenceSet;
use tastemix::spotify::{CatalogAccess, FetchError, SpotifyClient, StaticCredential};
use tastemix::types::Artist;

/// One request as the fake catalog saw it.
#[derive(Debug, Clone)]
struct Seen {
    path: String,
    raw_query: String,
    params: HashMap<String, String>,
    authorization: Option<String>,
}

type SeenLog = Arc<Mutex<Vec<Seen>>>;

fn remember(
    log: &SeenLog,
    path: String,
    raw: Option<String>,
    params: HashMap<String, String>,
    headers: &HeaderMap,
) {
    log.lock().unwrap().push(Seen {
        path,
        raw_query: raw.unwrap_or_default(),
        params,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    });
}

fn track_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Track {}", id),
        "artists": [{ "id": "a1", "name": "Someone" }],
        "album": { "name": "Album", "release_date": "2014-10-27", "images": [] },
        "duration_ms": 200_000,
        "popularity": 55,
        "uri": format!("spotify:track:{}", id)
    })
}

async fn search(
    Extension(log): Extension<SeenLog>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    let prefix = params
        .get("q")
        .map(|q| q.trim_start_matches("genre:").replace(' ', "-"))
        .unwrap_or_default();
    remember(&log, "/search".to_string(), raw, params, &headers);

    Json(json!({
        "tracks": {
            "items": [
                track_json(&format!("{}-1", prefix)),
                null,
                { "id": null, "name": "Unavailable", "popularity": null },
                track_json(&format!("{}-2", prefix))
            ]
        }
    }))
}

async fn top_tracks(
    Extension(log): Extension<SeenLog>,
    Path(id): Path<String>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    remember(&log, format!("/artists/{}/top-tracks", id), raw, params, &headers);

    match id.as_str() {
        "unauthorized" => StatusCode::UNAUTHORIZED.into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "garbled" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "not json",
        )
            .into_response(),
        _ => Json(json!({ "tracks": [track_json(&format!("{}-top", id)), null] })).into_response(),
    }
}

/// Starts a catalog stand-in on an ephemeral port and returns its base URL.
async fn fake_catalog(log: SeenLog) -> String {
    let app = Router::new()
        .route("/search", get(search))
        .route("/artists/{id}/top-tracks", get(top_tracks))
        .layer(Extension(log));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client() -> (SeenLog, SpotifyClient<StaticCredential>) {
    let log = SeenLog::default();
    let api_url = fake_catalog(Arc::clone(&log)).await;
    let client =
        SpotifyClient::with_api_url(StaticCredential(Some("test-token".to_string())), api_url);
    (log, client)
}

fn seen(log: &SeenLog) -> Vec<Seen> {
    log.lock().unwrap().clone()
}

#[tokio::test]
async fn test_genre_search_wire_format() {
    let (log, client) = client().await;

    let tracks = client
        .search_tracks_by_genre("indie pop", GENRE_SEARCH_LIMIT)
        .await
        .unwrap();

    // The null entry and the entry without an id are dropped
    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["indie-pop-1", "indie-pop-2"]);
    assert_eq!(tracks[0].release_date(), Some("2014-10-27"));

    let requests = seen(&log);
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.path, "/search");
    assert_eq!(request.params.get("q").map(String::as_str), Some("genre:indie pop"));
    assert_eq!(request.params.get("type").map(String::as_str), Some("track"));
    assert_eq!(request.params.get("limit").map(String::as_str), Some("10"));
    assert!(!request.raw_query.contains(' '), "{}", request.raw_query);
    assert!(request.raw_query.contains("q=genre%3Aindie+pop"), "{}", request.raw_query);
    assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));
}

#[tokio::test]
async fn test_top_tracks_sends_market() {
    let (log, client) = client().await;

    let tracks = client.get_artist_top_tracks("artist1", "US").await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "artist1-top");

    let requests = seen(&log);
    assert_eq!(requests[0].path, "/artists/artist1/top-tracks");
    assert_eq!(requests[0].params.get("market").map(String::as_str), Some("US"));
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer test-token"));
}

#[tokio::test]
async fn test_http_failures_map_to_fetch_errors() {
    let (_, client) = client().await;

    assert!(matches!(
        client.get_artist_top_tracks("unauthorized", "US").await,
        Err(FetchError::Unauthorized)
    ));
    assert!(matches!(
        client.get_artist_top_tracks("broken", "US").await,
        Err(FetchError::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert!(matches!(
        client.get_artist_top_tracks("garbled", "US").await,
        Err(FetchError::Decode(_))
    ));
}

#[tokio::test]
async fn test_assembler_over_http_skips_garbled_source() {
    let (log, client) = client().await;

    let mut preferences = PreferenceSet::new();
    preferences
        .add_artist(Artist {
            id: "garbled".to_string(),
            name: "Garbled".to_string(),
            genres: Vec::new(),
        })
        .unwrap();
    preferences.add_genre("synthpop");

    let assembler = Assembler::new(Arc::new(client))
        .with_market("US")
        .with_fetch_timeout(Duration::from_secs(5));
    let assembly = assembler.assemble_with_report(&preferences).await.unwrap();

    let ids: Vec<&str> = assembly.tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["synthpop-1", "synthpop-2"]);

    assert_eq!(assembly.skipped.len(), 1);
    let (source, err) = &assembly.skipped[0];
    assert!(matches!(source, Source::Artist { id, .. } if id == "garbled"));
    assert!(matches!(err, FetchError::Decode(_)));

    let mut paths: Vec<String> = seen(&log).into_iter().map(|s| s.path).collect();
    paths.sort();
    assert_eq!(paths, vec!["/artists/garbled/top-tracks", "/search"]);
}
