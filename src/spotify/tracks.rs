use reqwest::Client;

use super::{FetchError, read_json};
use crate::types::{SearchTracksResponse, Track};

/// Free-text track search. `query` may carry Spotify field filters such as
/// `genre:` or `year:`.
pub async fn search(
    client: &Client,
    api_url: &str,
    token: &str,
    query: &str,
    limit: u32,
) -> Result<Vec<Track>, FetchError> {
    let limit = limit.to_string();
    let response = client
        .get(format!("{uri}/search", uri = api_url))
        .query(&[
            ("q", query),
            ("type", "track"),
            ("limit", limit.as_str()),
        ])
        .bearer_auth(token)
        .send()
        .await?;

    let res = read_json::<SearchTracksResponse>(response).await?;
    Ok(res.tracks.into_tracks())
}

/// Searches tracks with a `genre:<genre>` field filter.
pub async fn search_by_genre(
    client: &Client,
    api_url: &str,
    token: &str,
    genre: &str,
    limit: u32,
) -> Result<Vec<Track>, FetchError> {
    search(client, api_url, token, &format!("genre:{}", genre), limit).await
}
