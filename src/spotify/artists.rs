use reqwest::Client;

use super::{FetchError, read_json};
use crate::types::{Artist, SearchArtistsResponse, TopTracksResponse, Track};

/// Queries shorter than this (after trimming) are not sent to the catalog.
pub const MIN_QUERY_LEN: usize = 2;

/// Searches the catalog for artists by name.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `api_url` - Web API base URL without trailing slash
/// * `token` - Valid access token for Spotify API authentication
/// * `query` - Free text; URL encoding is handled by reqwest
/// * `limit` - Maximum number of artists to return (1-50)
///
/// # Returns
///
/// The first page of matching artists, or a [`FetchError`] on a non-success
/// status, transport failure or unexpected payload.
pub async fn search_artists(
    client: &Client,
    api_url: &str,
    token: &str,
    query: &str,
    limit: u32,
) -> Result<Vec<Artist>, FetchError> {
    let limit = limit.to_string();
    let response = client
        .get(format!("{uri}/search", uri = api_url))
        .query(&[
            ("q", query),
            ("type", "artist"),
            ("limit", limit.as_str()),
        ])
        .bearer_auth(token)
        .send()
        .await?;

    let res = read_json::<SearchArtistsResponse>(response).await?;
    Ok(res.artists.into_artists())
}

/// Retrieves an artist's top tracks for a market.
///
/// Spotify returns a single page (up to ten tracks) for this endpoint, so
/// there is no pagination.
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks(&client, api_url, token, "06HL4z0CvFAxyc27GXpf02", "US").await?;
/// ```
pub async fn get_top_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    artist_id: &str,
    market: &str,
) -> Result<Vec<Track>, FetchError> {
    let response = client
        .get(format!(
            "{uri}/artists/{id}/top-tracks",
            uri = api_url,
            id = artist_id
        ))
        .query(&[("market", market)])
        .bearer_auth(token)
        .send()
        .await?;

    let res = read_json::<TopTracksResponse>(response).await?;
    Ok(res.into_tracks())
}
