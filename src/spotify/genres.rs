use reqwest::Client;

use super::{FetchError, read_json};
use crate::types::GenreSeedsResponse;

/// Lists the genre names Spotify accepts as recommendation seeds.
///
/// The endpoint is deprecated for newer apps and may answer 404; callers
/// fall back to [`FALLBACK_GENRES`](crate::preferences::FALLBACK_GENRES).
pub async fn available_genre_seeds(
    client: &Client,
    api_url: &str,
    token: &str,
) -> Result<Vec<String>, FetchError> {
    let response = client
        .get(format!(
            "{uri}/recommendations/available-genre-seeds",
            uri = api_url
        ))
        .bearer_auth(token)
        .send()
        .await?;

    let res = read_json::<GenreSeedsResponse>(response).await?;
    Ok(res.genres)
}
