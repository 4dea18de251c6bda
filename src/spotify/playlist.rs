use reqwest::Client;

use super::{FetchError, read_json};
use crate::types::{
    AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
    CreatePlaylistResponse,
};

/// Spotify accepts at most 100 URIs per add-tracks request.
pub const MAX_URIS_PER_REQUEST: usize = 100;

/// Creates a private, non-collaborative playlist for `user_id`.
pub async fn create(
    client: &Client,
    api_url: &str,
    token: &str,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, FetchError> {
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: "Mixed with tastemix".to_string(),
        public: false,
        collaborative: false,
    };

    let response = client
        .post(format!(
            "{uri}/users/{user}/playlists",
            uri = api_url,
            user = user_id
        ))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    read_json::<CreatePlaylistResponse>(response).await
}

/// Appends up to [`MAX_URIS_PER_REQUEST`] track URIs to a playlist.
pub async fn add_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<AddTrackToPlaylistResponse, FetchError> {
    let body = AddTrackToPlaylistRequest {
        uris: uris.to_vec(),
    };

    let response = client
        .post(format!(
            "{uri}/playlists/{id}/tracks",
            uri = api_url,
            id = playlist_id
        ))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    read_json::<AddTrackToPlaylistResponse>(response).await
}
