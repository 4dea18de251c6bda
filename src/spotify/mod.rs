//! # Spotify Integration Module
//!
//! Interface to the Spotify Web API used by tastemix. The playlist assembler
//! never talks HTTP directly; it goes through the [`CatalogAccess`] trait,
//! which [`SpotifyClient`] implements on top of reqwest. The bearer token
//! comes from a [`CredentialProvider`], normally the persisted
//! [`TokenManager`](crate::management::TokenManager).
//!
//! ```text
//! Playlist Assembler / CLI
//!          ↓
//!   CatalogAccess (trait)
//!          ↓
//!   SpotifyClient ── CredentialProvider
//!     ├── artists  (search, top tracks)
//!     ├── tracks   (track and genre search)
//!     ├── genres   (available genre seeds)
//!     └── playlist (create, add tracks)
//!          ↓
//!   Spotify Web API
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`FetchError`]. A 401 maps to
//! [`FetchError::Unauthorized`], any other non-success status to
//! [`FetchError::Status`], and connection problems to
//! [`FetchError::Transport`]. A body that is not the expected JSON is
//! [`FetchError::Decode`]; single `null` entries inside a page are skipped
//! instead. Nothing here retries; callers decide whether a failure is fatal.
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 authorization code flow with PKCE and a
//! random `state` value, using a local axum callback server.

pub mod artists;
pub mod auth;
pub mod genres;
pub mod playlist;
pub mod tracks;

use std::{fmt, future::Future, time::Duration};

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config,
    types::{Artist, CreatePlaylistResponse, Track},
};

#[derive(Debug)]
pub enum FetchError {
    MissingCredential,
    Unauthorized,
    Status(StatusCode),
    Transport(reqwest::Error),
    Decode(String),
    Timeout(Duration),
    Aborted,
}

impl FetchError {
    /// Failures that say nothing about the individual source and everything
    /// about the connection to the catalog.
    pub fn is_systemic(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Timeout(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) => FetchError::Unauthorized,
            Some(status) => FetchError::Status(status),
            None => FetchError::Transport(err),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingCredential => write!(f, "no valid access token"),
            FetchError::Unauthorized => write!(f, "access token rejected"),
            FetchError::Status(status) => write!(f, "catalog responded with {}", status),
            FetchError::Transport(err) => write!(f, "request failed: {}", err),
            FetchError::Decode(msg) => write!(f, "malformed catalog response: {}", msg),
            FetchError::Timeout(after) => write!(f, "no response after {}s", after.as_secs()),
            FetchError::Aborted => write!(f, "fetch task stopped before finishing"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Read access to the music catalog.
pub trait CatalogAccess: Send + Sync {
    fn search_artists(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Artist>, FetchError>> + Send;

    fn get_artist_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> impl Future<Output = Result<Vec<Track>, FetchError>> + Send;

    fn search_tracks_by_genre(
        &self,
        genre: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Track>, FetchError>> + Send;

    fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Track>, FetchError>> + Send;

    fn available_genre_seeds(&self) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// Supplies the bearer token for catalog calls, or `None` when the user is
/// not signed in (or the session can no longer be refreshed).
pub trait CredentialProvider: Send + Sync {
    fn current_credential(&self) -> impl Future<Output = Option<String>> + Send;
}

/// Fixed credential, mostly useful for tests and one-off scripts.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(pub Option<String>);

impl CredentialProvider for StaticCredential {
    async fn current_credential(&self) -> Option<String> {
        self.0.clone()
    }
}

pub struct SpotifyClient<P> {
    http: Client,
    api_url: String,
    credentials: P,
}

impl<P: CredentialProvider> SpotifyClient<P> {
    pub fn new(credentials: P) -> Self {
        Self::with_api_url(credentials, config::spotify_apiurl())
    }

    pub fn with_api_url(credentials: P, api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    async fn token(&self) -> Result<String, FetchError> {
        self.credentials
            .current_credential()
            .await
            .ok_or(FetchError::MissingCredential)
    }

    /// Creates a private playlist and fills it with the given tracks.
    pub async fn export_playlist(
        &self,
        user_id: &str,
        name: &str,
        tracks: &[Track],
    ) -> Result<CreatePlaylistResponse, FetchError> {
        let token = self.token().await?;
        let created =
            playlist::create(&self.http, &self.api_url, &token, user_id, name).await?;
        let uris: Vec<String> = tracks
            .iter()
            .filter(|t| !t.uri.is_empty())
            .map(|t| t.uri.clone())
            .collect();
        for chunk in uris.chunks(playlist::MAX_URIS_PER_REQUEST) {
            playlist::add_tracks(&self.http, &self.api_url, &token, &created.id, chunk).await?;
        }
        Ok(created)
    }
}

impl<P: CredentialProvider> CatalogAccess for SpotifyClient<P> {
    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>, FetchError> {
        if query.trim().chars().count() < artists::MIN_QUERY_LEN {
            return Ok(Vec::new());
        }
        let token = self.token().await?;
        artists::search_artists(&self.http, &self.api_url, &token, query.trim(), limit).await
    }

    async fn get_artist_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<Track>, FetchError> {
        let token = self.token().await?;
        artists::get_top_tracks(&self.http, &self.api_url, &token, artist_id, market).await
    }

    async fn search_tracks_by_genre(
        &self,
        genre: &str,
        limit: u32,
    ) -> Result<Vec<Track>, FetchError> {
        let token = self.token().await?;
        tracks::search_by_genre(&self.http, &self.api_url, &token, genre, limit).await
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, FetchError> {
        let token = self.token().await?;
        tracks::search(&self.http, &self.api_url, &token, query, limit).await
    }

    async fn available_genre_seeds(&self) -> Result<Vec<String>, FetchError> {
        let token = self.token().await?;
        genres::available_genre_seeds(&self.http, &self.api_url, &token).await
    }
}

/// Maps the status line to a [`FetchError`] and decodes the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(FetchError::Unauthorized);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    response.json::<T>().await.map_err(FetchError::from)
}
