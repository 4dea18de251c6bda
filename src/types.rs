use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// Reads `null` the same as a missing field. The catalog sends `null` for
/// fields it has no value for, including ids of unavailable tracks.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub state: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
    pub genres: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Immutable catalog snapshot of a track. Identity is the Spotify id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
}

impl Track {
    pub fn release_date(&self) -> Option<&str> {
        self.album.as_ref().and_then(|a| a.release_date.as_deref())
    }

    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "")]
    pub favorite: String,
    pub id: String,
    pub name: String,
    pub artists: String,
    pub released: String,
    pub duration: String,
    pub popularity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: ArtistsPage,
}

/// Page entries may be `null`; use [`ArtistsPage::into_artists`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Option<Artist>>,
}

impl ArtistsPage {
    /// Artists that carry an id, in page order.
    pub fn into_artists(self) -> Vec<Artist> {
        self.items
            .into_iter()
            .flatten()
            .filter(|a| !a.id.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Vec<Option<Track>>,
}

impl TopTracksResponse {
    pub fn into_tracks(self) -> Vec<Track> {
        playable(self.tracks)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Option<Track>>,
}

impl TracksPage {
    pub fn into_tracks(self) -> Vec<Track> {
        playable(self.items)
    }
}

/// Drops `null` entries and tracks without an id, keeping page order.
fn playable(entries: Vec<Option<Track>>) -> Vec<Track> {
    entries
        .into_iter()
        .flatten()
        .filter(|t| !t.id.is_empty())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreSeedsResponse {
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}
