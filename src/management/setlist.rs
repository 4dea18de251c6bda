use std::path::PathBuf;

use super::cache::{self, CacheError};
use crate::{config, playlist, types::Track};

/// The most recently generated track list, kept between invocations so it
/// can be extended, curated and exported.
///
/// `generate` replaces the list, `more` extends it and `remove` drops single
/// tracks. Track order is the order shown to the user and sent on export.
pub struct SetlistManager {
    tracks: Vec<Track>,
    path: PathBuf,
}

impl SetlistManager {
    /// Loads the setlist from `<data>/tastemix/cache/setlist.json`.
    pub async fn load() -> Result<Self, CacheError> {
        Self::load_from(Self::cache_path()).await
    }

    /// Loads the setlist from an explicit path. A missing file is an empty
    /// setlist.
    ///
    /// # Arguments
    ///
    /// * `path` - Cache file to read, and later to write on [`persist`](Self::persist)
    ///
    /// # Errors
    ///
    /// - [`CacheError::IoError`] if the file exists but cannot be read
    /// - [`CacheError::SerdeError`] if it is not a JSON list of tracks
    pub async fn load_from(path: PathBuf) -> Result<Self, CacheError> {
        let tracks: Vec<Track> = cache::read_json_or_default(&path).await?;
        Ok(Self { tracks, path })
    }

    pub async fn persist(&self) -> Result<(), CacheError> {
        cache::write_json(&self.path, &self.tracks).await
    }

    pub fn replace(&mut self, tracks: Vec<Track>) -> &mut Self {
        self.tracks = tracks;
        self
    }

    /// Appends tracks not already present. Returns how many were added.
    pub fn extend(&mut self, more: Vec<Track>) -> usize {
        let before = self.tracks.len();
        self.tracks = playlist::extend(std::mem::take(&mut self.tracks), more);
        self.tracks.len() - before
    }

    pub fn remove(&mut self, track_id: &str) -> Option<Track> {
        let pos = self.tracks.iter().position(|t| t.id == track_id)?;
        Some(self.tracks.remove(pos))
    }

    pub fn find(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn cache_path() -> PathBuf {
        config::data_dir().join("cache/setlist.json")
    }
}
