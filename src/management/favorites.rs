use std::path::PathBuf;

use super::cache::{self, CacheError};
use crate::{config, types::Track};

/// Favorited tracks, unique by id, in the order they were marked.
///
/// Favorites are kept outside the preference file. `generate` and `more`
/// attach them to the preferences, and the assembler puts them ahead of
/// catalog tracks without filtering them.
pub struct FavoritesManager {
    favorites: Vec<Track>,
    path: PathBuf,
}

impl FavoritesManager {
    /// Creates a manager over `favorites` that persists to `path`.
    ///
    /// # Arguments
    ///
    /// * `favorites` - Initial tracks; later duplicates of an id are dropped
    /// * `path` - Cache file used by [`persist`](Self::persist)
    pub fn with_path(favorites: Vec<Track>, path: PathBuf) -> Self {
        let mut manager = Self {
            favorites: Vec::new(),
            path,
        };
        for track in favorites {
            manager.add(track);
        }
        manager
    }

    /// Loads favorites from `<data>/tastemix/cache/favorites.json`.
    pub async fn load() -> Result<Self, CacheError> {
        Self::load_from(Self::cache_path()).await
    }

    /// Loads favorites from an explicit path. A missing cache file is an
    /// empty favorites list.
    ///
    /// # Errors
    ///
    /// - [`CacheError::IoError`] if the file exists but cannot be read
    /// - [`CacheError::SerdeError`] if it is not a JSON list of tracks
    pub async fn load_from(path: PathBuf) -> Result<Self, CacheError> {
        let favorites: Vec<Track> = cache::read_json_or_default(&path).await?;
        Ok(Self::with_path(favorites, path))
    }

    pub async fn persist(&self) -> Result<(), CacheError> {
        cache::write_json(&self.path, &self.favorites).await
    }

    /// Returns `false` if a track with the same id is already a favorite.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.favorites.push(track);
        true
    }

    pub fn remove(&mut self, track_id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|t| t.id != track_id);
        before != self.favorites.len()
    }

    /// Returns whether the track is a favorite afterwards.
    pub fn toggle(&mut self, track: Track) -> bool {
        if self.remove(&track.id) {
            return false;
        }
        self.add(track)
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.favorites.iter().any(|t| t.id == track_id)
    }

    pub fn clear(&mut self) {
        self.favorites.clear();
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    pub fn all(&self) -> &[Track] {
        &self.favorites
    }

    fn cache_path() -> PathBuf {
        config::data_dir().join("cache/favorites.json")
    }
}
