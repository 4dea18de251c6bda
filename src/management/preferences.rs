use std::path::PathBuf;

use super::cache::{self, CacheError};
use crate::{config, preferences::PreferenceSet};

/// Persisted widget state. Favorites live in their own cache and are not
/// written here.
///
/// The file is loaded through `PreferenceSet`'s serde impls, so a hand-edited
/// file with an invalid decade, an inverted year range or an out-of-range
/// popularity is rejected on load instead of reaching the assembler.
pub struct PreferencesManager {
    preferences: PreferenceSet,
    path: PathBuf,
}

impl PreferencesManager {
    /// Loads preferences from `<data>/tastemix/cache/preferences.json`.
    ///
    /// # Errors
    ///
    /// See [`PreferencesManager::load_from`].
    pub async fn load() -> Result<Self, CacheError> {
        Self::load_from(Self::cache_path()).await
    }

    /// Loads preferences from an explicit path. A missing file yields empty
    /// preferences.
    ///
    /// # Arguments
    ///
    /// * `path` - Cache file to read, and later to write on [`persist`](Self::persist)
    ///
    /// # Errors
    ///
    /// - [`CacheError::IoError`] if the file exists but cannot be read
    /// - [`CacheError::SerdeError`] if it is not valid JSON or holds invalid
    ///   preference values
    pub async fn load_from(path: PathBuf) -> Result<Self, CacheError> {
        let preferences: PreferenceSet = cache::read_json_or_default(&path).await?;
        Ok(Self { preferences, path })
    }

    /// Writes the preferences back to the path they were loaded from,
    /// creating parent directories as needed.
    pub async fn persist(&self) -> Result<(), CacheError> {
        cache::write_json(&self.path, &self.preferences).await
    }

    pub fn get(&self) -> &PreferenceSet {
        &self.preferences
    }

    pub fn get_mut(&mut self) -> &mut PreferenceSet {
        &mut self.preferences
    }

    pub fn into_inner(self) -> PreferenceSet {
        self.preferences
    }

    fn cache_path() -> PathBuf {
        config::data_dir().join("cache/preferences.json")
    }
}
