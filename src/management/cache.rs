use std::{fmt, io::Error, path::Path};

use serde::{Serialize, de::DeserializeOwned};

/// Failure reading or writing one of the JSON cache files under
/// `<data>/tastemix/cache/`.
#[derive(Debug)]
pub enum CacheError {
    /// The file could not be read, written or created. A missing file shows
    /// up here as `NotFound`; see [`CacheError::is_not_found`].
    IoError(Error),
    /// The file content is not valid JSON for the expected type, or holds
    /// values the type rejects on load.
    SerdeError(serde_json::Error),
}

impl From<Error> for CacheError {
    fn from(err: Error) -> Self {
        CacheError::IoError(err)
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::SerdeError(err)
    }
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::IoError(e) => write!(f, "cache file error: {}", e),
            CacheError::SerdeError(e) => write!(f, "cache file is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

impl CacheError {
    /// Whether the cache file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Reads and decodes a cache file.
///
/// # Errors
///
/// [`CacheError::IoError`] when the file cannot be read and
/// [`CacheError::SerdeError`] when it does not decode as `T`.
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CacheError> {
    let content = async_fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Like [`read_json`] but a missing file yields `T::default()`.
pub(crate) async fn read_json_or_default<T: DeserializeOwned + Default>(
    path: &Path,
) -> Result<T, CacheError> {
    match read_json(path).await {
        Err(e) if e.is_not_found() => Ok(T::default()),
        other => other,
    }
}

/// Writes `value` as pretty JSON, creating parent directories first.
pub(crate) async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CacheError> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(value)?;
    async_fs::write(path, json).await?;
    Ok(())
}

/// Deletes a cache file. Removing a file that is not there succeeds.
pub(crate) async fn remove(path: &Path) -> Result<(), CacheError> {
    match async_fs::remove_file(path).await {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => Ok(other?),
    }
}
