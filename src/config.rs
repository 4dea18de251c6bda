//! Configuration management for tastemix.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the platform-specific local data directory. Settings that have a
//! sensible public default (Spotify endpoints, market, callback address) fall
//! back to it; the client id has none and is reported as an error when unset.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "user-read-private user-read-email user-top-read playlist-modify-public playlist-modify-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `<data_local_dir>/tastemix/.env`.
///
/// Creates the directory if it doesn't exist. A missing `.env` file is not an
/// error since every variable can also come from the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/tastemix/.env`
/// - macOS: `~/Library/Application Support/tastemix/.env`
/// - Windows: `%LOCALAPPDATA%/tastemix/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of everything tastemix stores on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tastemix");
    path
}

/// Returns the address the local OAuth callback server binds to.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify user ID that owns exported playlists.
///
/// # Errors
///
/// Fails when `SPOTIFY_USER_ID` is not set.
pub fn spotify_user() -> Result<String, String> {
    required("SPOTIFY_USER_ID")
}

/// Returns the Spotify API client ID registered for this application.
///
/// # Errors
///
/// Fails when `SPOTIFY_API_AUTH_CLIENT_ID` is not set.
pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the OAuth redirect URI. Must match the one registered with Spotify.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the space separated OAuth scope list.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Market used to scope artist top tracks (ISO 3166-1 alpha-2).
pub fn spotify_market() -> String {
    var_or("SPOTIFY_MARKET", DEFAULT_MARKET)
}

/// Upper bound for a single catalog request made while assembling a playlist.
///
/// Unparseable values fall back to the default.
pub fn fetch_timeout() -> Duration {
    let secs = env::var("TASTEMIX_FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required(key: &str) -> Result<String, String> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| format!("{} must be set", key))
}
