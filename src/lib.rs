//! tastemix library
//!
//! Builds playlists from the Spotify catalog out of a user's taste
//! preferences: selected artists and genres, decades or a year range, a
//! popularity level and a mood. Favorited tracks always lead the result.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Local caches for token, preferences, favorites and setlist
//! - `playlist` - Playlist assembly: fetch, filter, dedupe, merge favorites
//! - `preferences` - Preference set, mood presets and popularity buckets
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tastemix::{management::TokenManager, playlist::Assembler, preferences::PreferenceSet, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> tastemix::Res<()> {
//!     tastemix::config::load_env().await?;
//!     let client = SpotifyClient::new(TokenManager::load().await?);
//!     let mut prefs = PreferenceSet::new();
//!     prefs.add_genre("indie pop");
//!     let tracks = Assembler::new(Arc::new(client)).assemble(&prefs).await?;
//!     println!("{} tracks", tracks.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod playlist;
pub mod preferences;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias for CLI-level glue where any error is just reported.
///
/// Library modules return their own error types (`FetchError`,
/// `AssembleError`, `CacheError`, `PreferenceError`); all of them convert
/// into this boxed form with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue "o".
///
/// ```
/// info!("Mixing {} sources", sources.len());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green check mark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red "!" and exits with code 1.
///
/// Only for the CLI layer. The expression diverges, so it can stand in any
/// match arm:
///
/// ```
/// let prefs = match PreferencesManager::load().await {
///     Ok(m) => m,
///     Err(e) => error!("Failed to load preferences. Err: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow "!". Used for recoverable
/// problems such as a skipped catalog source.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
