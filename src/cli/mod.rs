//! # CLI Module
//!
//! User-facing commands of tastemix. Each command loads what it needs from
//! the local caches, talks to Spotify through
//! [`SpotifyClient`](crate::spotify::SpotifyClient), and reports back with
//! the `info!` / `success!` / `warning!` / `error!` macros, spinners and
//! tables.
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Preferences / Playlist Assembly
//!     ↓
//! Management Layer (token, preferences, favorites, setlist caches)
//!     ↓
//! Spotify Integration
//! ```
//!
//! ## Commands
//!
//! - [`auth`], [`logout`] - sign in with OAuth PKCE, forget the token
//! - [`search_artists`], [`list_genres`] - browse the catalog
//! - [`prefs`] - edit the stored preference set
//! - [`generate`], [`more`] - build a new setlist or extend the current one
//! - [`show_setlist`], [`remove_track`] - curate the setlist
//! - [`toggle_favorite`], [`list_favorites`] - manage favorites
//! - [`save`] - export the setlist as a Spotify playlist
//!
//! ## Typical session
//!
//! ```bash
//! tastemix auth
//! tastemix prefs artist add "Taylor Swift"
//! tastemix prefs genre add "indie pop"
//! tastemix prefs decade 2010
//! tastemix prefs popularity 45
//! tastemix generate
//! tastemix favorite 1dGr1c8CrMLDpV6mPbImSI
//! tastemix more
//! tastemix save --name "Eras mix"
//! ```

mod artists;
mod auth;
mod generate;
mod genres;
pub mod prefs;
mod setlist;

use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::{FavoritesManager, TokenManager},
    spotify::SpotifyClient,
    types::Track,
    utils,
};

pub use artists::search_artists;
pub use auth::{auth, logout};
pub use generate::{generate, more};
pub use genres::list_genres;
pub use setlist::{list_favorites, remove_track, save, show_setlist, toggle_favorite};

/// Client backed by the stored token. Exits when the user never signed in
/// or the session can no longer be refreshed.
async fn signed_in_client() -> SpotifyClient<TokenManager> {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run tastemix auth\n Error: {}",
                e
            );
        }
    };

    if token_mgr.get_valid_token().await.is_none() {
        error!("Your Spotify session has expired. Please run tastemix auth");
    }

    SpotifyClient::new(token_mgr)
}

async fn load_favorites() -> FavoritesManager {
    match FavoritesManager::load().await {
        Ok(f) => f,
        Err(e) => error!("Failed to load favorites. Err: {}", e),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn print_tracks(tracks: &[Track], favorites: &FavoritesManager) {
    let favorite_ids: HashSet<&str> = favorites.all().iter().map(|t| t.id.as_str()).collect();
    let table = Table::new(utils::track_table_rows(tracks, &favorite_ids));
    println!("{}", table);
}
