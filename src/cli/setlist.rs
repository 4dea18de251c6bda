use super::{load_favorites, print_tracks, signed_in_client, spinner};
use crate::{
    config, error, info,
    management::SetlistManager,
    success, warning,
};

/// Prints the current setlist as a table, marking favorites.
pub async fn show_setlist() {
    let setlist = load_setlist().await;
    if setlist.is_empty() {
        info!("Your setlist is empty. Run tastemix generate.");
        return;
    }
    let favorites = load_favorites().await;
    print_tracks(setlist.tracks(), &favorites);
}

/// Removes one track from the stored setlist.
///
/// # Arguments
///
/// * `track_id` - Spotify track id as shown in the setlist table
pub async fn remove_track(track_id: String) {
    let mut setlist = load_setlist().await;
    match setlist.remove(&track_id) {
        Some(track) => {
            if let Err(e) = setlist.persist().await {
                error!("Failed to save setlist. Err: {}", e);
            }
            success!("Removed '{}' from the setlist.", track.name);
        }
        None => warning!("Track {} is not in the setlist.", track_id),
    }
}

/// Marks a setlist track as favorite, or unmarks it if it already is one.
/// Favorites that are no longer in the setlist can still be unmarked.
pub async fn toggle_favorite(track_id: String) {
    let setlist = load_setlist().await;
    let mut favorites = load_favorites().await;

    let now_favorite = match setlist.find(&track_id) {
        Some(track) => favorites.toggle(track.clone()),
        None if favorites.remove(&track_id) => false,
        None => {
            warning!("Track {} is neither in the setlist nor a favorite.", track_id);
            return;
        }
    };

    if let Err(e) = favorites.persist().await {
        error!("Failed to save favorites. Err: {}", e);
    }

    if now_favorite {
        success!("Added to favorites. Favorites are always part of new setlists.");
    } else {
        success!("Removed from favorites.");
    }
}

/// Lists favorite tracks, or removes all of them.
///
/// # Arguments
///
/// * `clear` - Remove every favorite instead of listing them
pub async fn list_favorites(clear: bool) {
    let mut favorites = load_favorites().await;

    if clear {
        favorites.clear();
        if let Err(e) = favorites.persist().await {
            error!("Failed to save favorites. Err: {}", e);
        }
        success!("Favorites cleared.");
        return;
    }

    if favorites.count() == 0 {
        info!("You haven't marked any favorites yet.");
        return;
    }

    print_tracks(favorites.all(), &favorites);
    info!("{} favorite tracks", favorites.count());
}

/// Exports the current setlist as a private Spotify playlist.
///
/// Needs `SPOTIFY_USER_ID` and a stored token. Tracks are sent in the
/// setlist order, 100 URIs per request.
///
/// # Arguments
///
/// * `name` - Name of the playlist to create
///
/// # Errors
///
/// Exits through `error!` when the user id is not configured, the user is
/// not signed in, or any Spotify request fails. A failure after the playlist
/// was created leaves a partially filled playlist behind.
pub async fn save(name: String) {
    let setlist = load_setlist().await;
    if setlist.is_empty() {
        warning!("Your setlist is empty. Run tastemix generate first.");
        return;
    }

    let user_id = match config::spotify_user() {
        Ok(u) => u,
        Err(e) => error!("{}", e),
    };
    let client = signed_in_client().await;

    let pb = spinner("Saving playlist to Spotify...");
    let result = client.export_playlist(&user_id, &name, setlist.tracks()).await;
    pb.finish_and_clear();

    match result {
        Ok(playlist) => success!(
            "Saved {} tracks to playlist '{}' ({}).",
            setlist.tracks().len(),
            playlist.name,
            playlist.id
        ),
        Err(e) => error!("Couldn't save the playlist. Err: {}", e),
    }
}

/// Loads the stored setlist or exits with an error.
async fn load_setlist() -> SetlistManager {
    match SetlistManager::load().await {
        Ok(s) => s,
        Err(e) => error!("Failed to load setlist. Err: {}", e),
    }
}
