use std::sync::Arc;

use super::{load_favorites, print_tracks, signed_in_client, spinner};
use crate::{
    error, info,
    management::{PreferencesManager, SetlistManager},
    playlist::{Assembler, Assembly, sources_for},
    preferences::PreferenceSet,
    success, warning,
};

/// Builds a new setlist from the stored preferences and favorites,
/// replacing the current one.
///
/// Sources whose fetch failed are reported as warnings and do not stop the
/// run.
///
/// # Errors
///
/// Exits through `error!` when the user is not signed in, every source
/// failed systemically, or a cache file cannot be read or written.
pub async fn generate() {
    let Some((preferences, assembly)) = run_assembly("Mixing your setlist...").await else {
        return;
    };

    let mut setlist = load_setlist().await;
    setlist.replace(assembly.tracks);
    if let Err(e) = setlist.persist().await {
        error!("Failed to save setlist. Err: {}", e);
    }

    let favorites = load_favorites().await;
    print_tracks(setlist.tracks(), &favorites);
    success!(
        "Generated {} tracks ({} favorites).",
        setlist.tracks().len(),
        preferences.favorite_tracks.len()
    );
}

/// Appends freshly assembled tracks to the current setlist, skipping ones
/// already in it.
pub async fn more() {
    let mut setlist = load_setlist().await;
    if setlist.is_empty() {
        warning!("There is no setlist yet. Run tastemix generate first.");
        return;
    }

    let Some((_, assembly)) = run_assembly("Finding more tracks...").await else {
        return;
    };

    let added = setlist.extend(assembly.tracks);
    if let Err(e) = setlist.persist().await {
        error!("Failed to save setlist. Err: {}", e);
    }

    let favorites = load_favorites().await;
    print_tracks(setlist.tracks(), &favorites);
    if added == 0 {
        warning!("No new tracks found. Try widening your preferences.");
    } else {
        success!("Added {} tracks ({} total).", added, setlist.tracks().len());
    }
}

/// Runs the assembler behind a spinner and reports skipped sources.
///
/// Returns `None` when there is nothing to assemble from.
///
/// # Arguments
///
/// * `message` - Spinner text shown while the catalog is queried
async fn run_assembly(message: &'static str) -> Option<(PreferenceSet, Assembly)> {
    let preferences = load_preferences().await;
    if sources_for(&preferences).is_empty() && preferences.favorite_tracks.is_empty() {
        warning!("Select at least one artist or genre first (see tastemix prefs).");
        return None;
    }

    let client = signed_in_client().await;
    let assembler = Assembler::new(Arc::new(client));

    let pb = spinner(message);
    let result = assembler.assemble_with_report(&preferences).await;
    pb.finish_and_clear();

    let assembly = match result {
        Ok(assembly) => assembly,
        Err(e) => error!("Couldn't generate the playlist. Err: {}", e),
    };

    for (source, e) in &assembly.skipped {
        warning!("Skipped {}: {}", source, e);
    }
    if assembly.tracks.is_empty() {
        info!("No tracks matched your preferences.");
    }

    Some((preferences, assembly))
}

/// Stored preferences with favorites attached and the mood bias applied.
async fn load_preferences() -> PreferenceSet {
    let preferences = match PreferencesManager::load().await {
        Ok(m) => m.into_inner(),
        Err(e) => error!("Failed to load preferences. Err: {}", e),
    };
    let favorites = load_favorites().await;

    preferences
        .with_favorites(favorites.all().to_vec())
        .with_mood_bias()
}

async fn load_setlist() -> SetlistManager {
    match SetlistManager::load().await {
        Ok(s) => s,
        Err(e) => error!("Failed to load setlist. Err: {}", e),
    }
}
