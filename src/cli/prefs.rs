//! Editing of the stored preference set.

use super::{signed_in_client, spinner};
use crate::{
    error, info,
    management::PreferencesManager,
    preferences::{
        Decade, Mood, MoodPreset, Popularity, PopularityRange, PreferenceSet, SUGGESTED_DECADES,
        YearRange, popularity_label,
    },
    spotify::CatalogAccess,
    success, warning,
};

#[derive(Debug, Clone, Copy)]
pub enum GenreAction {
    Toggle,
    Add,
    Remove,
}

pub async fn show() {
    let manager = load().await;
    print_preferences(manager.get());
}

pub async fn clear() {
    let mut manager = load().await;
    manager.get_mut().clear();
    save(&manager).await;
    success!("Preferences cleared.");
}

/// Searches the catalog and selects the best match.
pub async fn add_artist(query: String) {
    let mut manager = load().await;
    let client = signed_in_client().await;

    let pb = spinner("Searching artists...");
    let result = client.search_artists(&query, 1).await;
    pb.finish_and_clear();

    let artist = match result {
        Ok(artists) => match artists.into_iter().next() {
            Some(a) => a,
            None => {
                warning!("No artist found for '{}'.", query.trim());
                return;
            }
        },
        Err(e) => error!("Couldn't search artists. Err: {}", e),
    };

    let name = artist.name.clone();
    match manager.get_mut().add_artist(artist) {
        Ok(true) => {
            save(&manager).await;
            success!("Added {} to your artists.", name);
        }
        Ok(false) => info!("{} is already selected.", name),
        Err(e) => warning!("{}", e),
    }
}

/// Removes by id or, case-insensitively, by name.
pub async fn remove_artist(artist: String) {
    let mut manager = load().await;
    let needle = artist.trim().to_lowercase();
    let id = manager
        .get()
        .artists
        .iter()
        .find(|a| a.id == artist.trim() || a.name.to_lowercase() == needle)
        .map(|a| a.id.clone());

    match id {
        Some(id) => {
            manager.get_mut().remove_artist(&id);
            save(&manager).await;
            success!("Removed {} from your artists.", artist.trim());
        }
        None => warning!("{} is not selected.", artist.trim()),
    }
}

pub async fn genre(action: GenreAction, genre: String) {
    let mut manager = load().await;
    let prefs = manager.get_mut();

    let message = match action {
        GenreAction::Toggle if prefs.toggle_genre(&genre) => "selected",
        GenreAction::Toggle => "deselected",
        GenreAction::Add if prefs.add_genre(&genre) => "added",
        GenreAction::Add => {
            info!("'{}' is already selected.", genre.trim());
            return;
        }
        GenreAction::Remove if prefs.remove_genre(&genre) => "removed",
        GenreAction::Remove => {
            warning!("'{}' is not selected.", genre.trim());
            return;
        }
    };

    save(&manager).await;
    success!("Genre '{}' {}.", genre.trim(), message);
}

pub async fn decade(marker: String) {
    let decade: Decade = match marker.parse() {
        Ok(d) => d,
        Err(e) => error!("{}", e),
    };

    let mut manager = load().await;
    let selected = manager.get_mut().toggle_decade(decade);
    save(&manager).await;

    if selected {
        success!("Decade {} selected.", decade);
    } else {
        success!("Decade {} deselected.", decade);
    }
}

pub async fn years(from_year: Option<i32>, to_year: Option<i32>) {
    let range = match YearRange::new(from_year, to_year) {
        Ok(r) => r,
        Err(e) => error!("{}", e),
    };

    let mut manager = load().await;
    manager.get_mut().year_range = range.is_active().then_some(range);
    save(&manager).await;

    if range.is_active() {
        success!("Year range set to {}.", describe_years(&range));
    } else {
        success!("Year range cleared.");
    }
}

pub async fn popularity(level: Option<u8>, min: Option<u8>, max: Option<u8>, clear: bool) {
    let popularity = if clear {
        None
    } else {
        let parsed = match (level, min, max) {
            (Some(level), None, None) => Popularity::level(level),
            (None, min, max) if min.is_some() || max.is_some() => {
                PopularityRange::new(min.unwrap_or(0), max.unwrap_or(100)).map(Popularity::Range)
            }
            _ => error!("Give either a level or --min/--max, not both."),
        };
        match parsed {
            Ok(p) => Some(p),
            Err(e) => error!("{}", e),
        }
    };

    let mut manager = load().await;
    manager.get_mut().popularity = popularity;
    save(&manager).await;

    match popularity {
        Some(p) => success!("Popularity set to {}.", describe_popularity(&p)),
        None => success!("Popularity filter cleared."),
    }
}

pub async fn mood(
    preset: Option<String>,
    energy: Option<u8>,
    valence: Option<u8>,
    danceability: Option<u8>,
    acousticness: Option<u8>,
    clear: bool,
) {
    let mut manager = load().await;

    if clear {
        manager.get_mut().mood = None;
        save(&manager).await;
        success!("Mood cleared.");
        return;
    }

    let base = match preset {
        Some(key) => match key.parse::<MoodPreset>() {
            Ok(p) => Mood::from_preset(p),
            Err(e) => error!(
                "{}. Available: {}",
                e,
                MoodPreset::ALL.map(|p| p.key()).join(", ")
            ),
        },
        None => manager.get().mood.clone().unwrap_or_default(),
    };

    let mood = match base.tuned(energy, valence, danceability, acousticness) {
        Ok(m) => m,
        Err(e) => error!("{}", e),
    };

    manager.get_mut().mood = Some(mood.clone());
    save(&manager).await;
    success!("Mood set to {}.", describe_mood(&mood));
}

fn print_preferences(prefs: &PreferenceSet) {
    let artists = prefs
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    info!("Artists ({}/5): {}", prefs.artists.len(), or_none(&artists));
    info!("Genres: {}", or_none(&prefs.genres.join(", ")));

    let mut decades = prefs.decades.clone();
    decades.sort();
    let decades = decades
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    info!("Decades: {}", or_none(&decades));
    info!(
        "Years: {}",
        prefs
            .year_range
            .map(|r| describe_years(&r))
            .unwrap_or_else(|| "-".to_string())
    );
    info!(
        "Popularity: {}",
        prefs
            .popularity
            .map(|p| describe_popularity(&p))
            .unwrap_or_else(|| "-".to_string())
    );
    info!(
        "Mood: {}",
        prefs
            .mood
            .as_ref()
            .map(describe_mood)
            .unwrap_or_else(|| "-".to_string())
    );
    info!(
        "Suggested decades: {}",
        SUGGESTED_DECADES.map(|d| d.to_string()).join(", ")
    );
}

fn describe_years(range: &YearRange) -> String {
    let bound = |y: Option<i32>| y.map(|y| y.to_string()).unwrap_or_else(|| "…".to_string());
    format!("{}-{}", bound(range.from_year), bound(range.to_year))
}

fn describe_popularity(popularity: &Popularity) -> String {
    let range = popularity.range();
    match popularity {
        Popularity::Level(v) => format!(
            "{} ({}, tracks {}-{})",
            v,
            popularity_label(*v),
            range.min,
            range.max
        ),
        Popularity::Range(_) => format!("tracks {}-{}", range.min, range.max),
    }
}

fn describe_mood(mood: &Mood) -> String {
    format!(
        "{} (energy {}, valence {}, danceability {}, acousticness {})",
        mood.preset.map(|p| p.name()).unwrap_or("custom"),
        mood.energy,
        mood.valence,
        mood.danceability,
        mood.acousticness
    )
}

fn or_none(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

async fn load() -> PreferencesManager {
    match PreferencesManager::load().await {
        Ok(m) => m,
        Err(e) => error!("Failed to load preferences. Err: {}", e),
    }
}

async fn save(manager: &PreferencesManager) {
    if let Err(e) = manager.persist().await {
        error!("Failed to save preferences. Err: {}", e);
    }
}
