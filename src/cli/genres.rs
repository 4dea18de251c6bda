use super::{signed_in_client, spinner};
use crate::{
    info,
    management::PreferencesManager,
    preferences::FALLBACK_GENRES,
    spotify::CatalogAccess,
    warning,
};

pub async fn list_genres(filter: Option<String>) {
    let client = signed_in_client().await;

    let pb = spinner("Loading genres...");
    let result = client.available_genre_seeds().await;
    pb.finish_and_clear();

    let mut genres = match result {
        Ok(genres) if !genres.is_empty() => genres,
        Ok(_) => FALLBACK_GENRES.iter().map(|g| g.to_string()).collect(),
        Err(e) => {
            warning!("Couldn't load genres from Spotify, using the default list. Err: {}", e);
            FALLBACK_GENRES.iter().map(|g| g.to_string()).collect()
        }
    };

    if let Some(filter) = filter.map(|f| f.trim().to_lowercase()).filter(|f| !f.is_empty()) {
        genres.retain(|g| g.to_lowercase().contains(&filter));
    }

    let preferences = PreferencesManager::load()
        .await
        .map(|m| m.into_inner())
        .unwrap_or_default();

    info!("{} genres", genres.len());
    for genre in genres {
        let marker = if preferences.has_genre(&genre) { "*" } else { " " };
        println!(" {} {}", marker, genre);
    }
}
