use tabled::Table;

use super::{signed_in_client, spinner};
use crate::{
    error,
    spotify::CatalogAccess,
    types::ArtistTableRow,
    warning,
};

pub const ARTIST_SEARCH_LIMIT: u32 = 10;

pub async fn search_artists(query: String) {
    let client = signed_in_client().await;

    let pb = spinner("Searching artists...");
    let result = client.search_artists(&query, ARTIST_SEARCH_LIMIT).await;
    pb.finish_and_clear();

    let artists = match result {
        Ok(artists) => artists,
        Err(e) => error!("Couldn't search artists. Err: {}", e),
    };

    if artists.is_empty() {
        warning!("No artists found for '{}' (queries need at least 2 characters).", query.trim());
        return;
    }

    let table_rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|a| ArtistTableRow {
            id: a.id,
            name: a.name,
            genres: a.genres.iter().take(3).cloned().collect::<Vec<_>>().join(","),
        })
        .collect();

    println!("{}", Table::new(table_rows));
}
