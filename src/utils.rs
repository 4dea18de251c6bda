use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{Track, TrackTableRow};

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Opaque value echoed back by the authorization server to tie the callback
/// to this login attempt.
pub fn generate_state() -> String {
    random_alphanumeric(16)
}

/// Keeps the first occurrence of every track id.
pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

/// `m:ss`, e.g. 215000 ms -> "3:35".
pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn track_table_rows(tracks: &[Track], favorite_ids: &HashSet<&str>) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            favorite: if favorite_ids.contains(t.id.as_str()) {
                "♥".to_string()
            } else {
                String::new()
            },
            id: t.id.clone(),
            name: t.name.clone(),
            artists: t.artist_names(),
            released: t.release_date().unwrap_or("-").to_string(),
            duration: format_duration(t.duration_ms),
            popularity: t.popularity,
        })
        .collect()
}
