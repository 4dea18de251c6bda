use std::collections::HashSet;

use tastemix::types::{ArtistRef, Track, TrackAlbum};
use tastemix::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, release_date: &str, popularity: u8) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![ArtistRef {
            id: Some(format!("{}_artist_id", id)),
            name: "Test Artist".to_string(),
        }],
        album: Some(TrackAlbum {
            name: Some("Test Album".to_string()),
            release_date: Some(release_date.to_string()),
            images: Vec::new(),
        }),
        duration_ms: 215_000,
        popularity,
        uri: format!("spotify:track:{}", id),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    assert!(!challenge.is_empty());

    // Deterministic
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA-256 digest is 32 bytes, 43 chars in unpadded base64url
    assert_eq!(challenge.len(), 43);
    assert!(!challenge.contains('='));
    assert!(!challenge.contains('+'));
    assert!(!challenge.contains('/'));
}

#[test]
fn test_generate_code_challenge_known_vector() {
    // Example from RFC 7636, appendix B
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_generate_state() {
    let state = generate_state();
    assert_eq!(state.len(), 16);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_state());
}

#[test]
fn test_remove_duplicate_tracks_keeps_first() {
    let mut tracks = vec![
        create_test_track("a", "First A", "2010-01-01", 50),
        create_test_track("b", "B", "2011-01-01", 50),
        create_test_track("a", "Second A", "2012-01-01", 80),
        create_test_track("c", "C", "2013-01-01", 50),
        create_test_track("b", "Second B", "2014-01-01", 50),
    ];

    remove_duplicate_tracks(&mut tracks);

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(tracks[0].name, "First A");
    assert_eq!(tracks[1].name, "B");
}

#[test]
fn test_remove_duplicate_tracks_empty() {
    let mut tracks: Vec<Track> = Vec::new();
    remove_duplicate_tracks(&mut tracks);
    assert!(tracks.is_empty());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(215_000), "3:35");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(600_000), "10:00");
    assert_eq!(format_duration(61_000), "1:01");
}

#[test]
fn test_track_table_rows_marks_favorites() {
    let tracks = vec![
        create_test_track("a", "Love Story", "2008-09-12", 77),
        create_test_track("b", "Cardigan", "2020-07-24", 81),
    ];
    let favorites: HashSet<&str> = ["b"].into_iter().collect();

    let rows = track_table_rows(&tracks, &favorites);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].favorite, "");
    assert_eq!(rows[1].favorite, "♥");
    assert_eq!(rows[0].name, "Love Story");
    assert_eq!(rows[0].artists, "Test Artist");
    assert_eq!(rows[0].released, "2008-09-12");
    assert_eq!(rows[0].duration, "3:35");
    assert_eq!(rows[1].popularity, 81);
}

#[test]
fn test_track_table_rows_without_album() {
    let track = Track {
        id: "x".to_string(),
        name: "Untitled".to_string(),
        ..Default::default()
    };

    let rows = track_table_rows(&[track], &HashSet::new());
    assert_eq!(rows[0].released, "-");
    assert_eq!(rows[0].artists, "");
}
