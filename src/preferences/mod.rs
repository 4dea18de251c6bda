//! # Preference Set
//!
//! The user's taste configuration for one generation call: selected artists,
//! genres, decades, an optional manual year range, a popularity level or
//! range, an optional mood and the favorited tracks that always make it into
//! the result.
//!
//! The helpers on [`PreferenceSet`] mirror the selection rules of the
//! interactive widgets (artist limit, case-insensitive genre toggling, decade
//! toggling) so the CLI and any other front end enforce them the same way.
//! Favorites are not part of the persisted settings; they are attached from
//! the favorites cache right before a generation call.

mod mood;
mod period;
mod popularity;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Artist, Track};

pub use mood::{Mood, MoodCharacter, MoodPreset, adjust};
pub use period::{Decade, SUGGESTED_DECADES, YearRange, release_year};
pub use popularity::{Popularity, PopularityRange, popularity_label};

pub const MAX_SELECTED_ARTISTS: usize = 5;
pub const MAX_QUERIED_GENRES: usize = 5;

/// Genre suggestions used when the catalog cannot provide its seed list.
pub const FALLBACK_GENRES: [&str; 11] = [
    "pop",
    "pop rock",
    "country",
    "country pop",
    "indie",
    "indie pop",
    "alternative",
    "rock",
    "singer-songwriter",
    "folk",
    "electropop",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    ArtistLimitReached,
    InvertedYearRange { from: i32, to: i32 },
    PopularityOutOfRange(u8),
    InvertedPopularity { min: u8, max: u8 },
    MoodValueOutOfRange(&'static str, u8),
    UnknownMood(String),
    InvalidDecade(String),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::ArtistLimitReached => write!(
                f,
                "at most {} artists can be selected",
                MAX_SELECTED_ARTISTS
            ),
            PreferenceError::InvertedYearRange { from, to } => {
                write!(f, "year range starts after it ends ({} > {})", from, to)
            }
            PreferenceError::PopularityOutOfRange(value) => {
                write!(f, "popularity {} is outside 0..=100", value)
            }
            PreferenceError::InvertedPopularity { min, max } => {
                write!(f, "popularity minimum {} is above maximum {}", min, max)
            }
            PreferenceError::MoodValueOutOfRange(name, value) => {
                write!(f, "{} {} is outside 0..=100", name, value)
            }
            PreferenceError::UnknownMood(key) => write!(f, "unknown mood preset '{}'", key),
            PreferenceError::InvalidDecade(marker) => {
                write!(f, "'{}' is not a decade marker like 1980", marker)
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Normalized form used to compare genres: trimmed and lowercased.
pub fn normalize_genre(genre: &str) -> String {
    genre.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub decades: Vec<Decade>,
    #[serde(default)]
    pub year_range: Option<YearRange>,
    #[serde(default)]
    pub popularity: Option<Popularity>,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(skip)]
    pub favorite_tracks: Vec<Track>,
}

impl PreferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects an artist. Returns `Ok(false)` when it was already selected.
    pub fn add_artist(&mut self, artist: Artist) -> Result<bool, PreferenceError> {
        if self.artists.iter().any(|a| a.id == artist.id) {
            return Ok(false);
        }
        if self.artists.len() >= MAX_SELECTED_ARTISTS {
            return Err(PreferenceError::ArtistLimitReached);
        }
        self.artists.push(artist);
        Ok(true)
    }

    pub fn remove_artist(&mut self, artist_id: &str) -> bool {
        let before = self.artists.len();
        self.artists.retain(|a| a.id != artist_id);
        before != self.artists.len()
    }

    /// Selects the genre if no genre with the same normalized form is
    /// selected, otherwise deselects every matching entry. Returns whether
    /// the genre is selected afterwards.
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        if self.remove_genre(genre) {
            return false;
        }
        self.add_genre(genre)
    }

    /// Adds a free-text genre. Blank input and genres already present (by
    /// normalized form) are ignored.
    pub fn add_genre(&mut self, genre: &str) -> bool {
        let trimmed = genre.trim();
        if trimmed.is_empty() || self.has_genre(trimmed) {
            return false;
        }
        self.genres.push(trimmed.to_string());
        true
    }

    pub fn remove_genre(&mut self, genre: &str) -> bool {
        let norm = normalize_genre(genre);
        let before = self.genres.len();
        self.genres.retain(|g| normalize_genre(g) != norm);
        before != self.genres.len()
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        let norm = normalize_genre(genre);
        self.genres.iter().any(|g| normalize_genre(g) == norm)
    }

    /// Returns whether the decade is selected afterwards.
    pub fn toggle_decade(&mut self, decade: Decade) -> bool {
        if self.decades.contains(&decade) {
            self.decades.retain(|d| *d != decade);
            false
        } else {
            self.decades.push(decade);
            true
        }
    }

    /// Genres sent to the catalog: first five distinct normalized entries, in
    /// selection order, using the first spelling seen for each.
    pub fn query_genres(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        let mut out = Vec::new();
        for genre in &self.genres {
            let norm = normalize_genre(genre);
            if norm.is_empty() || seen.contains(&norm) {
                continue;
            }
            seen.push(norm);
            out.push(genre.trim().to_string());
            if out.len() == MAX_QUERIED_GENRES {
                break;
            }
        }
        out
    }

    pub fn popularity_range(&self) -> Option<PopularityRange> {
        self.popularity.map(|p| p.range())
    }

    /// True when a decade or a manual year bound restricts release years.
    pub fn has_period_filter(&self) -> bool {
        !self.decades.is_empty() || self.year_range.is_some_and(|r| r.is_active())
    }

    pub fn with_favorites(mut self, favorites: Vec<Track>) -> Self {
        self.favorite_tracks = favorites;
        self
    }

    /// Applies the mood bias of the set's own mood, if any.
    pub fn with_mood_bias(self) -> Self {
        match self.mood.clone() {
            Some(mood) => adjust(&self, &mood),
            None => self,
        }
    }

    pub fn clear(&mut self) {
        *self = Self {
            favorite_tracks: std::mem::take(&mut self.favorite_tracks),
            ..Self::default()
        };
    }
}
