use crate::{
    preferences::{PopularityRange, PreferenceSet, release_year},
    types::Track,
};

/// Candidate filtering using static helper functions.
pub struct TrackFilters;

impl TrackFilters {
    /// Release-year check against the manual year range and the selected
    /// decades. Both must pass when both are set. Tracks without a
    /// parseable release year always pass.
    pub fn matches_period(track: &Track, preferences: &PreferenceSet) -> bool {
        let Some(year) = track.release_date().and_then(release_year) else {
            return true;
        };

        if let Some(range) = preferences.year_range {
            if !range.contains(year) {
                return false;
            }
        }

        preferences.decades.is_empty() || preferences.decades.iter().any(|d| d.contains(year))
    }

    pub fn matches_popularity(track: &Track, range: &PopularityRange) -> bool {
        range.contains(track.popularity)
    }

    /// Applies the period filter (when any period preference is set), then
    /// the popularity filter (when a popularity preference is set).
    pub fn apply(candidates: Vec<Track>, preferences: &PreferenceSet) -> Vec<Track> {
        let mut kept = candidates;

        if preferences.has_period_filter() {
            kept.retain(|t| Self::matches_period(t, preferences));
        }

        if let Some(range) = preferences.popularity_range() {
            kept.retain(|t| Self::matches_popularity(t, &range));
        }

        kept
    }
}
