use tastemix::playlist::TrackFilters;
use tastemix::preferences::{Decade, Popularity, PopularityRange, PreferenceSet, YearRange};
use tastemix::types::{Track, TrackAlbum};

fn track(id: &str, release_date: Option<&str>, popularity: u8) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        album: Some(TrackAlbum {
            release_date: release_date.map(String::from),
            ..Default::default()
        }),
        popularity,
        ..Default::default()
    }
}

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_decade_filter() {
    let t = track("a", Some("1985-03-01"), 50);

    let mut eighties = PreferenceSet::new();
    eighties.toggle_decade(Decade::new(1980));
    assert!(TrackFilters::matches_period(&t, &eighties));

    let mut nineties = PreferenceSet::new();
    nineties.toggle_decade(Decade::new(1990));
    assert!(!TrackFilters::matches_period(&t, &nineties));

    // Any selected decade admits the track
    nineties.toggle_decade(Decade::new(1980));
    assert!(TrackFilters::matches_period(&t, &nineties));
}

#[test]
fn test_year_range_filter() {
    let mut prefs = PreferenceSet::new();
    prefs.year_range = Some(YearRange::new(Some(2008), Some(2012)).unwrap());

    assert!(TrackFilters::matches_period(
        &track("a", Some("2010-01-01"), 50),
        &prefs
    ));
    assert!(!TrackFilters::matches_period(
        &track("b", Some("2015-06-01"), 50),
        &prefs
    ));
}

#[test]
fn test_year_range_and_decades_both_apply() {
    let mut prefs = PreferenceSet::new();
    prefs.year_range = Some(YearRange::new(Some(2008), None).unwrap());
    prefs.toggle_decade(Decade::new(2000));

    assert!(TrackFilters::matches_period(
        &track("a", Some("2009"), 50),
        &prefs
    ));
    // In range but outside the decade
    assert!(!TrackFilters::matches_period(
        &track("b", Some("2011-01-01"), 50),
        &prefs
    ));
    // In the decade but before the range
    assert!(!TrackFilters::matches_period(
        &track("c", Some("2003-01-01"), 50),
        &prefs
    ));
}

#[test]
fn test_unknown_release_date_passes_period_filter() {
    let mut prefs = PreferenceSet::new();
    prefs.toggle_decade(Decade::new(1990));

    assert!(TrackFilters::matches_period(&track("a", Some("unknown"), 50), &prefs));
    assert!(TrackFilters::matches_period(&track("b", None, 50), &prefs));

    let no_album = Track {
        id: "c".to_string(),
        ..Default::default()
    };
    assert!(TrackFilters::matches_period(&no_album, &prefs));
}

#[test]
fn test_popularity_filter() {
    let range = PopularityRange { min: 30, max: 80 };
    assert!(TrackFilters::matches_popularity(&track("a", None, 50), &range));
    assert!(TrackFilters::matches_popularity(&track("b", None, 30), &range));
    assert!(TrackFilters::matches_popularity(&track("c", None, 80), &range));
    assert!(!TrackFilters::matches_popularity(&track("d", None, 95), &range));
    assert!(!TrackFilters::matches_popularity(&track("e", None, 10), &range));
}

#[test]
fn test_apply_without_preferences_keeps_everything() {
    let candidates = vec![
        track("a", Some("1965-01-01"), 5),
        track("b", Some("2023-01-01"), 99),
        track("c", None, 0),
    ];

    let kept = TrackFilters::apply(candidates, &PreferenceSet::new());
    assert_eq!(ids(&kept), vec!["a", "b", "c"]);
}

#[test]
fn test_apply_combines_period_and_popularity() {
    let mut prefs = PreferenceSet::new();
    prefs.toggle_decade(Decade::new(2010));
    prefs.popularity = Some(Popularity::Level(45));

    let candidates = vec![
        track("in", Some("2014-10-27"), 60),
        track("too-old", Some("2006-10-24"), 60),
        track("too-popular", Some("2017-11-10"), 95),
        track("undated", Some("????"), 40),
        track("undated-unpopular", None, 10),
    ];

    let kept = TrackFilters::apply(candidates, &prefs);
    assert_eq!(ids(&kept), vec!["in", "undated"]);
}
