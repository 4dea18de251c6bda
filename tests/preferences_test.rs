use tastemix::preferences::*;
use tastemix::types::Artist;

fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: Vec::new(),
    }
}

#[test]
fn test_popularity_level_buckets() {
    let range = |v: u8| Popularity::level(v).map(|p| p.range());

    assert_eq!(range(25), Ok(PopularityRange { min: 0, max: 50 }));
    assert_eq!(range(30), Ok(PopularityRange { min: 0, max: 50 }));
    assert_eq!(range(45), Ok(PopularityRange { min: 30, max: 80 }));
    assert_eq!(range(60), Ok(PopularityRange { min: 30, max: 80 }));
    assert_eq!(range(61), Ok(PopularityRange { min: 60, max: 100 }));
    assert_eq!(range(90), Ok(PopularityRange { min: 60, max: 100 }));
}

#[test]
fn test_popularity_validation() {
    assert_eq!(
        Popularity::level(101),
        Err(PreferenceError::PopularityOutOfRange(101))
    );
    assert_eq!(
        PopularityRange::new(70, 20),
        Err(PreferenceError::InvertedPopularity { min: 70, max: 20 })
    );
    assert!(PopularityRange::new(0, 100).is_ok());
}

#[test]
fn test_popularity_range_shift_clamps() {
    let range = PopularityRange { min: 5, max: 95 };
    assert_eq!(range.shift(-10), PopularityRange { min: 0, max: 85 });
    assert_eq!(range.shift(10), PopularityRange { min: 15, max: 100 });
}

#[test]
fn test_popularity_label() {
    assert_eq!(popularity_label(10), "Deep cuts");
    assert_eq!(popularity_label(45), "Hidden gems");
    assert_eq!(popularity_label(85), "Stadium anthems");
}

#[test]
fn test_artist_limit() {
    let mut prefs = PreferenceSet::new();
    for i in 0..MAX_SELECTED_ARTISTS {
        assert_eq!(prefs.add_artist(artist(&i.to_string(), "A")), Ok(true));
    }

    assert_eq!(
        prefs.add_artist(artist("extra", "Extra")),
        Err(PreferenceError::ArtistLimitReached)
    );
    // Re-adding a selected artist is not an error
    assert_eq!(prefs.add_artist(artist("0", "A")), Ok(false));
    assert_eq!(prefs.artists.len(), MAX_SELECTED_ARTISTS);

    assert!(prefs.remove_artist("0"));
    assert!(!prefs.remove_artist("0"));
    assert_eq!(prefs.add_artist(artist("extra", "Extra")), Ok(true));
}

#[test]
fn test_genre_toggle_is_case_insensitive() {
    let mut prefs = PreferenceSet::new();

    assert!(prefs.toggle_genre("Indie Pop"));
    assert!(prefs.has_genre("indie pop"));
    assert!(!prefs.add_genre("  INDIE POP "));
    assert_eq!(prefs.genres, vec!["Indie Pop".to_string()]);

    assert!(!prefs.toggle_genre("indie pop"));
    assert!(prefs.genres.is_empty());
}

#[test]
fn test_blank_genre_ignored() {
    let mut prefs = PreferenceSet::new();
    assert!(!prefs.add_genre("   "));
    assert!(prefs.genres.is_empty());
}

#[test]
fn test_query_genres_caps_at_five() {
    let mut prefs = PreferenceSet::new();
    prefs.genres = vec!["Pop", "pop", "rock", "folk", "indie", "country", "electropop"]
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(
        prefs.query_genres(),
        vec!["Pop", "rock", "folk", "indie", "country"]
    );
}

#[test]
fn test_decade_parse_and_bounds() {
    let decade: Decade = "1980".parse().unwrap();
    assert_eq!(decade, "1980s".parse::<Decade>().unwrap());
    assert_eq!(decade.start(), 1980);
    assert_eq!(decade.end(), 1989);
    assert!(decade.contains(1985));
    assert!(!decade.contains(1990));
    assert_eq!(decade.to_string(), "1980s");

    assert!("eighties".parse::<Decade>().is_err());
    assert!("-10".parse::<Decade>().is_err());
    assert!("1985".parse::<Decade>().is_err());
}

#[test]
fn test_toggle_decade() {
    let mut prefs = PreferenceSet::new();
    assert!(!prefs.has_period_filter());

    assert!(prefs.toggle_decade(Decade::new(2010)));
    assert!(prefs.has_period_filter());
    assert!(!prefs.toggle_decade(Decade::new(2010)));
    assert!(prefs.decades.is_empty());
}

#[test]
fn test_year_range() {
    assert_eq!(
        YearRange::new(Some(2012), Some(2008)),
        Err(PreferenceError::InvertedYearRange {
            from: 2012,
            to: 2008
        })
    );

    let range = YearRange::new(Some(2008), Some(2012)).unwrap();
    assert!(range.is_active());
    assert!(range.contains(2008));
    assert!(range.contains(2012));
    assert!(!range.contains(2015));

    let open = YearRange::new(None, Some(2000)).unwrap();
    assert!(open.contains(1950));
    assert!(!open.contains(2001));

    assert!(!YearRange::new(None, None).unwrap().is_active());
}

#[test]
fn test_release_year() {
    assert_eq!(release_year("1985-06-01"), Some(1985));
    assert_eq!(release_year("1985-06"), Some(1985));
    assert_eq!(release_year("1985"), Some(1985));
    assert_eq!(release_year("n/a"), None);
    assert_eq!(release_year(""), None);
}

#[test]
fn test_mood_preset_parse() {
    assert_eq!("folklore".parse::<MoodPreset>(), Ok(MoodPreset::Folklore));
    assert_eq!("Speak Now".parse::<MoodPreset>(), Ok(MoodPreset::SpeakNow));
    assert_eq!("speak-now".parse::<MoodPreset>(), Ok(MoodPreset::SpeakNow));
    assert_eq!("1989".parse::<MoodPreset>(), Ok(MoodPreset::NineteenEightyNine));
    assert_eq!(
        "vaporwave".parse::<MoodPreset>(),
        Err(PreferenceError::UnknownMood("vaporwave".to_string()))
    );
}

#[test]
fn test_mood_tuning() {
    let mood = Mood::from_preset(MoodPreset::Red)
        .tuned(Some(20), None, None, Some(90))
        .unwrap();
    assert_eq!(mood.preset, Some(MoodPreset::Red));
    assert_eq!(mood.energy, 20);
    assert_eq!(mood.valence, MoodPreset::Red.values().1);
    assert_eq!(mood.acousticness, 90);

    assert_eq!(
        Mood::default().tuned(None, Some(120), None, None),
        Err(PreferenceError::MoodValueOutOfRange("valence", 120))
    );
}

#[test]
fn test_adjust_intimate_mood_lowers_popularity() {
    let mut prefs = PreferenceSet::new();
    prefs.popularity = Some(Popularity::Level(45));

    let adjusted = adjust(&prefs, &Mood::from_preset(MoodPreset::Folklore));

    assert_eq!(
        adjusted.popularity_range(),
        Some(PopularityRange { min: 20, max: 70 })
    );
    // Input is left untouched
    assert_eq!(prefs.popularity, Some(Popularity::Level(45)));
}

#[test]
fn test_adjust_anthemic_mood_raises_popularity() {
    let mut prefs = PreferenceSet::new();
    prefs.popularity = Some(Popularity::Range(PopularityRange { min: 60, max: 100 }));

    let adjusted = adjust(&prefs, &Mood::from_preset(MoodPreset::Lover));

    assert_eq!(
        adjusted.popularity_range(),
        Some(PopularityRange { min: 70, max: 100 })
    );
}

#[test]
fn test_adjust_neutral_or_no_popularity_is_noop() {
    let mut prefs = PreferenceSet::new();
    prefs.popularity = Some(Popularity::Level(45));
    assert_eq!(adjust(&prefs, &Mood::from_preset(MoodPreset::Red)), prefs);
    assert_eq!(adjust(&prefs, &Mood::default()), prefs);

    let bare = PreferenceSet::new();
    assert_eq!(adjust(&bare, &Mood::from_preset(MoodPreset::Evermore)), bare);
}

#[test]
fn test_with_mood_bias_uses_own_mood() {
    let mut prefs = PreferenceSet::new();
    prefs.popularity = Some(Popularity::Level(20));
    prefs.mood = Some(Mood::from_preset(MoodPreset::Ttpd));

    let biased = prefs.with_mood_bias();
    assert_eq!(
        biased.popularity_range(),
        Some(PopularityRange { min: 0, max: 40 })
    );
}

#[test]
fn test_clear_keeps_favorites() {
    let mut prefs = PreferenceSet::new().with_favorites(vec![tastemix::types::Track {
        id: "fav".to_string(),
        ..Default::default()
    }]);
    prefs.add_genre("pop");
    prefs.toggle_decade(Decade::new(1990));
    prefs.popularity = Some(Popularity::Level(50));

    prefs.clear();

    assert!(prefs.genres.is_empty());
    assert!(prefs.decades.is_empty());
    assert!(prefs.popularity.is_none());
    assert_eq!(prefs.favorite_tracks.len(), 1);
}

#[test]
fn test_preferences_serde_skips_favorites() {
    let mut prefs = PreferenceSet::new().with_favorites(vec![tastemix::types::Track {
        id: "fav".to_string(),
        ..Default::default()
    }]);
    prefs.add_genre("folk");
    prefs.popularity = Some(Popularity::Level(40));
    prefs.toggle_decade(Decade::new(2010));

    let json = serde_json::to_string(&prefs).unwrap();
    assert!(!json.contains("fav"));

    let back: PreferenceSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back.genres, vec!["folk".to_string()]);
    assert_eq!(back.popularity, Some(Popularity::Level(40)));
    assert_eq!(back.decades, vec![Decade::new(2010)]);
    assert!(back.favorite_tracks.is_empty());
}

#[test]
fn test_decade_deserialize_requires_decade_start() {
    let decades: Vec<Decade> = serde_json::from_str("[1980, 2020]").unwrap();
    assert_eq!(decades, vec![Decade::new(1980), Decade::new(2020)]);
    assert_eq!(serde_json::to_string(&decades).unwrap(), "[1980,2020]");

    assert!(serde_json::from_str::<Decade>("1985").is_err());
    assert!(serde_json::from_str::<Decade>("-10").is_err());
}

#[test]
fn test_popularity_deserialize_validates() {
    assert_eq!(
        serde_json::from_str::<Popularity>("45").unwrap(),
        Popularity::Level(45)
    );
    assert_eq!(
        serde_json::from_str::<Popularity>(r#"{"min":20,"max":70}"#).unwrap(),
        Popularity::Range(PopularityRange { min: 20, max: 70 })
    );

    assert!(serde_json::from_str::<Popularity>("150").is_err());
    assert!(serde_json::from_str::<PopularityRange>(r#"{"min":80,"max":20}"#).is_err());
    assert!(serde_json::from_str::<PopularityRange>(r#"{"min":0,"max":120}"#).is_err());
    assert!(serde_json::from_str::<Popularity>(r#"{"min":80,"max":20}"#).is_err());
}

#[test]
fn test_year_range_deserialize_validates() {
    let range: YearRange = serde_json::from_str(r#"{"from_year":2008,"to_year":null}"#).unwrap();
    assert_eq!(range, YearRange::new(Some(2008), None).unwrap());

    assert!(serde_json::from_str::<YearRange>(r#"{"from_year":2012,"to_year":2008}"#).is_err());
}
