use std::{collections::HashSet, fmt, sync::Arc, time::Duration};

use tokio::task::JoinSet;

use super::filters::TrackFilters;
use crate::{
    config,
    preferences::PreferenceSet,
    spotify::{CatalogAccess, FetchError},
    types::Track,
    utils,
};

pub const MAX_PLAYLIST_TRACKS: usize = 30;
pub const GENRE_SEARCH_LIMIT: u32 = 10;

/// One catalog request feeding the candidate pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Artist { id: String, name: String },
    Genre(String),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Artist { name, .. } => write!(f, "artist '{}'", name),
            Source::Genre(genre) => write!(f, "genre '{}'", genre),
        }
    }
}

#[derive(Debug)]
pub struct SourceOutcome {
    pub source: Source,
    pub result: Result<Vec<Track>, FetchError>,
}

#[derive(Debug)]
pub enum AssembleError {
    /// Every source failed because no access token was available.
    MissingCredential,
    /// Every source failed before reaching the catalog.
    CatalogUnreachable(FetchError),
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::MissingCredential => write!(f, "not signed in to Spotify"),
            AssembleError::CatalogUnreachable(e) => write!(f, "Spotify is unreachable: {}", e),
        }
    }
}

impl std::error::Error for AssembleError {}

/// Result of one assembly plus the sources that contributed nothing because
/// their request failed.
#[derive(Debug, Default)]
pub struct Assembly {
    pub tracks: Vec<Track>,
    pub skipped: Vec<(Source, FetchError)>,
}

/// Builds playlists from the catalog. Stateless apart from its settings;
/// the same assembler can serve any number of calls.
pub struct Assembler<C> {
    catalog: Arc<C>,
    market: String,
    fetch_timeout: Duration,
}

impl<C: CatalogAccess + 'static> Assembler<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            market: config::spotify_market(),
            fetch_timeout: config::fetch_timeout(),
        }
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub async fn assemble(&self, preferences: &PreferenceSet) -> Result<Vec<Track>, AssembleError> {
        Ok(self.assemble_with_report(preferences).await?.tracks)
    }

    pub async fn assemble_with_report(
        &self,
        preferences: &PreferenceSet,
    ) -> Result<Assembly, AssembleError> {
        let outcomes = self.fetch_sources(preferences).await;
        let (candidates, skipped) = fold_outcomes(outcomes)?;
        Ok(Assembly {
            tracks: finalize(candidates, preferences),
            skipped,
        })
    }

    /// Assembles a fresh batch and appends its new tracks to `existing`.
    /// The result is not capped.
    pub async fn extend(
        &self,
        existing: Vec<Track>,
        preferences: &PreferenceSet,
    ) -> Result<Vec<Track>, AssembleError> {
        let more = self.assemble(preferences).await?;
        Ok(extend(existing, more))
    }

    /// Fetches every source concurrently. Outcomes come back in source
    /// order regardless of completion order. Dropping the returned future
    /// aborts requests still in flight.
    pub async fn fetch_sources(&self, preferences: &PreferenceSet) -> Vec<SourceOutcome> {
        let sources = sources_for(preferences);
        let mut set = JoinSet::new();

        for (index, source) in sources.iter().cloned().enumerate() {
            let catalog = Arc::clone(&self.catalog);
            let market = self.market.clone();
            let timeout = self.fetch_timeout;

            set.spawn(async move {
                let fetch = async {
                    match &source {
                        Source::Artist { id, .. } => {
                            catalog.get_artist_top_tracks(id, &market).await
                        }
                        Source::Genre(genre) => {
                            catalog
                                .search_tracks_by_genre(genre, GENRE_SEARCH_LIMIT)
                                .await
                        }
                    }
                };
                let result = match tokio::time::timeout(timeout, fetch).await {
                    Ok(result) => result,
                    Err(_) => Err(FetchError::Timeout(timeout)),
                };
                (index, result)
            });
        }

        let mut results: Vec<Option<Result<Vec<Track>, FetchError>>> =
            sources.iter().map(|_| None).collect();
        while let Some(joined) = set.join_next().await {
            if let Ok((index, result)) = joined {
                results[index] = Some(result);
            }
        }

        sources
            .into_iter()
            .zip(results)
            .map(|(source, result)| SourceOutcome {
                source,
                result: result.unwrap_or(Err(FetchError::Aborted)),
            })
            .collect()
    }
}

/// Artists in selection order, then the capped genre list.
pub fn sources_for(preferences: &PreferenceSet) -> Vec<Source> {
    let artists = preferences.artists.iter().map(|a| Source::Artist {
        id: a.id.clone(),
        name: a.name.clone(),
    });
    let genres = preferences.query_genres().into_iter().map(Source::Genre);
    artists.chain(genres).collect()
}

/// Concatenates successful results into the candidate pool and sets failed
/// sources aside. Fails only when every source failed for the same
/// systemic reason: no credential, or no connection to the catalog.
pub fn fold_outcomes(
    outcomes: Vec<SourceOutcome>,
) -> Result<(Vec<Track>, Vec<(Source, FetchError)>), AssembleError> {
    let all_failed = !outcomes.is_empty() && outcomes.iter().all(|o| o.result.is_err());

    let mut candidates = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(tracks) => candidates.extend(tracks),
            Err(e) => skipped.push((outcome.source, e)),
        }
    }

    if all_failed {
        if skipped
            .iter()
            .all(|(_, e)| matches!(e, FetchError::MissingCredential))
        {
            return Err(AssembleError::MissingCredential);
        }
        if skipped.iter().all(|(_, e)| e.is_systemic()) {
            let (_, first) = skipped.swap_remove(0);
            return Err(AssembleError::CatalogUnreachable(first));
        }
    }

    Ok((candidates, skipped))
}

/// Filter, dedupe, put favorites first, cap.
///
/// Favorites skip filtering and always lead the list (deduplicated by id);
/// candidates sharing an id with a favorite are dropped.
pub fn finalize(candidates: Vec<Track>, preferences: &PreferenceSet) -> Vec<Track> {
    let mut filtered = TrackFilters::apply(candidates, preferences);
    utils::remove_duplicate_tracks(&mut filtered);

    let mut merged = preferences.favorite_tracks.clone();
    utils::remove_duplicate_tracks(&mut merged);

    let favorite_ids: HashSet<String> = merged.iter().map(|t| t.id.clone()).collect();
    merged.extend(filtered.into_iter().filter(|t| !favorite_ids.contains(&t.id)));
    merged.truncate(MAX_PLAYLIST_TRACKS);
    merged
}

/// Union by id: every existing track in place, then the new ones in order.
pub fn extend(existing: Vec<Track>, more: Vec<Track>) -> Vec<Track> {
    let mut merged = existing;
    merged.extend(more);
    utils::remove_duplicate_tracks(&mut merged);
    merged
}
