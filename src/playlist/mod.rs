//! # Playlist Assembly
//!
//! Turns a [`PreferenceSet`](crate::preferences::PreferenceSet) into a
//! bounded, deduplicated track list:
//!
//! ```text
//! preferences
//!     ↓
//! per-artist top tracks + per-genre searches (concurrent, failures isolated)
//!     ↓
//! candidate pool (source order)
//!     ↓
//! year range / decade filter → popularity filter
//!     ↓
//! dedupe by id → favorites first → first 30
//! ```
//!
//! A failing artist or genre request only removes that source's tracks.
//! [`Assembler::assemble`] errors out only when every source failed because
//! there was no credential or no connection.

mod assembler;
mod filters;

pub use assembler::{
    AssembleError, Assembler, Assembly, GENRE_SEARCH_LIMIT, MAX_PLAYLIST_TRACKS, Source,
    SourceOutcome, extend, finalize, fold_outcomes, sources_for,
};
pub use filters::TrackFilters;
