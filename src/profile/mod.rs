//! # Profile Aggregation
//!
//! Turns a user's public playlists into frequency tables of tracks, artists
//! and albums.
//!
//! A [`Profile`] is built once per run by [`aggregate`] and is read-only
//! afterwards. Its tables are keyed by entity id and count how many playlist
//! entries referenced each entity after [`Filter`]s were applied.

mod aggregate;
mod filter;
mod table;

pub use aggregate::{PlaylistProgress, aggregate, aggregate_with_progress, fetch_raw_profile};
pub use filter::{Filter, keep};
pub use table::{FrequencyTable, OccurrenceEntry};

use crate::types::{Album, Artist, Entity, Track, UserProfile};

/// Which table of a profile to rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    Tracks,
    #[default]
    Artists,
    Albums,
}

/// One line of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub occurrences: u32,
    pub name: &'a str,
}

/// Result of aggregating a user's playlists.
#[derive(Debug, Clone)]
pub struct Profile {
    pub profile: UserProfile,
    pub playlist_count: usize,
    pub tracks: FrequencyTable<Track>,
    pub artists: FrequencyTable<Artist>,
    pub albums: FrequencyTable<Album>,
}

impl Profile {
    /// Entries of the selected table, least frequent first.
    pub fn ranking(&self, ranking: Ranking) -> Vec<RankedEntry<'_>> {
        match ranking {
            Ranking::Tracks => ranked_entries(&self.tracks),
            Ranking::Artists => ranked_entries(&self.artists),
            Ranking::Albums => ranked_entries(&self.albums),
        }
    }
}

fn ranked_entries<T: Entity + Clone>(table: &FrequencyTable<T>) -> Vec<RankedEntry<'_>> {
    table
        .ranked()
        .into_iter()
        .map(|entry| RankedEntry {
            occurrences: entry.occurrences,
            name: entry.item.name(),
        })
        .collect()
}
