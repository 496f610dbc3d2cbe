use std::fmt;

use crate::types::Track;

/// A user-supplied condition a track has to satisfy to be counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// The track's album name equals the value exactly (case-sensitive).
    AlbumName(String),
    /// Every credited artist's name equals the value exactly.
    ///
    /// A track by several artists only passes if all of them carry this name.
    ArtistName(String),
}

impl Filter {
    /// Checks `track` against this filter.
    ///
    /// # Arguments
    ///
    /// * `track` - A playlist track whose album and artists are compared by
    ///   exact name.
    ///
    /// # Returns
    ///
    /// `true` when the track passes. A track without an album never passes an
    /// album filter; a track without credited artists always passes an artist
    /// filter.
    pub fn matches(&self, track: &Track) -> bool {
        match self {
            Filter::AlbumName(name) => track
                .album
                .as_ref()
                .is_some_and(|album| album.name == *name),
            Filter::ArtistName(name) => track.artists.iter().all(|artist| artist.name == *name),
        }
    }

    /// The name the filter compares against.
    pub fn value(&self) -> &str {
        match self {
            Filter::AlbumName(name) | Filter::ArtistName(name) => name,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            Filter::AlbumName(_) => "album",
            Filter::ArtistName(_) => "artist",
        };
        write!(f, "{} = {:?}", field, self.value())
    }
}

/// Returns `true` when `track` satisfies every filter. An empty slice keeps
/// every track.
pub fn keep(track: &Track, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.matches(track))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Album, Artist};

    fn track(album: Option<&str>, artists: &[&str]) -> Track {
        Track {
            id: Some("t".to_string()),
            name: "Track".to_string(),
            uri: None,
            duration_ms: None,
            artists: artists
                .iter()
                .map(|name| Artist {
                    id: Some(name.to_lowercase()),
                    name: name.to_string(),
                    uri: None,
                })
                .collect(),
            album: album.map(|name| Album {
                id: Some("a".to_string()),
                name: name.to_string(),
                uri: None,
                album_type: None,
                release_date: None,
            }),
        }
    }

    #[test]
    fn album_filter_is_exact_and_case_sensitive() {
        let filter = Filter::AlbumName("Abbey Road".to_string());
        assert!(filter.matches(&track(Some("Abbey Road"), &["The Beatles"])));
        assert!(!filter.matches(&track(Some("abbey road"), &["The Beatles"])));
        assert!(!filter.matches(&track(Some("Abbey Road (Remastered)"), &[])));
        assert!(!filter.matches(&track(None, &["The Beatles"])));
    }

    #[test]
    fn artist_filter_requires_every_artist_to_match() {
        let filter = Filter::ArtistName("Daft Punk".to_string());
        assert!(filter.matches(&track(None, &["Daft Punk"])));
        assert!(!filter.matches(&track(None, &["Daft Punk", "Pharrell Williams"])));
        assert!(filter.matches(&track(None, &["Daft Punk", "Daft Punk"])));
        // no credited artists: nothing contradicts the filter
        assert!(filter.matches(&track(None, &[])));
    }

    #[test]
    fn keep_combines_filters_with_and() {
        let t = track(Some("Discovery"), &["Daft Punk"]);
        assert!(keep(&t, &[]));
        assert!(keep(
            &t,
            &[
                Filter::ArtistName("Daft Punk".to_string()),
                Filter::AlbumName("Discovery".to_string()),
            ]
        ));
        assert!(!keep(
            &t,
            &[
                Filter::ArtistName("Daft Punk".to_string()),
                Filter::AlbumName("Homework".to_string()),
            ]
        ));
    }

    #[test]
    fn display_names_the_field() {
        assert_eq!(
            Filter::AlbumName("Homework".to_string()).to_string(),
            "album = \"Homework\""
        );
        assert_eq!(
            Filter::ArtistName("Daft Punk".to_string()).to_string(),
            "artist = \"Daft Punk\""
        );
    }
}
