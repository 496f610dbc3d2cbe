use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// One page of a paginated Spotify collection.
///
/// Only `next` and `items` drive traversal; the remaining fields are carried
/// for completeness. A page without `items` is treated as the end of the
/// collection by the fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub href: Option<String>,
    pub items: Option<Vec<T>>,
    pub limit: Option<u64>,
    pub next: Option<String>,
    pub offset: Option<u64>,
    pub previous: Option<String>,
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// Returns the URL of the following page, ignoring empty strings.
    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }
}

/// Something that can be counted in a frequency table.
pub trait Entity {
    /// Stable identity used to deduplicate occurrences.
    fn key(&self) -> String;

    fn name(&self) -> &str;
}

// Local files come back with null ids and uris.
fn entity_key(id: &Option<String>, uri: &Option<String>, name: &str) -> String {
    id.clone()
        .or_else(|| uri.clone())
        .unwrap_or_else(|| format!("name:{name}"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub uri: Option<String>,
}

impl Entity for Artist {
    fn key(&self) -> String {
        entity_key(&self.id, &self.uri, &self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub uri: Option<String>,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
}

impl Entity for Album {
    fn key(&self) -> String {
        entity_key(&self.id, &self.uri, &self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub uri: Option<String>,
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
}

impl Entity for Track {
    fn key(&self) -> String {
        entity_key(&self.id, &self.uri, &self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrapper around a track inside a playlist.
///
/// `track` is null for tracks that were removed from the catalog or are not
/// available to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    pub is_local: Option<bool>,
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksRef {
    pub href: String,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub public: Option<bool>,
    pub owner: Option<PlaylistOwner>,
    pub tracks: TracksRef,
}

/// Public profile of a Spotify user.
///
/// The JSON object is stored exactly as the API returned it, `null` fields
/// included, and serializes back to the same value. Commonly used fields are
/// read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    fields: Map<String, Value>,
}

impl UserProfile {
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// Name shown on the profile; Spotify sends `null` for some users.
    pub fn display_name(&self) -> Option<&str> {
        self.str_field("display_name")
    }

    /// Every field of the profile, unmodified.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

#[derive(Tabled)]
pub struct RankTableRow {
    pub occurrences: u32,
    pub name: String,
}
