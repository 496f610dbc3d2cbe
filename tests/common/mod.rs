#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use profilter::{
    config::Config,
    error::{ProfilterError, Result},
    spotify::Requester,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

pub const BASE: &str = "https://api.test/v1";

/// In-memory requester serving canned JSON bodies by URL.
pub struct MockRequester {
    config: Config,
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl MockRequester {
    pub fn new() -> Self {
        Self {
            config: Config::new("test-token", BASE).unwrap(),
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), body);
        self
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Requester for MockRequester {
    fn endpoint(&self, segments: &[&str]) -> String {
        self.config.endpoint(segments)
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        self.requests.lock().unwrap().push(url.to_string());
        let body = self
            .responses
            .get(url)
            .cloned()
            .ok_or_else(|| ProfilterError::request(url, format!("no response for {}", url)))?;
        serde_json::from_value(body).map_err(|e| ProfilterError::request(url, e))
    }
}

pub fn url(path: &str) -> String {
    format!("{}/{}", BASE, path)
}

pub fn page(items: Vec<Value>, next: Option<&str>) -> Value {
    json!({
        "href": "ignored",
        "items": items,
        "limit": 50,
        "next": next,
        "offset": 0,
        "previous": null,
        "total": 0
    })
}

pub fn user(id: &str) -> Value {
    json!({
        "id": id,
        "display_name": id.to_uppercase(),
        "uri": format!("spotify:user:{}", id),
        "type": "user",
        "external_urls": { "spotify": format!("https://open.spotify.com/user/{}", id) },
        "followers": { "href": null, "total": 7 }
    })
}

pub fn playlist(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "public": true,
        "owner": { "id": "owner", "display_name": "Owner" },
        "tracks": { "href": url(&format!("playlists/{}/tracks", id)), "total": 0 }
    })
}

pub fn tracks_url(playlist_id: &str) -> String {
    url(&format!("playlists/{}/tracks", playlist_id))
}

pub fn track(id: &str, album: (&str, &str), artists: &[(&str, &str)]) -> Value {
    json!({
        "added_at": "2024-01-01T00:00:00Z",
        "is_local": false,
        "track": {
            "id": id,
            "name": format!("Track {}", id),
            "uri": format!("spotify:track:{}", id),
            "duration_ms": 180000,
            "album": {
                "id": album.0,
                "name": album.1,
                "uri": format!("spotify:album:{}", album.0),
                "album_type": "album",
                "release_date": "1969-09-26"
            },
            "artists": artists
                .iter()
                .map(|(id, name)| json!({
                    "id": id,
                    "name": name,
                    "uri": format!("spotify:artist:{}", id)
                }))
                .collect::<Vec<_>>()
        }
    })
}

pub fn unavailable_track() -> Value {
    json!({ "added_at": "2024-01-01T00:00:00Z", "is_local": false, "track": null })
}
