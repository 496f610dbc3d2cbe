//! Configuration management for profilter.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the local data directory. Process environment variables win over
//! entries in the file.
//!
//! | Variable          | Required | Meaning                                     |
//! |-------------------|----------|---------------------------------------------|
//! | `API_KEY`         | yes      | Bearer token sent with every request        |
//! | `SPOTIFY_API_URL` | no       | API base URL, defaults to [`DEFAULT_API_URL`] |
//! | `SPOTIFY_USER_ID` | no       | Username used when none is passed on the CLI |

use std::{env, fmt, path::PathBuf};

use reqwest::Url;

use crate::error::{ProfilterError, Result};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

const API_KEY_VAR: &str = "API_KEY";
const API_URL_VAR: &str = "SPOTIFY_API_URL";
const USER_VAR: &str = "SPOTIFY_USER_ID";

/// Loads environment variables from `profilter/.env` in the local data directory.
///
/// The parent directory is created if it does not exist yet. A missing `.env`
/// file is not an error since every value may also be supplied through the
/// process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/profilter/.env`
/// - macOS: `~/Library/Application Support/profilter/.env`
/// - Windows: `%LOCALAPPDATA%/profilter/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the configured API key, treating a blank value as unset.
pub fn api_key() -> Option<String> {
    non_blank(env::var(API_KEY_VAR).ok())
}

/// Returns the Spotify Web API base URL, falling back to [`DEFAULT_API_URL`].
pub fn spotify_apiurl() -> String {
    non_blank(env::var(API_URL_VAR).ok()).unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the default username to look up.
pub fn spotify_user() -> Option<String> {
    non_blank(env::var(USER_VAR).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("profilter/.env");
    path
}

/// Resolved settings handed to the API client at construction time.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    api_url: Url,
}

impl Config {
    /// Builds a configuration from an API key and the API base URL.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token sent with every request
    /// * `api_url` - Base URL such as `https://api.spotify.com/v1`; trailing
    ///   slashes are ignored
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the key is blank or the base URL
    /// cannot carry a path.
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProfilterError::configuration(format!(
                "You must provide an api key in the {API_KEY_VAR} env var"
            )));
        }

        let raw_url = api_url.into();
        let api_url = Url::parse(raw_url.trim_end_matches('/'))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                ProfilterError::configuration(format!(
                    "{API_URL_VAR} is not a valid base URL: {raw_url}"
                ))
            })?;
        Ok(Self { api_key, api_url })
    }

    /// Reads the configuration from the environment, failing fast when
    /// `API_KEY` is absent.
    pub fn from_env() -> Result<Self> {
        let api_key = api_key().ok_or_else(|| {
            ProfilterError::configuration(format!(
                "You must provide an api key in the {API_KEY_VAR} env var"
            ))
        })?;
        Self::new(api_key, spotify_apiurl())
    }

    /// Bearer token for the `Authorization` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL every endpoint is resolved against.
    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    ///
    /// Characters such as `/`, `?` and `#` inside a segment stay part of that
    /// segment instead of changing the path, query or fragment.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let url = config.endpoint(&["users", "a?b"]);
    /// // "https://api.spotify.com/v1/users/a%3Fb"
    /// ```
    pub fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}
