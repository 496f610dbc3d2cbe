use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{ProfilterError, Result},
    spotify::Requester,
};

/// HTTP implementation of [`Requester`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Config,
}

impl SpotifyClient {
    /// Creates a client for an already validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - API key and base URL every request is made with.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = Config::new("token", "https://api.spotify.com/v1")?;
    /// let client = SpotifyClient::new(config);
    /// ```
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Builds a client from the environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `API_KEY` is not set. No request is
    /// made in that case.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }
}

impl Requester for SpotifyClient {
    fn endpoint(&self, segments: &[&str]) -> String {
        self.config.endpoint(segments)
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(self.config.api_key())
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| ProfilterError::request(url, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ProfilterError::request(url, e))?;

        serde_json::from_slice(&body).map_err(|e| ProfilterError::request(url, e))
    }
}
