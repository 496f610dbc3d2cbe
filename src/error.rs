//! Error taxonomy for profile aggregation.
//!
//! Every failure that can abort a run is one of two kinds: a configuration
//! problem detected before any network activity, or a failed request against
//! the Spotify Web API. Neither is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfilterError {
    /// A required setting (API key, username) is missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network failure, non-success status or undecodable body.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ProfilterError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ProfilterError::Configuration(message.into())
    }

    pub fn request(
        url: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ProfilterError::Request {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn is_request_failure(&self) -> bool {
        matches!(self, ProfilterError::Request { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProfilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_not_request_failures() {
        let err = ProfilterError::configuration("API_KEY must be set");
        assert!(!err.is_request_failure());
        assert_eq!(err.to_string(), "configuration error: API_KEY must be set");
    }

    #[test]
    fn decode_failures_are_request_failures() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ProfilterError::request("https://api.example/v1/users/x", source);
        assert!(err.is_request_failure());
        assert!(err.to_string().contains("https://api.example/v1/users/x"));
    }
}
