//! # Spotify Integration Module
//!
//! Read-only access to the Spotify Web API used by the profile aggregation.
//!
//! ```text
//! Aggregation (crate::profile)
//!          ↓
//! Paginated Fetcher (pagination)
//!          ↓
//! Authenticated Requester (Requester / SpotifyClient)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Requests
//!
//! Every call is a single `GET` carrying `Authorization: Bearer <API_KEY>`.
//! The body is decoded straight into the record type the caller asks for.
//! Transport errors, non-success statuses and undecodable bodies all surface
//! as [`ProfilterError::Request`](crate::error::ProfilterError::Request).
//! Nothing is retried: a failed request ends the run.
//!
//! ## Pagination
//!
//! Collections such as a user's playlists or a playlist's tracks are split
//! into pages linked by a `next` URL. [`pagination::fetch_all`] walks that
//! chain one request at a time, since the URL of a page is only known once
//! the previous one has arrived.
//!
//! ## Endpoints
//!
//! - `GET /users/{user_id}` - public profile
//! - `GET /users/{user_id}/playlists` - public playlists (paginated)
//! - `GET /playlists/{playlist_id}/tracks` - playlist tracks (paginated, URL
//!   taken from the playlist record)

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::Result;

pub mod client;
pub mod pagination;

pub use client::SpotifyClient;

/// Issues authenticated `GET` requests against the API.
///
/// [`SpotifyClient`] is the HTTP implementation. The aggregation code only
/// depends on this trait.
pub trait Requester {
    /// Resolves API path segments such as `["users", "alice"]` to a full URL.
    ///
    /// Each segment is percent-encoded, so a username can never leak into the
    /// query, the fragment or another path segment.
    fn endpoint(&self, segments: &[&str]) -> String;

    /// Fetches `url` and decodes the JSON body into `T`.
    fn get_json<T>(&self, url: &str) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send;
}
