//! # CLI Module
//!
//! User-facing commands of profilter. Each command builds a
//! [`SpotifyClient`](crate::spotify::SpotifyClient) from the environment,
//! delegates to [`crate::profile`] and prints the result.
//!
//! - [`top`] - ranks the tracks, artists or albums of a user's public playlists
//! - [`raw`] - prints the user's profile resource as returned by the API
//!
//! Status output (`info!`, `success!`, `warning!`) and the progress spinner
//! write to stderr. Only the requested data is written to stdout, so
//!
//! ```bash
//! profilter --albums alice | tail -n 5
//! ```
//!
//! behaves as expected.

mod raw;
mod top;

pub use raw::raw;
pub use top::{TopOptions, top};
