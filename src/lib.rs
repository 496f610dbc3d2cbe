//! Spotify Playlist Profiler Library
//!
//! This library ranks the tracks, artists and albums that appear most often in
//! a Spotify user's public playlists. It walks the paginated playlist
//! collections of the Spotify Web API, applies optional filters and counts
//! every entity it encounters.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every module
//! - `profile` - Playlist aggregation, filters and frequency tables
//! - `spotify` - Spotify Web API requester and pagination
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use profilter::{config::Config, profile, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> profilter::error::Result<()> {
//!     let client = SpotifyClient::new(Config::from_env()?);
//!     let p = profile::aggregate(&client, "spotify", &[]).await?;
//!     println!("{} artists", p.artists.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod profile;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Messages go to stderr so that rankings written to stdout can be piped.
///
/// # Example
///
/// ```
/// info!("Looking up {}...", username);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Counted {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only used
/// for fatal errors at the top level of the binary.
///
/// # Example
///
/// ```
/// error!("You must provide a username");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No track matched the given filters");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
