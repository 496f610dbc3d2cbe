use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::{ProfilterError, Result},
    profile::RankedEntry,
};

/// Picks the username given on the command line, falling back to the
/// configured default.
pub fn resolve_username(cli: Option<String>, configured: Option<String>) -> Result<String> {
    cli.filter(|u| !u.trim().is_empty())
        .or(configured)
        .ok_or_else(|| ProfilterError::configuration("You must provide a username"))
}

/// Trims and orders a ranking for display.
///
/// `limit` keeps the most frequent entries. The remaining entries stay least
/// frequent first unless `reverse` is set.
pub fn select_entries(
    mut entries: Vec<RankedEntry<'_>>,
    reverse: bool,
    limit: Option<usize>,
) -> Vec<RankedEntry<'_>> {
    if let Some(limit) = limit {
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
    }
    if reverse {
        entries.reverse();
    }
    entries
}

/// Renders one `<occurrences>\t<name>` line per entry.
pub fn render_lines(entries: &[RankedEntry<'_>]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\t{}", entry.occurrences, entry.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Starts a ticking stderr spinner.
///
/// # Arguments
///
/// * `message` - Initial text shown next to the spinner. It can be replaced
///   later with `set_message`.
///
/// # Returns
///
/// The running spinner. Call `finish_and_clear` once the work is done.
///
/// # Example
///
/// ```ignore
/// let pb = spinner("Fetching playlists...");
/// // ... long-running work ...
/// pb.finish_and_clear();
/// ```
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
