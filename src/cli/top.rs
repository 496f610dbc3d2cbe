use tabled::Table;

use crate::{
    error::Result,
    info,
    profile::{self, Filter, Ranking},
    spotify::SpotifyClient,
    success,
    types::RankTableRow,
    utils, warning,
};

/// Display settings for a ranking.
#[derive(Debug, Clone, Default)]
pub struct TopOptions {
    pub ranking: Ranking,
    /// Most frequent entries first.
    pub reverse: bool,
    /// Keep only this many of the most frequent entries.
    pub limit: Option<usize>,
    /// Render a table instead of tab-separated lines.
    pub table: bool,
}

/// Aggregates the public playlists of `username` and prints the selected
/// ranking.
///
/// By default every entry is printed as `<occurrences>\t<name>`, least
/// frequent first.
///
/// # Errors
///
/// Fails before any request when no API key is configured, and aborts on the
/// first failed request.
pub async fn top(username: &str, filters: &[Filter], options: &TopOptions) -> Result<()> {
    let client = SpotifyClient::from_env()?;

    info!("Looking up {}...", username);
    for filter in filters {
        info!("Only counting tracks where {}", filter);
    }

    let pb = utils::spinner("Fetching playlists...");
    let result = profile::aggregate_with_progress(&client, username, filters, |progress| {
        pb.set_message(format!(
            "Fetching playlist {}/{}: {}",
            progress.position, progress.total, progress.playlist.name
        ));
    })
    .await;
    pb.finish_and_clear();
    let profile = result?;

    let owner = profile
        .profile
        .display_name()
        .or(profile.profile.id())
        .unwrap_or(username);
    success!(
        "Counted {} tracks from {} playlists of {}",
        profile.tracks.len(),
        profile.playlist_count,
        owner
    );

    let entries = utils::select_entries(
        profile.ranking(options.ranking),
        options.reverse,
        options.limit,
    );
    if entries.is_empty() {
        warning!("Nothing to rank for {}", username);
        return Ok(());
    }

    if options.table {
        let rows: Vec<RankTableRow> = entries
            .iter()
            .map(|entry| RankTableRow {
                occurrences: entry.occurrences,
                name: entry.name.to_string(),
            })
            .collect();
        println!("{}", Table::new(rows));
    } else {
        println!("{}", utils::render_lines(&entries));
    }

    Ok(())
}
