use log::debug;
use serde_json::Value;

use crate::{
    error::Result,
    profile::{Filter, FrequencyTable, Profile, filter},
    spotify::{Requester, pagination},
    types::{Playlist, PlaylistItem, UserProfile},
};

/// Position of the playlist currently being fetched.
#[derive(Debug, Clone, Copy)]
pub struct PlaylistProgress<'a> {
    /// 1-based index of the playlist.
    pub position: usize,
    pub total: usize,
    pub playlist: &'a Playlist,
}

/// Builds the listening profile of `username` from their public playlists.
///
/// See [`aggregate_with_progress`].
pub async fn aggregate<R: Requester>(
    requester: &R,
    username: &str,
    filters: &[Filter],
) -> Result<Profile> {
    aggregate_with_progress(requester, username, filters, |_| {}).await
}

/// Builds the listening profile of `username`, reporting each playlist to
/// `on_playlist` before its tracks are fetched.
///
/// The profile resource and the playlist collection are fetched concurrently.
/// Playlist tracks are then fetched one playlist at a time. Every track that
/// passes all `filters` is counted once in the track table, its album once in
/// the album table and each credited artist once in the artist table.
/// Playlist entries without a track (removed or unavailable) are skipped.
///
/// # Errors
///
/// The first failed request aborts the whole aggregation. No partial profile
/// is returned.
pub async fn aggregate_with_progress<R, F>(
    requester: &R,
    username: &str,
    filters: &[Filter],
    mut on_playlist: F,
) -> Result<Profile>
where
    R: Requester,
    F: FnMut(PlaylistProgress<'_>),
{
    let profile_url = requester.endpoint(&["users", username]);
    let playlists_url = requester.endpoint(&["users", username, "playlists"]);

    let (profile, playlists) = tokio::try_join!(
        requester.get_json::<UserProfile>(&profile_url),
        pagination::fetch_all::<R, Playlist>(requester, &playlists_url),
    )?;
    debug!("{} has {} public playlists", username, playlists.len());

    let mut tracks = FrequencyTable::new();
    let mut artists = FrequencyTable::new();
    let mut albums = FrequencyTable::new();

    for (index, playlist) in playlists.iter().enumerate() {
        on_playlist(PlaylistProgress {
            position: index + 1,
            total: playlists.len(),
            playlist,
        });

        let items: Vec<PlaylistItem> =
            pagination::fetch_all(requester, &playlist.tracks.href).await?;

        let mut skipped = 0;
        for item in items {
            let Some(track) = item.track else {
                skipped += 1;
                continue;
            };

            if !filter::keep(&track, filters) {
                continue;
            }

            tracks.upsert(&track);
            if let Some(album) = &track.album {
                albums.upsert(album);
            }
            for artist in &track.artists {
                artists.upsert(artist);
            }
        }

        if skipped > 0 {
            debug!(
                "skipped {} unavailable tracks in playlist {}",
                skipped, playlist.name
            );
        }
    }

    Ok(Profile {
        profile,
        playlist_count: playlists.len(),
        tracks,
        artists,
        albums,
    })
}

/// Fetches the profile resource of `username` unmodified, without touching
/// any playlist.
pub async fn fetch_raw_profile<R: Requester>(requester: &R, username: &str) -> Result<Value> {
    requester
        .get_json(&requester.endpoint(&["users", username]))
        .await
}
