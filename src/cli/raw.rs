use crate::{error::Result, info, profile, spotify::SpotifyClient};

/// Prints the profile resource of `username` without aggregating playlists.
pub async fn raw(username: &str) -> Result<()> {
    let client = SpotifyClient::from_env()?;

    info!("Looking up {}...", username);
    let profile = profile::fetch_raw_profile(&client, username).await?;

    println!("{:#}", profile);
    Ok(())
}
