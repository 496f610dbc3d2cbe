use clap::{
    ArgAction, Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use profilter::{
    cli, config, error,
    profile::{Filter, Ranking},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
  args_conflicts_with_subcommands = true // disallow mixing lookups with `completions`
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Spotify user to look up (defaults to SPOTIFY_USER_ID)
    username: Option<String>,

    #[clap(flatten)]
    mode: ModeOptions,

    /// Only count tracks whose artists are all named ARTIST; can be repeated
    #[clap(long, value_name = "ARTIST", action = ArgAction::Append)]
    filter_artist: Vec<String>,

    /// Only count tracks from the album named ALBUM; can be repeated
    #[clap(long, value_name = "ALBUM", action = ArgAction::Append)]
    filter_album: Vec<String>,

    /// List the most frequent entries first
    #[clap(long)]
    reverse: bool,

    /// Only show the N most frequent entries
    #[clap(long, value_name = "N")]
    limit: Option<usize>,

    /// Render the ranking as a table
    #[clap(long)]
    table: bool,

    /// Print debug logs (overridden by RUST_LOG)
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Args, Debug, Clone)]
#[group(multiple = false)]
struct ModeOptions {
    /// View the user's top albums
    #[clap(short = 'a', long)]
    albums: bool,

    /// View the user's top artists (default)
    #[clap(short = 'A', long)]
    artists: bool,

    /// View the user's top tracks
    #[clap(short = 't', long)]
    tracks: bool,

    /// View the raw JSON profile
    #[clap(short = 'r', long)]
    raw: bool,
}

impl ModeOptions {
    fn ranking(&self) -> Ranking {
        if self.artists {
            Ranking::Artists
        } else if self.albums {
            Ranking::Albums
        } else if self.tracks {
            Ranking::Tracks
        } else {
            Ranking::Artists
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Some(Command::Completions(opt)) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let username = match utils::resolve_username(cli.username, config::spotify_user()) {
        Ok(username) => username,
        Err(e) => error!("{}", e),
    };

    let result = if cli.mode.raw {
        cli::raw(&username).await
    } else {
        let filters: Vec<Filter> = cli
            .filter_artist
            .into_iter()
            .map(Filter::ArtistName)
            .chain(cli.filter_album.into_iter().map(Filter::AlbumName))
            .collect();
        let options = cli::TopOptions {
            ranking: cli.mode.ranking(),
            reverse: cli.reverse,
            limit: cli.limit,
            table: cli.table,
        };
        cli::top(&username, &filters, &options).await
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
