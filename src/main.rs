use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tastemix::{
    cli::{self, prefs::GenreAction},
    config, types::PkceToken, warning,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightMagenta.on_default())
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
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Forget the stored Spotify token
    Logout,

    /// Search artists in the Spotify catalog
    Artists(ArtistsOptions),

    /// List genres you can pick from
    Genres(GenresOptions),

    /// Show or edit your taste preferences
    Prefs(PrefsOptions),

    /// Build a new setlist from your preferences and favorites
    Generate,

    /// Add more tracks to the current setlist
    More,

    /// Show the current setlist
    Setlist,

    /// Remove a track from the current setlist
    Remove(TrackIdOption),

    /// Mark or unmark a track as favorite
    Favorite(TrackIdOption),

    /// List favorite tracks
    Favorites(FavoritesOptions),

    /// Save the current setlist as a Spotify playlist
    Save(SaveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Artist name to search for (at least 2 characters)
    #[clap(long)]
    pub search: String,
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Only show genres containing this text
    #[clap(long)]
    pub filter: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PrefsOptions {
    /// Subcommands under `prefs`; shows the preferences when omitted
    #[command(subcommand)]
    pub command: Option<PrefsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PrefsSubcommand {
    /// Show the stored preferences
    Show,

    /// Reset all preferences (favorites are kept)
    Clear,

    /// Select or deselect artists (max 5)
    Artist(ArtistPrefOptions),

    /// Select or deselect genres
    Genre(GenrePrefOptions),

    /// Toggle a decade, e.g. 1980
    Decade { marker: String },

    /// Restrict release years; call without bounds to clear
    Years {
        #[clap(long)]
        from: Option<i32>,
        #[clap(long)]
        to: Option<i32>,
    },

    /// Popularity level 0-100, or an explicit --min/--max band
    Popularity {
        level: Option<u8>,
        #[clap(long, conflicts_with = "level")]
        min: Option<u8>,
        #[clap(long, conflicts_with = "level")]
        max: Option<u8>,
        #[clap(long, conflicts_with_all = ["level", "min", "max"])]
        clear: bool,
    },

    /// Pick a mood preset and/or tune its dimensions
    Mood {
        preset: Option<String>,
        #[clap(long)]
        energy: Option<u8>,
        #[clap(long)]
        valence: Option<u8>,
        #[clap(long)]
        danceability: Option<u8>,
        #[clap(long)]
        acousticness: Option<u8>,
        #[clap(long, conflicts_with_all = ["preset", "energy", "valence", "danceability", "acousticness"])]
        clear: bool,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistPrefOptions {
    #[command(subcommand)]
    pub command: ArtistPrefSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArtistPrefSubcommand {
    /// Search and select the best matching artist
    Add { query: String },
    /// Deselect an artist by id or name
    Remove { artist: String },
}

#[derive(Parser, Debug, Clone)]
pub struct GenrePrefOptions {
    #[command(subcommand)]
    pub command: GenrePrefSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GenrePrefSubcommand {
    /// Select the genre, or deselect it if already selected
    Toggle { genre: String },
    /// Add a free-text genre
    Add { genre: String },
    /// Deselect a genre
    Remove { genre: String },
}

#[derive(Parser, Debug, Clone)]
pub struct TrackIdOption {
    /// Spotify track id as shown in the setlist table
    track_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct FavoritesOptions {
    /// Remove all favorites
    #[clap(long)]
    clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SaveOptions {
    /// Name of the new playlist
    #[clap(long, default_value = "tastemix setlist")]
    name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let args = Cli::parse();

    match args.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Logout => cli::logout().await,
        Command::Artists(opt) => cli::search_artists(opt.search).await,
        Command::Genres(opt) => cli::list_genres(opt.filter).await,
        Command::Prefs(opt) => match opt.command {
            None | Some(PrefsSubcommand::Show) => cli::prefs::show().await,
            Some(PrefsSubcommand::Clear) => cli::prefs::clear().await,
            Some(PrefsSubcommand::Artist(a)) => match a.command {
                ArtistPrefSubcommand::Add { query } => cli::prefs::add_artist(query).await,
                ArtistPrefSubcommand::Remove { artist } => cli::prefs::remove_artist(artist).await,
            },
            Some(PrefsSubcommand::Genre(g)) => match g.command {
                GenrePrefSubcommand::Toggle { genre } => {
                    cli::prefs::genre(GenreAction::Toggle, genre).await
                }
                GenrePrefSubcommand::Add { genre } => {
                    cli::prefs::genre(GenreAction::Add, genre).await
                }
                GenrePrefSubcommand::Remove { genre } => {
                    cli::prefs::genre(GenreAction::Remove, genre).await
                }
            },
            Some(PrefsSubcommand::Decade { marker }) => cli::prefs::decade(marker).await,
            Some(PrefsSubcommand::Years { from, to }) => cli::prefs::years(from, to).await,
            Some(PrefsSubcommand::Popularity {
                level,
                min,
                max,
                clear,
            }) => cli::prefs::popularity(level, min, max, clear).await,
            Some(PrefsSubcommand::Mood {
                preset,
                energy,
                valence,
                danceability,
                acousticness,
                clear,
            }) => {
                cli::prefs::mood(preset, energy, valence, danceability, acousticness, clear).await
            }
        },
        Command::Generate => cli::generate().await,
        Command::More => cli::more().await,
        Command::Setlist => cli::show_setlist().await,
        Command::Remove(opt) => cli::remove_track(opt.track_id).await,
        Command::Favorite(opt) => cli::toggle_favorite(opt.track_id).await,
        Command::Favorites(opt) => cli::list_favorites(opt.clear).await,
        Command::Save(opt) => cli::save(opt.name).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
