//! Rinkview CLI: inspect and replay play-by-play event files.
//!
//! Usage:
//!   rinkview info <EVENTS>        Show game identity and headline counts
//!   rinkview validate <EVENTS>    Report malformed clocks and coordinates
//!   rinkview timeline <EVENTS>    Print the ordered game timeline
//!   rinkview heatmap <EVENTS>     Print density buckets for one overlay
//!   rinkview play <EVENTS>        Replay events in real time
//!   rinkview export <EVENTS>      Write an export payload

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rinkview_analysis::heatmap::OverlayKind;
use rinkview_common::config::{AppConfig, Orientation};
use rinkview_model::taxonomy::EventTypeGroup;

mod commands;

#[derive(Parser)]
#[command(
    name = "rinkview",
    about = "Spatiotemporal hockey event explorer",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the standard location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Team / player / event-group filter shared by several commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only events by this team
    #[arg(long)]
    team: Option<String>,

    /// Only events involving this player (overrides --team)
    #[arg(long)]
    player: Option<String>,

    /// Only events in this group: scoring, possession, face-off, penalty,
    /// general-play, dump, other
    #[arg(long)]
    group: Option<EventTypeGroup>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show game identity and summary statistics
    Info {
        /// Path to an events JSON array
        path: PathBuf,
    },

    /// Report events that cannot be placed on the timeline or rink
    Validate {
        /// Path to an events JSON array
        path: PathBuf,
    },

    /// Print the ordered timeline
    Timeline {
        /// Path to an events JSON array
        path: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print density buckets for an overlay
    Heatmap {
        /// Path to an events JSON array
        path: PathBuf,

        /// Overlay: shot, goal, or event
        #[arg(long, default_value = "shot")]
        kind: OverlayKind,

        /// Coordinate frame: home-left or absolute
        #[arg(long)]
        orientation: Option<Orientation>,

        /// Number of hottest buckets to print
        #[arg(long, default_value = "20")]
        top: usize,

        /// Print the full layer as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Replay events in real time
    Play {
        /// Path to an events JSON array
        path: PathBuf,

        /// Start position in game seconds
        #[arg(long, default_value = "0")]
        from: u32,

        /// Wall-clock milliseconds per game second (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write the export payload
    Export {
        /// Path to an events JSON array
        path: PathBuf,

        /// Output file (defaults to a generated name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    rinkview_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Info { path } => commands::info::run(path, &config),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Timeline { path, filter } => commands::timeline::run(path, filter, &config),
        Commands::Heatmap {
            path,
            kind,
            orientation,
            top,
            json,
            filter,
        } => {
            if let Some(orientation) = orientation {
                config.view.orientation = orientation;
            }
            commands::heatmap::run(path, kind, top, json, filter, &config)
        }
        Commands::Play {
            path,
            from,
            interval_ms,
            filter,
        } => {
            if let Some(ms) = interval_ms {
                config.playback.tick_interval_ms = ms;
            }
            commands::play::run(path, from, filter, config).await
        }
        Commands::Export {
            path,
            output,
            filter,
        } => commands::export::run(path, output, filter, config),
    }
}
