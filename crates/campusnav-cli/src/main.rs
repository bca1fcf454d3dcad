use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::output::OutputFormat;
use campusnav_lib::{resolve_data_dir, RouteAlgorithm};

mod commands;

use commands::route::RouteCommandArgs;
use commands::saved::SavedAction;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus navigation utilities")]
struct Cli {
    /// Directory containing buildings.json and graph.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute walking directions between two locations.
    Route {
        /// Starting node id, building id or building name.
        #[arg(long = "from")]
        from: String,
        /// Destination node id, building id or building name.
        #[arg(long = "to")]
        to: String,
        /// Shortest-path implementation (dijkstra or linear-scan).
        #[arg(long, default_value_t = RouteAlgorithm::Dijkstra)]
        algorithm: RouteAlgorithm,
    },
    /// Find the walkway node closest to a coordinate.
    Nearest {
        /// Latitude in decimal degrees; defaults to the campus fallback location.
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in decimal degrees.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },
    /// List campus buildings, optionally filtered by a search query.
    Buildings {
        /// Case-insensitive text matched against names and descriptions.
        #[arg(long)]
        search: Option<String>,
    },
    /// Manage saved locations.
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())
        .context("failed to resolve the campus data directory")?;

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
        } => commands::route::handle_route_command(
            &data_dir,
            cli.format,
            &RouteCommandArgs {
                from,
                to,
                algorithm,
            },
        ),
        Command::Nearest { lat, lng } => {
            commands::nearest::handle_nearest_command(&data_dir, cli.format, lat.zip(lng))
        }
        Command::Buildings { search } => {
            commands::buildings::handle_buildings_command(&data_dir, cli.format, search.as_deref())
        }
        Command::Saved { action } => {
            commands::saved::handle_saved_command(&data_dir, cli.format, &action)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
