//! GeoRadar CLI - Command-line interface
//!
//! This binary provides a command-line interface to the georadar library:
//! a one-shot distance/bearing calculation and a live terminal radar view
//! driven by UDP sensor sentences.

mod commands;
mod error;
mod tui_app;
mod ui;

use clap::{Parser, Subcommand};

use commands::{distance, watch};

#[derive(Parser)]
#[command(name = "georadar")]
#[command(version = georadar::VERSION)]
#[command(about = "Live destination radar for geographic coordinates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute great-circle distance and bearing between two points
    Distance(distance::DistanceArgs),
    /// Show a live radar view tracking a destination
    Watch(watch::WatchArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Distance(args) => distance::run(args),
        Commands::Watch(args) => watch::run(args).await,
    };

    if let Err(e) = result {
        e.exit();
    }
}
