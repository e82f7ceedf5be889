//! Pagenav CLI - subpage anchor navigation maintenance.
//!
//! Provides commands for:
//! - `rebuild`: Walk all subpages and rebuild the anchor index
//! - `nav`: Print the navigation fragment for a parent page

mod commands;
mod config;
mod error;
mod fswiki;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NavArgs, RebuildArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pagenav - subpage anchor navigation.
#[derive(Parser)]
#[command(name = "pagenav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the anchor index from page content.
    Rebuild(RebuildArgs),
    /// Print the navigation fragment for a parent page.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Rebuild(args) => args.verbose,
        Commands::Nav(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Rebuild(args) => args.execute(VERSION),
        Commands::Nav(args) => args.execute(VERSION),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
