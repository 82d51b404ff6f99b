//! docnav CLI - Documentation sidebar navigation.
//!
//! Provides commands for:
//! - `render`: Render the sidebar for a location
//! - `check`: Validate a navigation tree file
//! - `replay`: Replay a script of navigation and click events

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, GlobalArgs, RenderArgs, ReplayArgs};
use output::Output;

/// docnav - Documentation sidebar navigation.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sidebar for a location.
    Render(RenderArgs),
    /// Validate the navigation tree and print a summary.
    Check(CheckArgs),
    /// Replay navigation and click events from a script.
    Replay(ReplayArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&cli.global),
        Commands::Check(args) => args.execute(&cli.global),
        Commands::Replay(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
