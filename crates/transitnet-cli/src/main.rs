//! Transitnet CLI — inspect converged routing over a transport network
//! description.
//!
//! Subcommands: table, route, traverse.

mod commands;
mod network_file;

use clap::{Parser, Subcommand};

/// transitnet — distance-vector routing over a simulated transport network.
#[derive(Parser, Debug)]
#[command(name = "transitnet", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a stop's routing table after network convergence.
    Table(commands::table::TableArgs),
    /// Show the converged route from one stop to another.
    Route(commands::route::RouteArgs),
    /// List the stops reachable from a stop, in traversal order.
    Traverse(commands::traverse::TraverseArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Table(args) => commands::table::run(args),
        Commands::Route(args) => commands::route::run(args),
        Commands::Traverse(args) => commands::traverse::run(args),
    }
}
