//! qroute CLI - tabular Q-learning route planner
//!
//! This CLI provides a unified interface for:
//! - Training an action-value table over a fixed state graph
//! - Extracting greedy routes from a trained model

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qroute")]
#[command(version, about = "Tabular Q-learning route planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train an action-value table for a network
    Train(qroute::cli::commands::train::TrainArgs),

    /// Extract the greedy route from a saved model
    Route(qroute::cli::commands::route::RouteArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => qroute::cli::commands::train::execute(args),
        Commands::Route(args) => qroute::cli::commands::route::execute(args),
    }
}
