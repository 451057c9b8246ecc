//! Route command - greedy route extraction from a saved model

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{cli::output, learning::SavedModel};

#[derive(Debug, Parser)]
pub struct RouteArgs {
    /// Trained model file produced by `qroute train --output`
    #[arg(long, short)]
    pub model: PathBuf,

    /// Start state label
    pub start: String,

    /// Emit the route as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RouteArgs) -> Result<()> {
    let model = SavedModel::load_from_file(&args.model)?.into_model()?;
    let route = model.route(&args.start)?;

    if args.json {
        println!("{}", serde_json::to_string(&route)?);
        return Ok(());
    }

    output::print_section(&format!("Route to {}", model.goal_label()));
    output::print_kv("Start", &args.start);
    output::print_kv("Route", &route.to_string());
    if !route.reached_goal {
        println!("  goal not reached within the step bound (partial route)");
    }

    Ok(())
}
