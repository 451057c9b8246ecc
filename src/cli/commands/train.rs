//! Train command - learn an action-value table for a network

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{config::NetworkDocument, output},
    learning::{SavedModel, TrainerConfig, train},
};

#[derive(Debug, Parser)]
pub struct TrainArgs {
    /// Network JSON file (states, edges, goal); uses the built-in demo
    /// network when omitted
    #[arg(long)]
    pub network: Option<PathBuf>,

    /// Override the goal label from the network document
    #[arg(long)]
    pub goal: Option<String>,

    /// Discount factor gamma, in (0, 1)
    #[arg(long, default_value_t = 0.75)]
    pub gamma: f64,

    /// Learning rate alpha, in (0, 1]
    #[arg(long, default_value_t = 0.9)]
    pub alpha: f64,

    /// Number of training episodes
    #[arg(long, default_value_t = 3000)]
    pub episodes: usize,

    /// Random seed for reproducible training
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save the trained model (MessagePack) to this path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write the training report as JSON to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let mut document = match &args.network {
        Some(path) => NetworkDocument::load(path)?,
        None => NetworkDocument::demo(),
    };
    if let Some(goal) = args.goal {
        document.goal = goal;
    }
    let (network, goal) = document.into_network()?;

    let mut config = TrainerConfig::new(args.gamma, args.alpha, args.episodes)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let spinner = output::create_spinner(&format!(
        "Training toward '{goal}' for {} episodes...",
        args.episodes
    ));
    let (model, report) = train(&network, &goal, &config)?;
    spinner.finish_and_clear();

    output::print_section("Training complete");
    output::print_kv("States", &network.states().len().to_string());
    output::print_kv("Goal", &report.goal);
    output::print_kv("Episodes", &report.episodes.to_string());
    output::print_kv("Skipped", &report.skipped.to_string());
    output::print_kv(
        "Seed",
        &report
            .seed
            .map_or_else(|| "none".to_string(), |s| s.to_string()),
    );

    if let Some(summary) = &args.summary {
        let path = sanitize_summary_path(summary);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        report.save(&path)?;
        println!("Summary written to {}", path.display());
    }

    if let Some(output_path) = &args.output {
        SavedModel::new(model, report).save_to_file(output_path)?;
        println!("Model written to {}", output_path.display());
    }

    Ok(())
}
