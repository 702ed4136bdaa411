mod config;
mod engine;
mod manager;
mod model;
mod report;
mod stats;

use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{io, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML configuration file (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report mean, median and standard deviation of a uniform sample.
    StatsReport,

    /// Compute mean, standard deviation, min and max of a normal grid.
    ArrayStats {
        /// Save the statistics to a MessagePack file.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut mgr = Manager::new(args.config, args.seed).context("failed to construct mgr")?;

    match args.command {
        Command::StatsReport => mgr.run_stats_report(&mut io::stdout().lock())?,
        Command::ArrayStats { output } => mgr.run_array_stats(output)?,
    }

    Ok(())
}
