//! prodmetrics library root.
//! Exposes the metrics core (aggregator, classifier, ranking), the CSV
//! loader, and the CLI dispatcher used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod telemetry;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{self, load_dataset};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg, config_path),
        Commands::Summary => commands::summary::handle(&load_dataset(cli, cfg)?),
        Commands::Workers { .. } => {
            commands::workers::handle(&cli.command, &load_dataset(cli, cfg)?)
        }
        Commands::Worker { .. } => commands::worker::handle(&cli.command, &load_dataset(cli, cfg)?),
        Commands::Track { .. } => commands::track::handle(&cli.command, &load_dataset(cli, cfg)?),
        Commands::Export { .. } => commands::export::handle(&cli.command, &load_dataset(cli, cfg)?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken.
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&config_path)?,
    };

    telemetry::init(&cfg.log_level)?;

    dispatch(&cli, &cfg, &config_path)
}
