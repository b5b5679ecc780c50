//! readme-sync CLI
//!
//! Fetches blog, Douban, TIL, Yuque, and GitHub release data and
//! splices the rendered Markdown into sentinel-delimited regions of a
//! profile README.

mod cli;
mod commands;
mod config;
mod error;
mod io;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = Config::load(cli.config.as_deref())?;
    let readme_path = cli
        .readme
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.readme.path));

    match cli.command {
        Commands::Sync { dry_run } => commands::run_sync(&config, &readme_path, dry_run).await,
        Commands::Check => commands::run_check(&config, &readme_path),
        Commands::Regions => commands::run_regions(&readme_path),
    }
}
