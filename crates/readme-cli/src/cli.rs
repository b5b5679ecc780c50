//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// readme-sync - Keep a profile README's regions up to date
#[derive(Parser, Debug)]
#[command(name = "readme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file (default: ./readme-sync.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the README, overriding the configured one
    #[arg(short, long, global = true)]
    pub readme: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch all enabled sources and rewrite the README regions
    ///
    /// Examples:
    ///   readme sync              # Fetch and rewrite in place
    ///   readme sync --dry-run    # Show the diff without writing
    Sync {
        /// Preview changes as a unified diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify that every enabled source has its sentinel pair in the README
    Check,

    /// List every region found in the README with its line span
    Regions,
}
