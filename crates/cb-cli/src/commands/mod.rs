//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod open;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use cb_core::config::Config;

/// comment-box - comment list editor for the terminal
#[derive(Debug, Parser)]
#[command(name = "comment-box")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the comment box (default when no command is given)
    Open(open::OpenArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    let config_path = cli.config;
    match cli.command {
        Some(Commands::Open(args)) => open::execute(args, config_path.as_deref()),
        Some(Commands::Config(cmd)) => config::execute(cmd, config_path.as_deref()),
        None => open::execute(open::OpenArgs::default(), config_path.as_deref()),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Platform configuration file location
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "comment-box")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from an explicit path, the platform location, or
/// defaults, in that order
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        let config = Config::load(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        tracing::info!("Loaded configuration from {}", path.display());
        return Ok(config);
    }

    if let Some(path) = default_config_path() {
        if path.exists() {
            let config = Config::load(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            tracing::info!("Loaded configuration from {}", path.display());
            return Ok(config);
        }
    }

    Ok(Config::default())
}
