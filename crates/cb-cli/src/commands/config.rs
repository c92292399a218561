//! Config command
//!
//! Manage comment-box configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;

use cb_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file location
    Path,

    /// Write the default configuration to the config file
    Reset {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(json, config_path),
        ConfigCommand::Path => show_path(config_path),
        ConfigCommand::Reset { force } => reset_config(force, config_path),
    }
}

fn show_config(as_json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    Ok(())
}

fn show_path(config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    match config_path {
        Some(path) => println!("{}", path.display()),
        None => match super::default_config_path() {
            Some(path) => {
                let note = if path.exists() { "" } else { " (not created yet)" };
                println!("{}{}", path.display(), note.dimmed());
            }
            None => eprintln!("{} No configuration directory available", "⚠".yellow()),
        },
    }

    Ok(())
}

fn reset_config(force: bool, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let target = match config_path {
        Some(path) => path.to_path_buf(),
        None => super::default_config_path()
            .context("No configuration directory available on this platform")?,
    };

    if target.exists() && !force {
        eprintln!(
            "{} {} already exists. Pass {} to overwrite.",
            "⚠".yellow(),
            target.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&Config::default())?;
    fs::write(&target, content)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("{} Wrote default configuration to {}", "✓".green(), target.display());
    Ok(())
}
