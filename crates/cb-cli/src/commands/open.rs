//! Open command
//!
//! Launch the comment box TUI.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;

use cb_core::comment::CommentStore;
use cb_ui::App;

/// Arguments for the open command
#[derive(Debug, Default, Args)]
pub struct OpenArgs {
    /// Override the message shown while the list is empty
    #[arg(long)]
    pub empty_message: Option<String>,

    /// Override the color theme (default/plain)
    #[arg(long)]
    pub theme: Option<String>,
}

/// Execute the open command
pub fn execute(args: OpenArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(message) = args.empty_message {
        config.ui.empty_message = message;
    }
    if let Some(theme) = args.theme {
        config.ui.theme = theme;
    }

    tracing::info!("Opening comment box");

    let store = CommentStore::new();
    let mut app = App::new(store, config.ui).context("Failed to start the TUI")?;
    app.run()
}
