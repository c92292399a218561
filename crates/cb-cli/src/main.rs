//! comment-box - terminal comment list editor
//!
//! A small TUI for drafting, editing, and deleting titled comments. The list
//! lives in memory for the duration of the session.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the comment box
//! comment-box
//!
//! # Inspect configuration
//! comment-box config show
//!
//! # Write the default configuration file
//! comment-box config reset
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
