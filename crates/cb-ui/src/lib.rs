//! cb-ui - TUI library for comment-box
//!
//! This crate renders the comment store and forwards user intents back into
//! its operations.
//!
//! # Overview
//!
//! The TUI provides:
//! - A two-field form for drafting comments
//! - The comment list with inline edit/delete
//! - An alert box while the list is empty
//! - Status bar with mode, count, and feedback messages
//!
//! # Example
//!
//! ```ignore
//! use cb_core::comment::CommentStore;
//! use cb_core::config::UiConfig;
//! use cb_ui::App;
//!
//! let mut app = App::new(CommentStore::new(), UiConfig::default())?;
//! app.run()?;
//! ```

pub mod app;
pub mod theme;

pub use app::{App, AppMode, AppState};
pub use theme::Theme;
