//! cb-core - Core library for comment-box
//!
//! This crate provides the state management behind the comment box: the
//! comment collection, the form draft, the edit-mode lifecycle, validation,
//! and id generation.

pub mod comment;
pub mod config;
pub mod error;
pub mod types;

pub use error::{CommentBoxError, Result, ValidationError};
pub use types::*;
