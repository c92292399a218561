//! Error types for comment-box

use thiserror::Error;

/// Why a submitted draft was rejected
///
/// The title is checked before the description, so a fully empty draft
/// reports `EmptyTitle`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title field was empty at submit time
    #[error("title must not be empty")]
    EmptyTitle,

    /// Description field was empty at submit time
    #[error("description must not be empty")]
    EmptyDescription,
}

/// Main error type for comment-box
#[derive(Debug, Error)]
pub enum CommentBoxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Draft validation failure
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CommentBoxError>,
    },
}

impl CommentBoxError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CommentBoxError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for comment-box
pub type Result<T> = std::result::Result<T, CommentBoxError>;
