//! Comment data models

use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// A committed entry in the comment list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier, assigned at creation and immutable
    pub id: CommentId,
    /// Subject line
    pub title: String,
    /// Body text
    pub description: String,
}

/// The in-progress entry bound to the form.
///
/// Holds whatever the user has typed so far. `id` is absent until the first
/// field edit stamps a provisional one, and carries the target's id while an
/// edit is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Provisional id, or the edit target's id
    pub id: Option<CommentId>,
    /// Staged subject line
    pub title: String,
    /// Staged body text
    pub description: String,
}

impl Draft {
    /// Discard all staged input
    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    /// True when nothing has been typed into either field
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    /// Read a field by name
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
        }
    }
}

/// The two user-editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Subject line
    Title,
    /// Body text
    Description,
}

impl DraftField {
    /// The other field, for focus cycling in the form
    pub fn other(self) -> Self {
        match self {
            DraftField::Title => DraftField::Description,
            DraftField::Description => DraftField::Title,
        }
    }
}
