//! Draft validation

use super::model::Draft;
use crate::error::ValidationError;

/// Check that both draft fields carry non-whitespace content.
///
/// This is the only validation the comment box performs; it runs at submit
/// time, never while typing.
pub fn validate_draft(draft: &Draft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}
