//! Comment store: the list, the draft, and the edit-mode lifecycle

use super::model::{Comment, Draft, DraftField};
use super::validator::validate_draft;
use crate::error::ValidationError;
use crate::types::{CommentId, IdGenerator, UuidIdGenerator};
use std::fmt;

/// Whether submissions create a new comment or rewrite an existing one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Submissions prepend a new comment
    #[default]
    Idle,
    /// Submissions replace the comment with this id
    Editing {
        /// Id of the comment being edited
        target: CommentId,
    },
}

impl EditMode {
    /// True while an edit is in progress
    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }

    /// Id of the comment being edited, if any
    pub fn target(&self) -> Option<&CommentId> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing { target } => Some(target),
        }
    }
}

/// What a successful submission did to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new comment was prepended
    Added(CommentId),
    /// The edited comment was rewritten in place
    Updated(CommentId),
    /// The edit target was gone; the list is unchanged, but edit mode was
    /// still left and the draft discarded
    TargetMissing,
}

/// Owns the authoritative comment list, the form draft, and the edit flag.
///
/// All mutation goes through the operations below; the presentation layer
/// reads state through the accessors and never holds its own copy. Comments
/// are kept in display order, most recent first.
pub struct CommentStore {
    comments: Vec<Comment>,
    draft: Draft,
    mode: EditMode,
    ids: Box<dyn IdGenerator>,
}

impl CommentStore {
    /// Create an empty store with random uuid ids
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidIdGenerator))
    }

    /// Create an empty store drawing ids from the given generator
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            comments: Vec::new(),
            draft: Draft::default(),
            mode: EditMode::Idle,
            ids,
        }
    }

    /// Comments in display order, most recent first
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The staged form input
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current edit-mode state
    pub fn edit_mode(&self) -> &EditMode {
        &self.mode
    }

    /// True while an edit is in progress
    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    /// Look up a comment by id
    pub fn get(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }

    /// Number of comments in the list
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// True when the list has no comments
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Stage user input into one draft field.
    ///
    /// The first edit stamps a provisional id on the draft; `begin_edit`
    /// replaces it with the target's id.
    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        if self.draft.id.is_none() {
            self.draft.id = Some(self.ids.next_id());
        }
        match field {
            DraftField::Title => self.draft.title = value.into(),
            DraftField::Description => self.draft.description = value.into(),
        }
    }

    /// Commit the draft as a new comment at the head of the list.
    ///
    /// Fails without touching any state when either field is empty. On
    /// success the draft's provisional id becomes the comment's id and the
    /// draft is reset. While an edit is in progress the draft id belongs to
    /// the edit target, so a fresh id is generated instead of reusing it,
    /// keeping ids in the list unique.
    pub fn add(&mut self) -> Result<CommentId, ValidationError> {
        validate_draft(&self.draft)?;

        let id = match self.mode {
            EditMode::Idle => self.draft.id.take().unwrap_or_else(|| self.ids.next_id()),
            EditMode::Editing { .. } => self.ids.next_id(),
        };

        self.comments.insert(
            0,
            Comment {
                id: id.clone(),
                title: self.draft.title.clone(),
                description: self.draft.description.clone(),
            },
        );
        self.draft.reset();
        Ok(id)
    }

    /// Remove the comment with the given id.
    ///
    /// Returns false when no comment matches; the list is untouched then.
    pub fn delete(&mut self, id: &CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| &c.id != id);
        self.comments.len() != before
    }

    /// Start editing the given comment.
    ///
    /// Copies its id and fields into the draft and aims subsequent
    /// submissions at it. Calling this while another edit is in progress
    /// simply retargets: the last request wins.
    pub fn begin_edit(&mut self, comment: &Comment) {
        self.draft = Draft {
            id: Some(comment.id.clone()),
            title: comment.title.clone(),
            description: comment.description.clone(),
        };
        self.mode = EditMode::Editing {
            target: comment.id.clone(),
        };
    }

    /// Commit the draft to the comment being edited.
    ///
    /// On success the target keeps its id and position and takes the draft's
    /// fields; edit mode is left and the draft reset. When the target has
    /// meanwhile been deleted (or no edit is in progress) the list stays as
    /// it is, but edit mode is still left and the draft still reset; the
    /// result is [`SubmitOutcome::TargetMissing`] so the caller can tell
    /// the difference. A validation failure leaves edit mode in place.
    pub fn commit_edit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        validate_draft(&self.draft)?;

        let target = self.mode.target().cloned();
        self.mode = EditMode::Idle;

        let outcome = match target {
            Some(target) => match self.comments.iter_mut().find(|c| c.id == target) {
                Some(entry) => {
                    entry.title = self.draft.title.clone();
                    entry.description = self.draft.description.clone();
                    SubmitOutcome::Updated(target)
                }
                None => SubmitOutcome::TargetMissing,
            },
            None => SubmitOutcome::TargetMissing,
        };

        self.draft.reset();
        Ok(outcome)
    }

    /// Submit the form.
    ///
    /// Routes to the edit path while an edit is in progress, otherwise
    /// prepends a new comment.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        if self.is_editing() {
            self.commit_edit()
        } else {
            self.add().map(SubmitOutcome::Added)
        }
    }
}

impl Default for CommentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentStore")
            .field("comments", &self.comments)
            .field("draft", &self.draft)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SequentialIdGenerator;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn store() -> CommentStore {
        CommentStore::with_id_generator(Box::new(SequentialIdGenerator::new()))
    }

    fn add_comment(store: &mut CommentStore, title: &str, description: &str) -> CommentId {
        store.update_draft(DraftField::Title, title);
        store.update_draft(DraftField::Description, description);
        store.add().unwrap()
    }

    #[test]
    fn test_add_prepends() {
        let mut store = store();
        add_comment(&mut store, "first", "a");
        add_comment(&mut store, "second", "b");

        assert_eq!(store.len(), 2);
        assert_eq!(store.comments()[0].title, "second");
        assert_eq!(store.comments()[0].description, "b");
        assert_eq!(store.comments()[1].title, "first");
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = store();
        let a = add_comment(&mut store, "a", "1");
        let b = add_comment(&mut store, "b", "2");
        let c = add_comment(&mut store, "c", "3");

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_add_resets_draft() {
        let mut store = store();
        add_comment(&mut store, "Hi", "there");

        assert!(store.draft().is_empty());
        assert!(store.draft().id.is_none());
    }

    #[test]
    fn test_add_uses_provisional_draft_id() {
        let mut store = store();
        store.update_draft(DraftField::Title, "Hi");
        store.update_draft(DraftField::Description, "there");

        let provisional = store.draft().id.clone().unwrap();
        let committed = store.add().unwrap();
        assert_eq!(provisional, committed);
    }

    #[test]
    fn test_update_draft_stamps_id_once() {
        let mut store = store();
        store.update_draft(DraftField::Title, "H");
        let first = store.draft().id.clone();
        store.update_draft(DraftField::Title, "Hi");
        store.update_draft(DraftField::Description, "there");
        assert_eq!(store.draft().id, first);
    }

    #[test]
    fn test_add_empty_title_blocks_mutation() {
        let mut store = store();
        store.update_draft(DraftField::Description, "there");

        assert_eq!(store.add(), Err(ValidationError::EmptyTitle));
        assert!(store.is_empty());
        // the rejected draft stays staged for the user to fix
        assert_eq!(store.draft().description, "there");
    }

    #[test]
    fn test_add_empty_description_blocks_mutation() {
        let mut store = store();
        store.update_draft(DraftField::Title, "Hi");

        assert_eq!(store.add(), Err(ValidationError::EmptyDescription));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_removes() {
        let mut store = store();
        let id = add_comment(&mut store, "Hi", "there");

        assert!(store.delete(&id));
        assert!(store.is_empty());
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = store();
        add_comment(&mut store, "a", "1");
        add_comment(&mut store, "b", "2");
        let before: Vec<Comment> = store.comments().to_vec();

        assert!(!store.delete(&CommentId(Uuid::from_u128(999))));
        assert_eq!(store.comments(), &before[..]);
    }

    #[test]
    fn test_begin_edit_populates_draft_and_mode() {
        let mut store = store();
        let id = add_comment(&mut store, "Hi", "there");
        let comment = store.get(&id).cloned().unwrap();

        store.begin_edit(&comment);

        assert!(store.is_editing());
        assert_eq!(store.edit_mode().target(), Some(&id));
        assert_eq!(store.draft().id, Some(id));
        assert_eq!(store.draft().title, "Hi");
        assert_eq!(store.draft().description, "there");
    }

    #[test]
    fn test_edit_round_trip_preserves_id_and_position() {
        let mut store = store();
        let older = add_comment(&mut store, "A", "a");
        add_comment(&mut store, "B", "b");
        // display order is [B, A]; edit the one at index 1
        let comment = store.get(&older).cloned().unwrap();

        store.begin_edit(&comment);
        store.update_draft(DraftField::Title, "A2");
        let outcome = store.commit_edit().unwrap();

        assert_eq!(outcome, SubmitOutcome::Updated(older.clone()));
        assert_eq!(store.len(), 2);
        assert_eq!(store.comments()[1].id, older);
        assert_eq!(store.comments()[1].title, "A2");
        assert_eq!(store.comments()[1].description, "a");
        assert_eq!(store.comments()[0].title, "B");
        assert!(!store.is_editing());
        assert!(store.draft().is_empty());
    }

    #[test]
    fn test_commit_edit_missing_target() {
        let mut store = store();
        add_comment(&mut store, "kept", "intact");
        let ghost = Comment {
            id: CommentId(Uuid::from_u128(404)),
            title: "gone".to_string(),
            description: "already deleted".to_string(),
        };
        let before: Vec<Comment> = store.comments().to_vec();

        store.begin_edit(&ghost);
        let outcome = store.commit_edit().unwrap();

        assert_eq!(outcome, SubmitOutcome::TargetMissing);
        assert_eq!(store.comments(), &before[..]);
        assert!(!store.is_editing());
        assert!(store.draft().is_empty());
    }

    #[test]
    fn test_commit_edit_target_deleted_mid_edit() {
        let mut store = store();
        let id = add_comment(&mut store, "Hi", "there");
        let comment = store.get(&id).cloned().unwrap();

        store.begin_edit(&comment);
        store.delete(&id);
        let outcome = store.commit_edit().unwrap();

        assert_eq!(outcome, SubmitOutcome::TargetMissing);
        assert!(store.is_empty());
        assert!(!store.is_editing());
    }

    #[test]
    fn test_commit_edit_validation_failure_stays_editing() {
        let mut store = store();
        let id = add_comment(&mut store, "Hi", "there");
        let comment = store.get(&id).cloned().unwrap();

        store.begin_edit(&comment);
        store.update_draft(DraftField::Title, "");

        assert_eq!(store.commit_edit(), Err(ValidationError::EmptyTitle));
        assert!(store.is_editing());
        assert_eq!(store.get(&id).unwrap().title, "Hi");
        // correcting the input lets the same edit go through
        store.update_draft(DraftField::Title, "Hello");
        assert_eq!(store.commit_edit(), Ok(SubmitOutcome::Updated(id.clone())));
        assert_eq!(store.get(&id).unwrap().title, "Hello");
    }

    #[test]
    fn test_begin_edit_last_request_wins() {
        let mut store = store();
        let a = add_comment(&mut store, "A", "a");
        let b = add_comment(&mut store, "B", "b");
        let first = store.get(&a).cloned().unwrap();
        let second = store.get(&b).cloned().unwrap();

        store.begin_edit(&first);
        store.begin_edit(&second);
        store.update_draft(DraftField::Title, "B2");
        store.commit_edit().unwrap();

        assert_eq!(store.get(&a).unwrap().title, "A");
        assert_eq!(store.get(&b).unwrap().title, "B2");
    }

    #[test]
    fn test_submit_routes_by_mode() {
        let mut store = store();
        store.update_draft(DraftField::Title, "Hi");
        store.update_draft(DraftField::Description, "there");
        let outcome = store.submit().unwrap();
        let id = match outcome {
            SubmitOutcome::Added(id) => id,
            other => panic!("expected Added, got {:?}", other),
        };

        let comment = store.get(&id).cloned().unwrap();
        store.begin_edit(&comment);
        store.update_draft(DraftField::Description, "again");
        assert_eq!(store.submit(), Ok(SubmitOutcome::Updated(id.clone())));
        assert_eq!(store.get(&id).unwrap().description, "again");
    }

    #[test]
    fn test_add_while_editing_keeps_ids_unique() {
        let mut store = store();
        let id = add_comment(&mut store, "Hi", "there");
        let comment = store.get(&id).cloned().unwrap();

        store.begin_edit(&comment);
        store.update_draft(DraftField::Title, "side note");
        store.update_draft(DraftField::Description, "typed while editing");
        let new_id = store.add().unwrap();

        assert_ne!(new_id, id);
        assert_eq!(store.len(), 2);
        let mut ids: Vec<&CommentId> = store.comments().iter().map(|c| &c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_add_then_delete_scenario() {
        let mut store = store();
        assert!(store.is_empty());

        let id = add_comment(&mut store, "Hi", "there");
        assert_eq!(store.len(), 1);
        assert_eq!(store.comments()[0].title, "Hi");
        assert_eq!(store.comments()[0].description, "there");

        assert!(store.delete(&id));
        assert!(store.is_empty());
    }
}
