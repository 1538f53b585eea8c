//! Draft form and modal state.
//!
//! # Invariants
//! - At most one edit session is active: `editing` is the single target id.
//! - Closing always discards the draft, whether or not it was submitted.

use crate::model::resource::{RecordId, Resource};

/// Form state for one resource page.
#[derive(Debug, Clone)]
pub struct FormState<R: Resource> {
    draft: R::Draft,
    editing: Option<RecordId>,
    open: bool,
}

impl<R: Resource> FormState<R> {
    pub fn new() -> Self {
        Self {
            draft: R::Draft::default(),
            editing: None,
            open: false,
        }
    }

    /// Opens the form for a new record with an empty draft.
    pub fn open_for_add(&mut self) {
        self.draft = R::Draft::default();
        self.editing = None;
        self.open = true;
    }

    /// Opens the form seeded from an existing record.
    pub fn open_for_edit(&mut self, record: &R) {
        self.draft = record.to_draft();
        self.editing = Some(record.id());
        self.open = true;
    }

    /// Closes the form, discarding the draft and the edit target.
    pub fn close(&mut self) {
        self.draft = R::Draft::default();
        self.editing = None;
        self.open = false;
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl<R: Resource> Default for FormState<R> {
    fn default() -> Self {
        Self::new()
    }
}
