//! Resource page controller.
//!
//! # Responsibility
//! - Compose store, optimistic list, sort cycle and form state into the
//!   page lifecycle: load, submit, remove, toggle sort.
//! - Own the inline alert and the full-page load-failure flag.
//!
//! # Invariants
//! - Validation runs before any store call; a rejected draft never reaches
//!   the network.
//! - Create and delete are optimistic: tentative state is published first,
//!   reconciled by refetch on success, rolled back exactly on failure.
//! - Update is not optimistic: the list is only touched by the refetch that
//!   follows a successful call.
//! - The draft survives a failed mutation so the user can resubmit.

use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::resource::{RecordId, Resource};
use crate::store::{RecordStore, StoreError};
use crate::validate::ValidationError;
use crate::view::form::FormState;
use crate::view::mutation::OptimisticList;
use crate::view::sort::SortMode;

/// Failure surfaced by a page mutation.
#[derive(Debug)]
pub enum MutationError {
    /// Draft rejected client-side; no store call was made.
    Validation(ValidationError),
    /// Store call failed after any tentative state was published.
    Store(StoreError),
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MutationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for MutationError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for MutationError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One CRUD page over a resource collection.
pub struct ResourcePage<R: Resource, S: RecordStore<R>> {
    store: S,
    list: OptimisticList<R>,
    sort: SortMode,
    form: FormState<R>,
    alert: Option<String>,
    load_failed: bool,
}

impl<R: Resource, S: RecordStore<R>> ResourcePage<R, S> {
    /// Builds the page without fetching; call [`load`](Self::load) to mount.
    pub fn new(store: S) -> Self {
        Self {
            store,
            list: OptimisticList::new(),
            sort: SortMode::default(),
            form: FormState::new(),
            alert: None,
            load_failed: false,
        }
    }

    /// Fetches the list and replaces the in-memory state with server truth.
    pub fn load(&mut self) -> Result<(), StoreError> {
        match self.store.list() {
            Ok(items) => {
                info!(
                    "event=list_load module=view resource={} status=ok count={}",
                    R::PATH,
                    items.len()
                );
                self.list.replace(items);
                self.load_failed = false;
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=list_load module=view resource={} status=error error={err}",
                    R::PATH
                );
                self.load_failed = true;
                Err(err)
            }
        }
    }

    /// Whether the last load failed (full-page error placeholder state).
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Records in fetch order.
    pub fn items(&self) -> &[R] {
        self.list.items()
    }

    /// Records ordered by the active sort mode.
    pub fn visible(&self) -> Vec<R> {
        self.sort.apply(self.list.items())
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    /// Advances the sort cycle by one step.
    pub fn toggle_sort(&mut self) -> SortMode {
        self.sort = self.sort.next();
        self.sort
    }

    /// Current inline alert, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn open_add(&mut self) {
        self.form.open_for_add();
    }

    /// Opens the edit form seeded from the record with `id`.
    ///
    /// Returns `false` when the id is not in the current list.
    pub fn open_edit(&mut self, id: RecordId) -> bool {
        let record = self
            .list
            .items()
            .iter()
            .find(|record| record.id() == id)
            .cloned();
        match record {
            Some(record) => {
                self.form.open_for_edit(&record);
                true
            }
            None => false,
        }
    }

    pub fn close_modal(&mut self) {
        self.form.close();
    }

    pub fn is_modal_open(&self) -> bool {
        self.form.is_open()
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn draft(&self) -> &R::Draft {
        self.form.draft()
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        self.form.draft_mut()
    }

    /// Submits the current draft: create when adding, update when editing.
    pub fn submit(&mut self) -> Result<(), MutationError> {
        let draft = self.form.draft().clone();
        if let Err(err) = R::validate(&draft) {
            self.alert = Some(err.message().to_string());
            return Err(err.into());
        }

        match self.form.editing() {
            Some(id) => self.submit_update(id, &draft),
            None => self.submit_create(&draft),
        }
    }

    /// Deletes `id` optimistically, rolling back on failure.
    pub fn remove(&mut self, id: RecordId) -> Result<(), MutationError> {
        let snapshot = self.list.stage_delete(id);
        match self.store.delete(id) {
            Ok(()) => {
                // Refetch failure is captured by `load_failed`.
                let _ = self.load();
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=optimistic_rollback module=view resource={} op=delete error={err}",
                    R::PATH
                );
                self.list.rollback(snapshot);
                self.alert = Some(R::MESSAGES.delete_failed.to_string());
                Err(err.into())
            }
        }
    }

    fn submit_create(&mut self, draft: &R::Draft) -> Result<(), MutationError> {
        let staged = R::from_draft(draft, self.list.provisional_id());
        let snapshot = self.list.stage_create(staged);
        match self.store.create(draft) {
            Ok(_created) => {
                let _ = self.load();
                self.form.close();
                self.alert = R::MESSAGES.created.map(str::to_string);
                info!(
                    "event=record_create module=view resource={} status=ok",
                    R::PATH
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=optimistic_rollback module=view resource={} op=create error={err}",
                    R::PATH
                );
                self.list.rollback(snapshot);
                self.alert = Some(R::MESSAGES.create_failed.to_string());
                Err(err.into())
            }
        }
    }

    fn submit_update(&mut self, id: RecordId, draft: &R::Draft) -> Result<(), MutationError> {
        // No staging here: the update path awaits the store and only the
        // success refetch touches the list.
        match self.store.update(id, draft) {
            Ok(()) => {
                let _ = self.load();
                self.form.close();
                self.alert = R::MESSAGES.updated.map(str::to_string);
                info!(
                    "event=record_update module=view resource={} status=ok id={id}",
                    R::PATH
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=record_update module=view resource={} status=error id={id} error={err}",
                    R::PATH
                );
                self.alert = Some(R::MESSAGES.update_failed.to_string());
                Err(err.into())
            }
        }
    }
}
