//! In-process store used by tests and local experiments.
//!
//! # Responsibility
//! - Implement [`RecordStore`] over a plain vector with server-like id
//!   assignment.
//! - Let tests inject a single failing call per operation kind.
//!
//! # Invariants
//! - Assigned ids are strictly increasing and never reused.
//! - An armed failure fires exactly once, then the store behaves normally.

use crate::model::resource::{RecordId, Resource};
use crate::store::{RecordStore, StoreError, StoreResult};

/// Operation kinds a failure can be armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    List,
    Create,
    Update,
    Delete,
}

/// Vector-backed store with failure injection.
#[derive(Debug, Clone)]
pub struct MemoryStore<R: Resource> {
    records: Vec<R>,
    next_id: RecordId,
    fail_next: Option<StoreOp>,
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            fail_next: None,
        }
    }

    /// Builds a store pre-populated with the given records.
    pub fn seeded(records: Vec<R>) -> Self {
        let next_id = records.iter().map(R::id).max().unwrap_or(0) + 1;
        Self {
            records,
            next_id,
            fail_next: None,
        }
    }

    /// Arms the next call of `op` to fail with a server error.
    pub fn fail_next(&mut self, op: StoreOp) {
        self.fail_next = Some(op);
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    fn consume_failure(&mut self, op: StoreOp) -> StoreResult<()> {
        if self.fail_next == Some(op) {
            self.fail_next = None;
            return Err(StoreError::Status { status: 500 });
        }
        Ok(())
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> RecordStore<R> for MemoryStore<R> {
    fn list(&mut self) -> StoreResult<Vec<R>> {
        self.consume_failure(StoreOp::List)?;
        Ok(self.records.clone())
    }

    fn create(&mut self, draft: &R::Draft) -> StoreResult<R> {
        self.consume_failure(StoreOp::Create)?;
        let record = R::from_draft(draft, self.next_id);
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, id: RecordId, draft: &R::Draft) -> StoreResult<()> {
        self.consume_failure(StoreOp::Update)?;
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(slot) => {
                *slot = R::from_draft(draft, id);
                Ok(())
            }
            None => Err(StoreError::Status { status: 404 }),
        }
    }

    fn delete(&mut self, id: RecordId) -> StoreResult<()> {
        self.consume_failure(StoreOp::Delete)?;
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return Err(StoreError::Status { status: 404 });
        }
        Ok(())
    }
}
