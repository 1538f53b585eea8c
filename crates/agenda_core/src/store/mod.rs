//! Record store contracts and implementations.
//!
//! # Responsibility
//! - Define the CRUD seam between view controllers and the backend.
//! - Keep transport details (HTTP, JSON) inside this boundary.
//!
//! # Invariants
//! - Every call is best-effort network I/O: no retries, no timeouts.
//! - Non-success responses surface as typed errors, never as empty data.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::resource::{RecordId, Resource};

pub mod memory;
pub mod rest;

pub use memory::{MemoryStore, StoreOp};
pub use rest::{RestConfig, RestStore, DEFAULT_BASE_URL};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a store call.
#[derive(Debug)]
pub enum StoreError {
    /// Transport-level failure (connection refused, closed socket, ...).
    Network(reqwest::Error),
    /// Backend answered with a non-2xx status.
    Status { status: u16 },
    /// Payload could not be decoded into the expected shape.
    Decode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(err) => write!(f, "request failed: {err}"),
            Self::Status { status } => write!(f, "request failed with status {status}"),
            Self::Decode(err) => write!(f, "invalid response payload: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Status { .. } => None,
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// CRUD interface over one REST resource collection.
///
/// `create` returns the record as persisted by the backend (with its
/// assigned id); `update` and `delete` only confirm completion.
pub trait RecordStore<R: Resource> {
    fn list(&mut self) -> StoreResult<Vec<R>>;
    fn create(&mut self, draft: &R::Draft) -> StoreResult<R>;
    fn update(&mut self, id: RecordId, draft: &R::Draft) -> StoreResult<()>;
    fn delete(&mut self, id: RecordId) -> StoreResult<()>;
}
