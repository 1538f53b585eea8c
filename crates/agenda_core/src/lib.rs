//! Client core for the agenda app: contact and note management over a REST
//! backend. This crate owns the page lifecycle (fetch, validate, mutate,
//! reconcile) and leaves rendering to its callers.

pub mod logging;
pub mod model;
pub mod store;
pub mod validate;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactDraft};
pub use model::note::{Note, NoteDraft};
pub use model::resource::{RecordId, Resource, ResourceMessages};
pub use store::{
    MemoryStore, RecordStore, RestConfig, RestStore, StoreError, StoreOp, StoreResult,
    DEFAULT_BASE_URL,
};
pub use validate::ValidationError;
pub use view::form::FormState;
pub use view::mutation::{ListSnapshot, OptimisticList};
pub use view::page::{MutationError, ResourcePage};
pub use view::sort::SortMode;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
