//! Page-level state controllers.
//!
//! # Responsibility
//! - Hold everything a rendered CRUD page needs between events: the record
//!   list, sort mode, draft form and alert state.
//! - Keep mutation semantics (optimistic staging, rollback, refetch) out of
//!   rendering code.

pub mod form;
pub mod mutation;
pub mod page;
pub mod sort;
