//! Domain records managed by the agenda client.
//!
//! # Responsibility
//! - Define the wire-shaped records and their id-less drafts.
//! - Expose the generic [`resource::Resource`] seam consumed by store and
//!   view code.
//!
//! # Invariants
//! - Every record is identified by a server-assigned [`resource::RecordId`].
//! - Records mirror server state; the client never invents durable ids.

pub mod contact;
pub mod note;
pub mod resource;
