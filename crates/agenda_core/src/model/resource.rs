//! Generic record contract shared by every managed resource.
//!
//! # Responsibility
//! - Define the seam that lets store, list, form and page code be written
//!   once for any record shape.
//! - Carry the per-resource REST path and user-facing message table.
//!
//! # Invariants
//! - `id` is server-assigned; drafts never carry one.
//! - `from_draft` followed by `to_draft` preserves every draft field.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::validate::ValidationError;

/// Stable identifier assigned by the backend on create.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = u64;

/// User-facing message table for one resource.
///
/// All strings are shown verbatim as the inline alert; `created`/`updated`
/// are `None` for resources that clear the alert on success instead of
/// announcing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMessages {
    pub load_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub created: Option<&'static str>,
    pub updated: Option<&'static str>,
}

/// A record type managed through the REST backend.
///
/// Implementations provide the wire shape, its id-less draft counterpart,
/// and the validation rule set gating submission.
pub trait Resource: Clone + Serialize + DeserializeOwned {
    /// In-progress record without an id, owned by the form until submission.
    type Draft: Clone + Debug + Default + PartialEq + Serialize;

    /// Collection segment under the base URL (`contacts`, `notes`).
    const PATH: &'static str;

    /// Inline alert texts for this resource.
    const MESSAGES: ResourceMessages;

    fn id(&self) -> RecordId;

    /// Key used by the alphabetical sort mode.
    fn sort_key(&self) -> &str;

    /// Copies the editable fields into a draft for the edit form.
    fn to_draft(&self) -> Self::Draft;

    /// Builds a full record from a draft and an id.
    ///
    /// Used for tentative list entries and for full-record `PUT` bodies.
    fn from_draft(draft: &Self::Draft, id: RecordId) -> Self;

    /// Runs this resource's validation rules against a draft.
    ///
    /// Short-circuits on the first failing rule.
    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;
}
