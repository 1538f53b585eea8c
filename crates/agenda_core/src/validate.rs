//! Draft validation rules.
//!
//! # Responsibility
//! - Gate every submission with pure, synchronous checks before any network
//!   call is made.
//! - Keep the user-facing rule messages in one place.
//!
//! # Invariants
//! - Rules run in a fixed order and short-circuit on the first failure, so
//!   only one message is ever surfaced at a time.
//! - No rule touches the store or any other shared state.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::contact::ContactDraft;
use crate::model::note::NoteDraft;

pub const NAME_REQUIRED: &str = "Por favor, preencha o campo Nome.";
pub const PHONE_FORMAT: &str =
    "O campo Telefone deve começar com + e ter no mínimo 12 números.";
pub const EMAIL_FORMAT: &str = "O campo Email não possui um formato válido.";
pub const TITLE_REQUIRED: &str = "Por favor, preencha o título da Nota.";
pub const DESCRIPTION_REQUIRED: &str = "Por favor, descreve um pouco a respeito da Nota.";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{12,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w-]+(\.[\w-]+)*@[\w-]+(\.[\w-]+)+$").expect("valid email regex")
});

/// Failed validation rule carrying its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl Error for ValidationError {}

/// Validates a contact draft: name, then phone, then email.
pub fn contact_draft(draft: &ContactDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError {
            message: NAME_REQUIRED,
        });
    }
    if !PHONE_RE.is_match(&draft.phone) {
        return Err(ValidationError {
            message: PHONE_FORMAT,
        });
    }
    if !EMAIL_RE.is_match(&draft.email) {
        return Err(ValidationError {
            message: EMAIL_FORMAT,
        });
    }
    Ok(())
}

/// Validates a note draft: title, then description.
pub fn note_draft(draft: &NoteDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError {
            message: TITLE_REQUIRED,
        });
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError {
            message: DESCRIPTION_REQUIRED,
        });
    }
    Ok(())
}
