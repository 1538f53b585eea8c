//! Note record and draft.

use serde::{Deserialize, Serialize};

use crate::model::resource::{RecordId, Resource, ResourceMessages};
use crate::validate::{self, ValidationError};

/// Wire shape of one note as served by `GET /notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub description: String,
}

/// In-progress note without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Resource for Note {
    type Draft = NoteDraft;

    const PATH: &'static str = "notes";

    const MESSAGES: ResourceMessages = ResourceMessages {
        load_failed: "Erro ao carregar os dados da lista de notas",
        create_failed: "Erro ao adicionar nota.",
        update_failed: "Erro ao editar nota.",
        delete_failed: "Erro ao excluir nota.",
        created: None,
        updated: None,
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn sort_key(&self) -> &str {
        &self.title
    }

    fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    fn from_draft(draft: &NoteDraft, id: RecordId) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
        }
    }

    fn validate(draft: &NoteDraft) -> Result<(), ValidationError> {
        validate::note_draft(draft)
    }
}
