//! Contact record and draft.

use serde::{Deserialize, Serialize};

use crate::model::resource::{RecordId, Resource, ResourceMessages};
use crate::validate::{self, ValidationError};

/// Wire shape of one contact as served by `GET /contacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// In-progress contact without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

impl Resource for Contact {
    type Draft = ContactDraft;

    const PATH: &'static str = "contacts";

    const MESSAGES: ResourceMessages = ResourceMessages {
        load_failed: "Erro ao carregar os dados da lista de contatos",
        create_failed: "Erro ao adicionar contato.",
        update_failed: "Erro ao editar contato.",
        delete_failed: "Erro ao excluir contato.",
        created: Some("Contato adicionado com sucesso."),
        updated: Some("Contato editado com sucesso."),
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn sort_key(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    fn from_draft(draft: &ContactDraft, id: RecordId) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
        }
    }

    fn validate(draft: &ContactDraft) -> Result<(), ValidationError> {
        validate::contact_draft(draft)
    }
}
