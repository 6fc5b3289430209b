//! Client Entity

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Client data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub notes: String,
}

impl Entity for Client {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Editable client fields, sent as the body of add/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub contact: String,
    pub notes: String,
}

impl ClientDraft {
    /// `name` is the only client-side invariant
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingField("name".to_string()));
        }
        Ok(())
    }
}

impl From<&Client> for ClientDraft {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            contact: client.contact.clone(),
            notes: client.notes.clone(),
        }
    }
}
