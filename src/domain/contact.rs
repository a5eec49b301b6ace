//! Contacts as seen by the resolver.

use super::contact_id::ContactId;
use super::errors::ValidationError;
use serde::Serialize;

/// A raw row from a directory's contact search.
///
/// Directories may return rows with a missing id or name; those rows are
/// dropped before phone expansion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRecord {
    pub id: Option<ContactId>,
    pub name: Option<String>,
}

impl ContactRecord {
    /// Shorthand for a row with both columns present.
    pub fn new(id: ContactId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }

    /// Upgrade to a [`Contact`] when both id and a non-empty name are present.
    pub fn into_contact(self) -> Option<Contact> {
        match (self.id, self.name) {
            (Some(id), Some(name)) => Contact::new(id, name).ok(),
            _ => None,
        }
    }
}

/// A contact with an id and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Contact {
    id: ContactId,
    name: String,
}

impl Contact {
    /// Create a contact.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(id: ContactId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
