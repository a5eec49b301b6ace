//! In-memory contact directory.
//!
//! Holds contacts in insertion order and answers the [`ContactDirectory`]
//! queries the way an Android-style contact provider does: substring name
//! search, loose phone number equality, and stock labels per phone type.

use super::traits::ContactDirectory;
use crate::domain::{phone_type, ContactId, ContactRecord, PhoneRecord, PhoneType};
use crate::error::{DirectoryError, DirectoryResult};
use serde::Deserialize;
use std::path::Path;

/// Trailing digits compared when two numbers differ only in their prefix.
const LOOSE_MATCH_DIGITS: usize = 9;

/// One stored contact and its phones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct DirectoryEntry {
    id: ContactId,
    name: String,
    #[serde(default)]
    phones: Vec<PhoneRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    contacts: Vec<DirectoryEntry>,
}

/// A [`ContactDirectory`] backed by a `Vec` of entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    entries: Vec<DirectoryEntry>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact with its phones.
    pub fn add_contact(
        &mut self,
        id: ContactId,
        name: impl Into<String>,
        phones: Vec<PhoneRecord>,
    ) -> &mut Self {
        self.entries.push(DirectoryEntry {
            id,
            name: name.into(),
            phones,
        });
        self
    }

    /// Parse a `{"contacts": [...]}` document.
    pub fn from_json_str(json: &str) -> DirectoryResult<Self> {
        let file: DirectoryFile = serde_json::from_str(json)?;
        tracing::debug!(contacts = file.contacts.len(), "Loaded contact directory");
        Ok(Self {
            entries: file.contacts,
        })
    }

    /// Read and parse a contacts file.
    pub fn from_path(path: impl AsRef<Path>) -> DirectoryResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading contacts from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// Loose phone equality: same digits, or same trailing digits when both
/// numbers are long enough to carry a full subscriber number.
fn numbers_match(a: &str, b: &str) -> bool {
    let (a, b) = (digits(a), digits(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }
    a.len() >= LOOSE_MATCH_DIGITS
        && b.len() >= LOOSE_MATCH_DIGITS
        && a[a.len() - LOOSE_MATCH_DIGITS..] == b[b.len() - LOOSE_MATCH_DIGITS..]
}

impl ContactDirectory for InMemoryDirectory {
    fn find_contacts(&self, query: &str) -> DirectoryResult<Vec<ContactRecord>> {
        let needle = query.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .map(|entry| ContactRecord::new(entry.id.clone(), entry.name.clone()))
            .collect())
    }

    fn phones_for_contact(&self, id: &ContactId) -> DirectoryResult<Vec<PhoneRecord>> {
        self.entries
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.phones.clone())
            .ok_or_else(|| DirectoryError::LookupFailed {
                operation: "phones_for_contact",
                reason: format!("Contact {} not found", id),
            })
    }

    fn name_for_number(&self, number: &str) -> DirectoryResult<String> {
        let name = self
            .entries
            .iter()
            .find(|entry| {
                entry
                    .phones
                    .iter()
                    .any(|phone| numbers_match(&phone.number, number))
            })
            .map(|entry| entry.name.clone());

        Ok(name.unwrap_or_else(|| number.to_string()))
    }

    fn display_label_for_type(&self, phone_type: PhoneType) -> String {
        match phone_type {
            phone_type::CUSTOM => "Custom",
            phone_type::HOME => "Home",
            phone_type::MOBILE => "Mobile",
            phone_type::WORK => "Work",
            phone_type::FAX_WORK => "Work Fax",
            phone_type::FAX_HOME => "Home Fax",
            phone_type::PAGER => "Pager",
            _ => "Other",
        }
        .to_string()
    }
}
