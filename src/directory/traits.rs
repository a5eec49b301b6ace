use crate::domain::{ContactId, ContactRecord, PhoneRecord, PhoneType};
use crate::error::DirectoryResult;

/// Read-only access to a contact store.
///
/// Provides abstraction over the platform contact database, enabling
/// different implementations (platform bridge, in-memory, mock).
pub trait ContactDirectory: Send + Sync {
    /// Contacts whose name matches `query`. Order and duplicates are up to
    /// the implementation.
    fn find_contacts(&self, query: &str) -> DirectoryResult<Vec<ContactRecord>>;

    /// Phone rows attached to a contact.
    fn phones_for_contact(&self, id: &ContactId) -> DirectoryResult<Vec<PhoneRecord>>;

    /// Display name of the contact owning `number`, or `number` itself when
    /// no contact matches.
    fn name_for_number(&self, number: &str) -> DirectoryResult<String>;

    /// Human-readable label for a phone category.
    fn display_label_for_type(&self, phone_type: PhoneType) -> String;
}
