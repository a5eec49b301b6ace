//! Search text to candidate phones.
//!
//! A search is either a literal mobile number, answered without touching the
//! directory's contact search, or a name query expanded into every phone of
//! every matching contact.

use super::mobile_filter::MobileFilter;
use crate::directory::ContactDirectory;
use crate::domain::{Contact, Phone, PhoneRecord, PhoneType};
use crate::error::{ConfigResult, DirectoryResult};
use crate::numbering::{NumberingPlan, PhoneNumberClassifier};
use std::sync::Arc;

/// Resolves search text into [`Phone`] candidates against a directory.
pub struct ContactResolver {
    directory: Arc<dyn ContactDirectory>,
    classifier: PhoneNumberClassifier,
    mobile_filter: MobileFilter,
    mobile_type: PhoneType,
}

impl ContactResolver {
    /// Create a resolver for `plan`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the plan's mobile pattern does not compile.
    pub fn new(directory: Arc<dyn ContactDirectory>, plan: &NumberingPlan) -> ConfigResult<Self> {
        Ok(Self {
            directory,
            classifier: PhoneNumberClassifier::new(plan)?,
            mobile_filter: MobileFilter::new(plan.mobile_type),
            mobile_type: plan.mobile_type,
        })
    }

    /// Create a resolver using the default (French) numbering plan.
    pub fn with_default_plan(directory: Arc<dyn ContactDirectory>) -> Self {
        let plan = NumberingPlan::default();
        Self {
            directory,
            classifier: PhoneNumberClassifier::default(),
            mobile_filter: MobileFilter::new(plan.mobile_type),
            mobile_type: plan.mobile_type,
        }
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.classifier.normalize(raw)
    }

    pub fn is_mobile(&self, raw: &str) -> bool {
        self.classifier.is_mobile(raw)
    }

    /// Display name for `number`, or the number itself when unknown.
    pub fn contact_name(&self, number: &str) -> DirectoryResult<String> {
        self.directory.name_for_number(number)
    }

    /// Contacts matching `search_text`, skipping rows without an id or name.
    ///
    /// An empty search returns no contacts without querying the directory.
    pub fn matching_contacts(&self, search_text: &str) -> DirectoryResult<Vec<Contact>> {
        if search_text.is_empty() {
            return Ok(Vec::new());
        }

        let records = self.directory.find_contacts(search_text)?;
        let total = records.len();
        let contacts: Vec<Contact> = records
            .into_iter()
            .filter_map(|record| record.into_contact())
            .collect();

        if contacts.len() < total {
            tracing::warn!(
                skipped = total - contacts.len(),
                "Skipped contact records without id or name"
            );
        }
        Ok(contacts)
    }

    /// Every candidate phone for `search_text`.
    ///
    /// Directory errors are returned unchanged. No deduplication is done, so
    /// a number shared by two contacts appears twice.
    pub fn resolve_candidates(&self, search_text: &str) -> DirectoryResult<Vec<Phone>> {
        if self.classifier.is_mobile(search_text) {
            tracing::debug!("Search text is a mobile number");
            let contact_name = self.directory.name_for_number(search_text)?;
            let phone = Phone::new(
                &self.classifier,
                search_text,
                contact_name,
                None,
                self.mobile_type,
            );
            return Ok(vec![phone]);
        }

        let contacts = self.matching_contacts(search_text)?;
        tracing::debug!(contacts = contacts.len(), "Expanding matching contacts");

        let mut phones = Vec::new();
        for contact in &contacts {
            for record in self.directory.phones_for_contact(contact.id())? {
                phones.push(self.build_phone(contact, record)?);
            }
        }
        Ok(phones)
    }

    /// Mobile candidates for `search_text`, see [`MobileFilter`].
    pub fn resolve_mobile_candidates(&self, search_text: &str) -> DirectoryResult<Vec<Phone>> {
        let phones = self.resolve_candidates(search_text)?;
        Ok(self.mobile_filter.only_mobile(phones))
    }

    fn build_phone(&self, contact: &Contact, record: PhoneRecord) -> DirectoryResult<Phone> {
        let label = match record.label {
            Some(label) if !label.is_empty() => label,
            _ => self.directory.display_label_for_type(record.phone_type),
        };

        // The display name goes through the number lookup keyed by the
        // contact's name, so a directory that maps names differently
        // changes the output.
        let contact_name = self.directory.name_for_number(contact.name())?;

        let phone = Phone::new(
            &self.classifier,
            record.number,
            contact_name,
            Some(label),
            record.phone_type,
        );
        tracing::trace!(
            number = phone.number(),
            is_mobile = phone.is_mobile(),
            "Built phone candidate"
        );
        Ok(phone)
    }
}
