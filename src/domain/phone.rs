//! Phone entries produced by the resolver.

use crate::numbering::PhoneNumberClassifier;
use serde::{Deserialize, Serialize};

/// Directory-specific phone category code.
pub type PhoneType = i32;

/// Phone category codes used by Android-style contact stores.
pub mod phone_type {
    use super::PhoneType;

    pub const CUSTOM: PhoneType = 0;
    pub const HOME: PhoneType = 1;
    pub const MOBILE: PhoneType = 2;
    pub const WORK: PhoneType = 3;
    pub const FAX_WORK: PhoneType = 4;
    pub const FAX_HOME: PhoneType = 5;
    pub const PAGER: PhoneType = 6;
    pub const OTHER: PhoneType = 7;
}

/// A raw phone row as returned by a directory for one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRecord {
    pub number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

impl PhoneRecord {
    pub fn new(number: impl Into<String>, label: Option<&str>, phone_type: PhoneType) -> Self {
        Self {
            number: number.into(),
            label: label.map(str::to_string),
            phone_type,
        }
    }
}

/// A candidate phone number tied to a display name.
///
/// `clean_number` and `is_mobile` are derived from `number` when the entry is
/// built and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phone {
    number: String,
    clean_number: String,
    contact_name: String,
    is_mobile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    phone_type: PhoneType,
}

impl Phone {
    pub fn new(
        classifier: &PhoneNumberClassifier,
        number: impl Into<String>,
        contact_name: impl Into<String>,
        label: Option<String>,
        phone_type: PhoneType,
    ) -> Self {
        let number = number.into();
        Self {
            clean_number: classifier.normalize(&number),
            is_mobile: classifier.is_mobile(&number),
            number,
            contact_name: contact_name.into(),
            label,
            phone_type,
        }
    }

    /// The number as supplied by the directory or the user.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn clean_number(&self) -> &str {
        &self.clean_number
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn phone_type(&self) -> PhoneType {
        self.phone_type
    }
}
