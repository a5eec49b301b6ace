//! Reduce a phone list to mobile numbers.

use crate::domain::{phone_type, Phone, PhoneType};

/// Keeps the mobile entries of a phone list.
///
/// Entries whose number has the plan's mobile shape win. When none do, the
/// filter falls back to entries the directory itself tagged with the mobile
/// category, which catches mobiles from other numbering plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileFilter {
    mobile_type: PhoneType,
}

impl MobileFilter {
    pub fn new(mobile_type: PhoneType) -> Self {
        Self { mobile_type }
    }

    pub fn only_mobile(&self, phones: Vec<Phone>) -> Vec<Phone> {
        if phones.iter().any(Phone::is_mobile) {
            return phones.into_iter().filter(Phone::is_mobile).collect();
        }

        let fallback: Vec<Phone> = phones
            .into_iter()
            .filter(|phone| phone.phone_type() == self.mobile_type)
            .collect();

        if !fallback.is_empty() {
            tracing::debug!(
                count = fallback.len(),
                "No number matched the mobile pattern; using directory mobile type"
            );
        }
        fallback
    }
}

impl Default for MobileFilter {
    fn default() -> Self {
        Self::new(phone_type::MOBILE)
    }
}
