//! Phone number normalization.

use super::plan::NumberingPlan;

/// Characters removed before prefix substitution.
const FORMATTING_CHARS: [char; 3] = ['(', ')', ' '];

/// Rewrites raw phone strings into the plan's local form.
///
/// Formatting characters are stripped first, then every occurrence of the
/// international prefix is replaced with the trunk code. Hyphens, dots and
/// `00`-style international prefixes are left alone.
///
/// # Example
///
/// ```
/// use contact_phone_resolver::numbering::PhoneNumberNormalizer;
///
/// let normalizer = PhoneNumberNormalizer::default();
/// assert_eq!(normalizer.normalize("+33 6 12 34 56 78"), "0612345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberNormalizer {
    international_prefix: String,
    trunk_code: String,
}

impl PhoneNumberNormalizer {
    pub fn new(international_prefix: impl Into<String>, trunk_code: impl Into<String>) -> Self {
        Self {
            international_prefix: international_prefix.into(),
            trunk_code: trunk_code.into(),
        }
    }

    pub fn from_plan(plan: &NumberingPlan) -> Self {
        Self::new(plan.international_prefix.clone(), plan.trunk_code.clone())
    }

    /// Normalize a raw phone string.
    pub fn normalize(&self, raw: &str) -> String {
        let stripped: String = raw
            .chars()
            .filter(|c| !FORMATTING_CHARS.contains(c))
            .collect();

        // str::replace with an empty needle would splice the trunk code
        // between every character.
        if self.international_prefix.is_empty() {
            return stripped;
        }

        stripped.replace(&self.international_prefix, &self.trunk_code)
    }
}

impl Default for PhoneNumberNormalizer {
    fn default() -> Self {
        Self::from_plan(&NumberingPlan::default())
    }
}
