//! Country-specific numbering rules.

use crate::domain::{phone_type, PhoneType};

/// International prefix rewritten by the default plan (France).
pub const DEFAULT_INTERNATIONAL_PREFIX: &str = "+33";

/// Local trunk code substituted for the international prefix.
pub const DEFAULT_TRUNK_CODE: &str = "0";

/// French mobile numbers: ten digits starting with 06 or 07.
pub const DEFAULT_MOBILE_PATTERN: &str = r"0[67]\d{8}";

/// The numbering plan the normalizer, classifier and mobile filter work against.
///
/// Everything that encodes one country's conventions lives here so another
/// plan can be swapped in without touching the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingPlan {
    /// Prefix replaced by `trunk_code` during normalization (e.g. `+33`)
    pub international_prefix: String,

    /// Local trunk code (e.g. `0`)
    pub trunk_code: String,

    /// Shape of a normalized mobile number. Matched against the whole
    /// string, so anchors are optional.
    pub mobile_pattern: String,

    /// Directory category code that marks a phone as mobile
    pub mobile_type: PhoneType,
}

impl Default for NumberingPlan {
    fn default() -> Self {
        Self {
            international_prefix: DEFAULT_INTERNATIONAL_PREFIX.to_string(),
            trunk_code: DEFAULT_TRUNK_CODE.to_string(),
            mobile_pattern: DEFAULT_MOBILE_PATTERN.to_string(),
            mobile_type: phone_type::MOBILE,
        }
    }
}
