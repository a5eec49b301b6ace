//! Mobile number classification.

use super::normalizer::PhoneNumberNormalizer;
use super::plan::{NumberingPlan, DEFAULT_MOBILE_PATTERN};
use crate::error::{ConfigError, ConfigResult};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static DEFAULT_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile_full_match(DEFAULT_MOBILE_PATTERN).expect("Failed to compile default mobile pattern")
});

/// Wrap a pattern so it only matches the entire input.
///
/// Unicode mode is off so `\d` means ASCII `[0-9]` only.
fn compile_full_match(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .unicode(false)
        .build()
}

/// Decides whether a phone number has the plan's mobile shape.
#[derive(Debug, Clone)]
pub struct PhoneNumberClassifier {
    normalizer: PhoneNumberNormalizer,
    mobile_regex: Regex,
}

impl PhoneNumberClassifier {
    /// Build a classifier for `plan`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if the plan's mobile pattern
    /// is not a valid regular expression. Patterns are compiled without
    /// Unicode support, so constructs that could match non-UTF-8 bytes
    /// (such as a bare `.`) are rejected too.
    pub fn new(plan: &NumberingPlan) -> ConfigResult<Self> {
        let mobile_regex = if plan.mobile_pattern == DEFAULT_MOBILE_PATTERN {
            DEFAULT_MOBILE_REGEX.clone()
        } else {
            compile_full_match(&plan.mobile_pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: plan.mobile_pattern.clone(),
                reason: e.to_string(),
            })?
        };

        Ok(Self {
            normalizer: PhoneNumberNormalizer::from_plan(plan),
            mobile_regex,
        })
    }

    /// True when the normalized form of `raw` matches the mobile pattern.
    pub fn is_mobile(&self, raw: &str) -> bool {
        self.mobile_regex.is_match(&self.normalizer.normalize(raw))
    }

    /// Normalize `raw` with this classifier's plan.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }
}

impl Default for PhoneNumberClassifier {
    fn default() -> Self {
        Self {
            normalizer: PhoneNumberNormalizer::default(),
            mobile_regex: DEFAULT_MOBILE_REGEX.clone(),
        }
    }
}
