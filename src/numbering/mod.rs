//! Numbering plan rules: normalization and mobile classification.

pub mod classifier;
pub mod normalizer;
pub mod plan;

pub use classifier::PhoneNumberClassifier;
pub use normalizer::PhoneNumberNormalizer;
pub use plan::NumberingPlan;
