//! Contact Phone Resolver - turn search text into candidate phone numbers.
//!
//! Given a name fragment or a raw phone number, the resolver queries a
//! contact directory and returns the matching phone numbers, each normalized
//! and classified as mobile or not under a configurable numbering plan.
//!
//! # Architecture
//!
//! - **numbering**: Numbering plan, normalizer and mobile classifier
//! - **domain**: Contacts, contact ids and phone entries
//! - **directory**: The contact directory boundary and an in-memory implementation
//! - **resolver**: Search resolution and mobile filtering
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod numbering;
pub mod resolver;

pub use config::Config;
pub use directory::{ContactDirectory, InMemoryDirectory};
pub use domain::{Contact, ContactId, ContactRecord, Phone, PhoneRecord, PhoneType};
pub use error::{ConfigError, DirectoryError};
pub use numbering::{NumberingPlan, PhoneNumberClassifier, PhoneNumberNormalizer};
pub use resolver::{ContactResolver, MobileFilter};
