//! Domain value objects and types.
//!
//! Contacts and phones as they flow through the resolver. Value objects
//! validate at construction time, and derived phone fields are computed once
//! from the raw number so they can never drift from it.

pub mod contact;
pub mod contact_id;
pub mod errors;
pub mod phone;

pub use contact::{Contact, ContactRecord};
pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use phone::{phone_type, Phone, PhoneRecord, PhoneType};
