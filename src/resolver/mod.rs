//! Contact resolution and mobile filtering.

mod contact_resolver;
mod mobile_filter;

pub use contact_resolver::ContactResolver;
pub use mobile_filter::MobileFilter;
