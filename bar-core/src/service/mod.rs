//! Business logic layer

pub mod business_lookup;

pub use business_lookup::BusinessLookupService;
