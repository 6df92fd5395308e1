//! Domain layer containing the account credential value objects.

pub mod value_objects;

// Re-export commonly used domain types
pub use value_objects::*;
