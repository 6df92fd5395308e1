//! Common utility functions

pub mod encoding;

// Re-export commonly used utilities
pub use encoding::*;
