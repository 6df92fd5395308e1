//! # Account Credentials Core
//!
//! Self-validating credential primitives for account management: a normalized
//! [`Email`], a hashed [`Password`] with expiration and forced rotation, and a
//! single-use [`VerificationCode`]. Time-sensitive behavior reads the clock only
//! through an injected [`acct_shared::TimeSource`].

pub mod domain;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
