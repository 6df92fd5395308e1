//! Error types raised by the credential value objects
//!
//! Each value object fails with its own enum so callers can match on the exact
//! rule that was violated. [`super::DomainError`] bridges them into one taxonomy.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Email address validation errors (`InvalidEmail` kind)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is empty")]
    Empty,

    #[error("Invalid email format: {address}")]
    InvalidFormat { address: String },
}

/// Password errors (`InvalidPassword` kind)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Blank,

    #[error("Password too short (min: {min}, actual: {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long (max: {max}, actual: {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password exceeds hashable size (max bytes: {max_bytes}, actual: {actual_bytes})")]
    TooManyBytes { max_bytes: usize, actual_bytes: usize },

    #[error("Password expired at {expired_at}")]
    Expired { expired_at: DateTime<Utc> },

    #[error("Password must be changed")]
    MustChange,

    #[error("Password hashing failed: {message}")]
    Hashing { message: String },
}

/// Verification code errors (`InvalidVerificationCode` kind)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationCodeError {
    #[error("Verification code expired")]
    Expired,

    #[error("Verification code is not active")]
    Inactive,

    #[error("Verification code does not match")]
    Mismatch,

    #[error("Invalid verification code length (expected: {expected}, actual: {actual})")]
    InvalidLength { expected: usize, actual: usize },
}
