//! Domain-specific error types and error handling.

mod types;


pub use types::{EmailError, PasswordError, VerificationCodeError};

use acct_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Coarse error classification shared with the calling layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or empty email address
    InvalidEmail,
    /// Bad length or blank secret, expired, or must-change
    InvalidPassword,
    /// Expired, inactive, mismatched or malformed verification code
    InvalidVerificationCode,
    /// A required argument or collaborator was missing
    ArgumentNull,
}

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Programming error: a mandatory input was absent. Raised before any
    /// domain validation runs.
    #[error("Missing required argument: {argument}")]
    ArgumentNull { argument: &'static str },

    // Bridge to specific error types
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    VerificationCode(#[from] VerificationCodeError),
}

impl DomainError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ArgumentNull { .. } => ErrorKind::ArgumentNull,
            DomainError::Email(_) => ErrorKind::InvalidEmail,
            DomainError::Password(_) => ErrorKind::InvalidPassword,
            DomainError::VerificationCode(_) => ErrorKind::InvalidVerificationCode,
        }
    }

    /// Stable error code for clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::ArgumentNull { .. } => error_codes::ARGUMENT_NULL,
            DomainError::Email(_) => error_codes::EMAIL_INVALID,
            DomainError::Password(PasswordError::Expired { .. }) => error_codes::PASSWORD_EXPIRED,
            DomainError::Password(PasswordError::MustChange) => error_codes::PASSWORD_MUST_CHANGE,
            DomainError::Password(PasswordError::Hashing { .. }) => error_codes::INTERNAL_ERROR,
            DomainError::Password(_) => error_codes::PASSWORD_INVALID,
            DomainError::VerificationCode(VerificationCodeError::Expired) => {
                error_codes::VERIFICATION_CODE_EXPIRED
            }
            DomainError::VerificationCode(_) => error_codes::VERIFICATION_CODE_INVALID,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self, timestamp: DateTime<Utc>) -> ErrorResponse {
        let response = ErrorResponse::new(self.error_code(), self.to_string(), timestamp);
        match self {
            DomainError::ArgumentNull { argument } => response.add_detail("argument", argument),
            DomainError::Password(PasswordError::TooShort { min, .. }) => {
                response.add_detail("min_length", min)
            }
            DomainError::Password(PasswordError::TooLong { max, .. }) => {
                response.add_detail("max_length", max)
            }
            DomainError::Password(PasswordError::TooManyBytes { max_bytes, .. }) => {
                response.add_detail("max_bytes", max_bytes)
            }
            DomainError::Password(PasswordError::Expired { expired_at }) => {
                response.add_detail("expired_at", expired_at)
            }
            _ => response,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
