//! Value objects representing immutable domain concepts.

pub mod email;
pub mod password;
pub mod verification_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use email::Email;
pub use password::{
    GeneratedPassword, Password, GENERATED_PASSWORD_LENGTH, MAX_PASSWORD_BYTES, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use verification_code::{
    VerificationCode, VerificationCodeState, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES,
};

#[cfg(any(test, feature = "test-util"))]
pub use verification_code::VerificationCodeBuilder;
