//! Password value object with expiration and forced-rotation tracking.

use std::fmt;

use acct_shared::HashingConfig;
use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::PasswordError;

/// Minimum number of characters in a plaintext password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum number of characters in a plaintext password
pub const MAX_PASSWORD_LENGTH: usize = 48;

/// bcrypt reads at most this many bytes of input and silently drops the rest
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Length of system-generated passwords
pub const GENERATED_PASSWORD_LENGTH: usize = 16;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// A hashed password
///
/// Only the bcrypt hash of the secret is kept. `expires_at_utc` and
/// `must_change` are recorded but not enforced here: callers run
/// [`Password::validate_expiration`] and [`Password::validate_must_change`]
/// before accepting the password as usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Password {
    hash: String,
    expires_at_utc: Option<DateTime<Utc>>,
    must_change: bool,
}

/// A freshly generated password together with its one-time plaintext
///
/// The plaintext exists so the caller can deliver it to the account owner. It
/// is not part of the [`Password`] and is never persisted.
pub struct GeneratedPassword {
    password: Password,
    secret: String,
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("password", &self.password)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl GeneratedPassword {
    /// The hashed password
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// The generated plaintext
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Split into the hashed password and the plaintext
    pub fn into_parts(self) -> (Password, String) {
        (self.password, self.secret)
    }
}

impl Password {
    /// Hash `plaintext` with the default work factor
    ///
    /// Fails when the secret is blank, its length is outside
    /// [`MIN_PASSWORD_LENGTH`]..=[`MAX_PASSWORD_LENGTH`] characters, or its
    /// UTF-8 encoding is longer than [`MAX_PASSWORD_BYTES`].
    pub fn create(plaintext: &str) -> Result<Self, PasswordError> {
        Self::create_with_config(plaintext, &HashingConfig::default())
    }

    /// Hash `plaintext` with the work factor from `config`
    pub fn create_with_config(plaintext: &str, config: &HashingConfig) -> Result<Self, PasswordError> {
        Self::validate_plaintext(plaintext)?;

        let hash = bcrypt::hash(plaintext, config.bcrypt_cost).map_err(|e| PasswordError::Hashing {
            message: e.to_string(),
        })?;

        Ok(Self {
            hash,
            expires_at_utc: None,
            must_change: false,
        })
    }

    /// Boundary form of [`Password::create`] for inputs that may be absent
    ///
    /// A missing secret is reported as [`PasswordError::Blank`].
    pub fn try_create(plaintext: Option<&str>) -> Result<Self, PasswordError> {
        Self::create(plaintext.ok_or(PasswordError::Blank)?)
    }

    fn validate_plaintext(plaintext: &str) -> Result<(), PasswordError> {
        if plaintext.trim().is_empty() {
            return Err(PasswordError::Blank);
        }

        let length = plaintext.chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: length,
            });
        }
        if length > MAX_PASSWORD_LENGTH {
            return Err(PasswordError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: length,
            });
        }

        // Bytes past the bcrypt limit would not take part in the hash
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooManyBytes {
                max_bytes: MAX_PASSWORD_BYTES,
                actual_bytes: plaintext.len(),
            });
        }

        Ok(())
    }

    /// Check `plaintext` against a hash produced by this type
    ///
    /// Malformed hashes never match.
    pub fn matches(hash: &str, plaintext: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }

    /// Generate a random password and hash it with the default work factor
    pub fn generate() -> Result<GeneratedPassword, PasswordError> {
        Self::generate_with_config(&HashingConfig::default())
    }

    /// Generate a random password and hash it with the work factor from `config`
    pub fn generate_with_config(config: &HashingConfig) -> Result<GeneratedPassword, PasswordError> {
        let secret = Self::generate_secret();
        let password = Self::create_with_config(&secret, config)?;
        debug!("Generated system password");
        Ok(GeneratedPassword { password, secret })
    }

    /// Produce a cryptographically random secret of [`GENERATED_PASSWORD_LENGTH`] characters
    ///
    /// The secret always contains an upper-case letter, a lower-case letter, a
    /// digit and a symbol.
    pub fn generate_secret() -> String {
        let mut rng = OsRng;
        let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();

        let mut bytes: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS]
            .iter()
            .map(|class| class[rng.gen_range(0..class.len())])
            .collect();
        while bytes.len() < GENERATED_PASSWORD_LENGTH {
            bytes.push(all[rng.gen_range(0..all.len())]);
        }
        bytes.shuffle(&mut rng);

        bytes.into_iter().map(char::from).collect()
    }

    /// Set or clear the expiration instant
    pub fn set_expiration(&mut self, expires_at_utc: Option<DateTime<Utc>>) -> &mut Self {
        self.expires_at_utc = expires_at_utc;
        self
    }

    /// Fail if the password expired before `now`
    pub fn validate_expiration(&self, now: DateTime<Utc>) -> Result<(), PasswordError> {
        match self.expires_at_utc {
            Some(expired_at) if expired_at < now => Err(PasswordError::Expired { expired_at }),
            _ => Ok(()),
        }
    }

    /// Flag the password for mandatory rotation
    pub fn set_must_change(&mut self) -> &mut Self {
        if !self.must_change {
            debug!("Password flagged for mandatory change");
        }
        self.must_change = true;
        self
    }

    /// Fail if the password is flagged for mandatory rotation
    pub fn validate_must_change(&self) -> Result<(), PasswordError> {
        if self.must_change {
            return Err(PasswordError::MustChange);
        }
        Ok(())
    }

    /// Run every usability check: expiration first, then forced rotation
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), PasswordError> {
        self.validate_expiration(now)?;
        self.validate_must_change()
    }

    /// bcrypt hash of the secret
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at_utc
    }

    pub fn must_change(&self) -> bool {
        self.must_change
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}
