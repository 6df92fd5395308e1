//! One-time verification code value object.

use std::fmt;
use std::sync::Arc;

use acct_shared::TimeSource;
use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{DomainError, DomainResult, VerificationCodeError};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Lifetime of a verification code (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Lifecycle state of a verification code at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationCodeState {
    /// Waiting to be verified, not yet expired
    Pending,
    /// Lapsed without verification (derived from `expires_at_utc`, not stored)
    Expired,
    /// Successfully verified; terminal
    Verified,
}

/// A short-lived, single-use verification code
///
/// Created pending with a five minute lifetime. The only transition is
/// pending to verified, through [`VerificationCode::verify`]; after it
/// `expires_at_utc` is cleared for good and the code cannot be verified again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    code: String,
    expires_at_utc: Option<DateTime<Utc>>,
    verified_at_utc: Option<DateTime<Utc>>,
}

impl VerificationCode {
    /// Issue a new random code that expires [`DEFAULT_EXPIRATION_MINUTES`] from now
    pub fn create(time_source: &dyn TimeSource) -> Self {
        let now = time_source.utc_now();
        let expires_at = now + Duration::minutes(DEFAULT_EXPIRATION_MINUTES);
        debug!(expires_at = %expires_at, "Issued verification code");

        Self {
            code: Self::generate_code(),
            expires_at_utc: Some(expires_at),
            verified_at_utc: None,
        }
    }

    /// Boundary form of [`VerificationCode::create`] for a collaborator that may be absent
    ///
    /// A missing time source fails with [`DomainError::ArgumentNull`].
    pub fn try_create(time_source: Option<Arc<dyn TimeSource>>) -> DomainResult<Self> {
        let time_source = time_source.ok_or(DomainError::ArgumentNull {
            argument: "time_source",
        })?;
        Ok(Self::create(time_source.as_ref()))
    }

    /// Generates a random upper-case alphanumeric code of [`CODE_LENGTH`] characters
    fn generate_code() -> String {
        let mut rng = OsRng;
        (0..CODE_LENGTH)
            .map(|_| char::from(CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())]))
            .collect()
    }

    /// Whether the code is still waiting to be verified
    pub fn is_active(&self) -> bool {
        self.verified_at_utc.is_none() && self.expires_at_utc.is_some()
    }

    /// Whether the code lapsed before the current instant
    pub fn is_expired(&self, time_source: &dyn TimeSource) -> bool {
        self.is_expired_at(time_source.utc_now())
    }

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_utc.map_or(false, |expires_at| expires_at < now)
    }

    /// Lifecycle state at the current instant
    ///
    /// A code that is neither verified nor carries an expiration is reported as
    /// expired: it can no longer be verified.
    pub fn state(&self, time_source: &dyn TimeSource) -> VerificationCodeState {
        if self.verified_at_utc.is_some() {
            VerificationCodeState::Verified
        } else if self.is_active() && !self.is_expired(time_source) {
            VerificationCodeState::Pending
        } else {
            VerificationCodeState::Expired
        }
    }

    /// Remaining lifetime, zero once expired or verified
    pub fn time_until_expiration(&self, time_source: &dyn TimeSource) -> Duration {
        match self.expires_at_utc {
            Some(expires_at) if self.verified_at_utc.is_none() => {
                (expires_at - time_source.utc_now()).max(Duration::zero())
            }
            _ => Duration::zero(),
        }
    }

    /// Verify `candidate` and consume the code
    ///
    /// Gates are checked in order: expiry, activity, match, length. Each one is
    /// checked on its own even where another implies it. The first failing gate
    /// is returned and the code is left unchanged. On success the verification
    /// instant is recorded and the expiration cleared.
    pub fn verify(&mut self, candidate: &str, time_source: &dyn TimeSource) -> Result<(), VerificationCodeError> {
        let now = time_source.utc_now();

        if self.is_expired_at(now) {
            return Err(VerificationCodeError::Expired);
        }

        if !self.is_active() {
            return Err(VerificationCodeError::Inactive);
        }

        if candidate.is_empty() || !constant_time_eq(self.code.as_bytes(), candidate.as_bytes()) {
            return Err(VerificationCodeError::Mismatch);
        }

        let length = candidate.chars().count();
        if length != CODE_LENGTH {
            return Err(VerificationCodeError::InvalidLength {
                expected: CODE_LENGTH,
                actual: length,
            });
        }

        self.verified_at_utc = Some(now);
        self.expires_at_utc = None;
        debug!(verified_at = %now, "Verification code consumed");

        Ok(())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at_utc
    }

    pub fn verified_at_utc(&self) -> Option<DateTime<Utc>> {
        self.verified_at_utc
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Forces a [`VerificationCode`] into an arbitrary state
///
/// Only compiled for tests. Performs no validation, so each verification gate
/// can be exercised on its own.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone)]
pub struct VerificationCodeBuilder {
    inner: VerificationCode,
}

#[cfg(any(test, feature = "test-util"))]
impl VerificationCodeBuilder {
    /// Start from a freshly issued code
    pub fn new(time_source: &dyn TimeSource) -> Self {
        Self {
            inner: VerificationCode::create(time_source),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = code.into();
        self
    }

    pub fn expires_at(mut self, expires_at_utc: Option<DateTime<Utc>>) -> Self {
        self.inner.expires_at_utc = expires_at_utc;
        self
    }

    pub fn verified_at(mut self, verified_at_utc: Option<DateTime<Utc>>) -> Self {
        self.inner.verified_at_utc = verified_at_utc;
        self
    }

    pub fn build(self) -> VerificationCode {
        self.inner
    }
}
