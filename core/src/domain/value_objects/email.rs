//! Email address value object.

use std::fmt;

use acct_shared::{encoding::to_base64, TimeSource};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult, EmailError};

// local-part "@" domain, with at least one dot in the domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$")
        .expect("email pattern is a valid regex")
});

/// A normalized email address with its lookup fingerprint
///
/// The address is always trimmed, lower-cased and well formed. `hash` is the
/// base64 encoding of the normalized address, so two inputs that differ only in
/// case or surrounding whitespace share the same fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EmailRecord")]
pub struct Email {
    address: String,
    hash: String,
}

/// Stored shape of an email. The fingerprint is recomputed on load.
#[derive(Deserialize)]
struct EmailRecord {
    address: String,
}

impl Email {
    /// Normalize and validate `raw` into an email address
    ///
    /// The time source is part of the uniform value object construction
    /// contract; an address has no time-dependent state.
    pub fn create(raw: &str, _time_source: &dyn TimeSource) -> Result<Self, EmailError> {
        Self::parse(raw)
    }

    /// Boundary form of [`Email::create`] for inputs that may be absent
    ///
    /// A missing address is a programming error and fails with
    /// [`DomainError::ArgumentNull`] before any validation is attempted.
    pub fn try_create(raw: Option<&str>, time_source: &dyn TimeSource) -> DomainResult<Self> {
        let raw = raw.ok_or(DomainError::ArgumentNull { argument: "address" })?;
        Ok(Self::create(raw, time_source)?)
    }

    fn parse(raw: &str) -> Result<Self, EmailError> {
        let address = raw.trim().to_lowercase();

        if address.is_empty() {
            return Err(EmailError::Empty);
        }

        if !EMAIL_REGEX.is_match(&address) {
            return Err(EmailError::InvalidFormat { address });
        }

        let hash = to_base64(&address);
        Ok(Self { address, hash })
    }

    /// Normalized address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Base64 fingerprint of the normalized address
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl TryFrom<&str> for Email {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<EmailRecord> for Email {
    type Error = EmailError;

    fn try_from(record: EmailRecord) -> Result<Self, Self::Error> {
        Self::parse(&record.address)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
