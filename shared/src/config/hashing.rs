//! Password hashing configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Work factor used when nothing else is configured
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Password hashing configuration
///
/// Only the work factor is configurable. Password length rules are fixed
/// domain constants and live next to the password value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HashingConfig {
    /// bcrypt cost (log2 of the number of key expansion rounds)
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl HashingConfig {
    /// Create a config with the given cost, clamped to bcrypt's supported range
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost: bcrypt_cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
        }
    }

    /// Cheapest valid configuration, for test suites
    pub fn fast() -> Self {
        Self::new(MIN_BCRYPT_COST)
    }

    /// Load from `BCRYPT_COST`, falling back to the default on absence or parse failure
    pub fn from_env() -> Self {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}
