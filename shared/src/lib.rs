//! Shared utilities and common types for the account credential workspace
//!
//! This crate provides common functionality used across the domain crates:
//! - Injectable time sources
//! - Configuration types
//! - Logging bootstrap
//! - Error response structures
//! - Utility functions (fingerprint encoding)

pub mod config;
pub mod errors;
pub mod logging;
pub mod time;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, HashingConfig, LogFormat, LoggingConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use logging::init_tracing;
pub use time::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use utils::encoding;
