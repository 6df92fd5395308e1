//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `hashing` - Password hashing work factor

pub mod environment;
pub mod hashing;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use hashing::{HashingConfig, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub hashing: HashingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            logging: LoggingConfig::for_environment(env),
            hashing: HashingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration for a given environment
    pub fn for_environment(env: Environment) -> Self {
        Self {
            environment: env,
            logging: LoggingConfig::for_environment(env),
            hashing: HashingConfig::default(),
        }
    }

    /// Load configuration from process environment variables
    ///
    /// Reads the environment-specific `.env` file first (if any), then the plain
    /// `.env`, without overriding variables that are already set.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        dotenvy::from_filename(env.env_file()).ok();
        dotenvy::dotenv().ok();

        let mut config = Self::for_environment(env);
        config.hashing = HashingConfig::from_env();
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }
        config
    }
}
