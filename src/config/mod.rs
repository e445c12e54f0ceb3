//! Application configuration module
//!
//! Settings arrive as a loosely typed key/value mapping (the admin settings
//! form's raw data, a YAML file, or `VIPPS_RECURRING__*` environment
//! variables) and are resolved once into immutable typed configuration.
//!
//! # Example
//!
//! ```no_run
//! use vipps_recurring::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Calling {}", config.vipps.base_url());
//! ```

mod error;
mod logging;
mod raw;
mod vipps;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use raw::{RawSettings, RawValue, ENV_PREFIX};
pub use vipps::VippsApiConfig;

/// Root application configuration
#[derive(Debug)]
pub struct AppConfig {
    /// Vipps recurring API credentials and endpoints
    pub vipps: VippsApiConfig,

    /// Log level and output format
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VIPPS_RECURRING` prefix
    /// 3. Resolves the credential set selected by `test_mode`
    ///
    /// # Environment Variable Format
    ///
    /// - `VIPPS_RECURRING__TEST_MODE=1` -> `test_mode = 1`
    /// - `VIPPS_RECURRING__TEST_MSN=123456` -> `test_msn = 123456`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the environment cannot be read or a value
    /// such as `test_mode` cannot be interpreted.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_raw(&RawSettings::from_env_with_prefix(ENV_PREFIX)?)
    }

    /// Resolve configuration from an already loaded settings mapping
    pub fn from_raw(raw: &RawSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            vipps: VippsApiConfig::from_raw(raw)?,
            logging: LoggingConfig::from_raw(raw)?,
        })
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a credential of the active set is missing,
    /// the merchant agreement URL is not absolute, or the log level is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.vipps.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if the sandbox environment is selected
    pub fn is_test_mode(&self) -> bool {
        self.vipps.is_test_mode()
    }
}
