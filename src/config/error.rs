//! Configuration error types

use thiserror::Error;

/// Errors that can occur while loading or reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(&'static str),

    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("Identifier '{0}' cannot be empty")]
    InvalidIdentifier(&'static str),

    #[error("Logging initialization failed: {0}")]
    Logging(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Merchant agreement URL must be an absolute http(s) URL")]
    InvalidMerchantAgreementUrl,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
