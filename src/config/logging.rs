//! Logging configuration and subscriber setup

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::error::{ConfigError, ValidationError};
use super::raw::RawSettings;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// One JSON object per line for log aggregation.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Reads `log_level` and `log_format` from raw settings.
    pub fn from_raw(raw: &RawSettings) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = raw.get_str("log_level") {
            config.level = level;
        }

        if let Some(format) = raw.get_str("log_format") {
            config.format = match format.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "log_format".to_string(),
                        value: format,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidLogLevel(self.level.clone()))
    }

    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` overrides the configured level. Fails if a subscriber is
    /// already installed.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let registry = tracing_subscriber::registry().with(filter);

        let result = match self.format {
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_current_span(true)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| ConfigError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pretty_info() {
        let config = LoggingConfig::from_raw(&RawSettings::new()).unwrap();
        assert_eq!(config, LoggingConfig::default());
        assert_eq!(config.level, "info");
    }

    #[test]
    fn reads_level_and_format() {
        let raw = RawSettings::new()
            .with("log_level", "vipps_recurring=debug")
            .with("log_format", "JSON");
        let config = LoggingConfig::from_raw(&raw).unwrap();
        assert_eq!(config.level, "vipps_recurring=debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_format() {
        let raw = RawSettings::new().with("log_format", "xml");
        assert!(LoggingConfig::from_raw(&raw).is_err());
    }

    #[test]
    fn validate_rejects_bad_directive() {
        let config = LoggingConfig {
            level: "vipps_recurring=loud".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }
}
