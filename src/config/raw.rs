//! Raw key/value settings as the admin settings form stores them.
//!
//! Values are loosely typed: merchant serial numbers are often stored as
//! integers and `test_mode` may be a bool, a number or a string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use super::error::ConfigError;

/// Environment prefix for [`RawSettings::from_env`].
pub const ENV_PREFIX: &str = "VIPPS_RECURRING";

/// A single loosely typed setting value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Int(n) => write!(f, "{}", n),
            RawValue::Float(x) => write!(f, "{}", x),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

/// Raw settings mapping.
///
/// Keys that are absent or null are "not set"; an empty string is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSettings {
    values: BTreeMap<String, RawValue>,
}

impl RawSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks a key up exactly, then case-insensitively.
    ///
    /// Environment sources lower-case keys, so `MerchantAgreementUrl`
    /// arrives as `merchantagreementurl`.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key).or_else(|| {
            self.values
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
    }

    /// String view of a value; numbers and bools are rendered as text.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }

    /// Reads a boolean-like value.
    ///
    /// Accepts booleans, integers (non-zero is true) and the strings
    /// `1/0`, `true/false`, `yes/no`, `on/off` and the empty string (false).
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        let value = match self.get(key) {
            Some(value) => value,
            None => return Ok(None),
        };

        let parsed = match value {
            RawValue::Bool(b) => Some(*b),
            RawValue::Int(n) => Some(*n != 0),
            RawValue::Float(x) => Some(*x != 0.0),
            RawValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" | "" => Some(false),
                _ => None,
            },
        };

        parsed.map(Some).ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Parses settings from a YAML mapping.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, Option<RawValue>> = serde_yaml::from_str(yaml)?;
        Ok(raw.into_iter().collect())
    }

    /// Reads settings from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Loads settings from environment variables.
    ///
    /// Loads `.env` if present, then reads `VIPPS_RECURRING__<KEY>`
    /// variables, e.g. `VIPPS_RECURRING__TEST_MSN=123456`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Loads settings from environment variables with a custom prefix.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, Option<RawValue>> = config::Config::builder()
            .add_source(config::Environment::with_prefix(prefix).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(raw.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Option<RawValue>)> for RawSettings {
    fn from_iter<I: IntoIterator<Item = (K, Option<RawValue>)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k.into(), v)))
            .collect();
        Self { values }
    }
}
