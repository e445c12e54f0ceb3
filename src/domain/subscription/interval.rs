//! Billing interval units.
//!
//! The provider only understands three units, sent as upper-case tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::SubscriptionError;

/// Unit of a recurring billing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IntervalUnit {
    Day,
    Week,
    Month,
}

impl IntervalUnit {
    /// Provider token for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalUnit::Day => "DAY",
            IntervalUnit::Week => "WEEK",
            IntervalUnit::Month => "MONTH",
        }
    }

    /// Length of one unit in days.
    ///
    /// A month is always 30 days; this is not calendar-accurate.
    pub fn days(&self) -> u32 {
        match self {
            IntervalUnit::Day => 1,
            IntervalUnit::Week => 7,
            IntervalUnit::Month => 30,
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntervalUnit {
    type Err = SubscriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DAY" => Ok(IntervalUnit::Day),
            "WEEK" => Ok(IntervalUnit::Week),
            "MONTH" => Ok(IntervalUnit::Month),
            other => Err(SubscriptionError::InvalidInterval(other.to_string())),
        }
    }
}
