//! Agreement status state machine.
//!
//! Mirrors the provider's agreement lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Status of a recurring agreement as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgreementStatus {
    /// Sent to the payer, not yet accepted.
    Pending,

    /// Accepted; charges may be created.
    Active,

    /// Stopped by merchant or payer.
    Stopped,

    /// Never accepted in time.
    Expired,
}

impl AgreementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementStatus::Pending => "PENDING",
            AgreementStatus::Active => "ACTIVE",
            AgreementStatus::Stopped => "STOPPED",
            AgreementStatus::Expired => "EXPIRED",
        }
    }

    /// Returns true if new charges can be created against the agreement.
    pub fn accepts_charges(&self) -> bool {
        matches!(self, AgreementStatus::Active)
    }
}

impl StateMachine for AgreementStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AgreementStatus::*;
        matches!(
            (self, target),
            (Pending, Active) | (Pending, Expired) | (Active, Stopped)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AgreementStatus::*;
        match self {
            Pending => vec![Active, Expired],
            Active => vec![Stopped],
            Stopped | Expired => vec![],
        }
    }
}

impl fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgreementStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(AgreementStatus::Pending),
            "ACTIVE" => Ok(AgreementStatus::Active),
            "STOPPED" => Ok(AgreementStatus::Stopped),
            "EXPIRED" => Ok(AgreementStatus::Expired),
            other => Err(ValidationError::invalid_format(
                "agreement_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
