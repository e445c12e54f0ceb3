//! Monthly charge records.
//!
//! One record per billing event against an agreement.

use serde::{Deserialize, Serialize};

use crate::domain::agreement::{validate_agreement_id, validate_price};
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::revision::Revisionable;

/// Charge status in the provider's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeStatus {
    Pending,
    Due,
    Reserved,
    Charged,
    Failed,
    Refunded,
    PartiallyRefunded,
    Cancelled,
    Processing,
}

impl ChargeStatus {
    /// Returns true once the provider will not change the charge any more
    /// without a refund.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            ChargeStatus::Charged
                | ChargeStatus::Failed
                | ChargeStatus::Refunded
                | ChargeStatus::Cancelled
        )
    }

    /// Captured money can be refunded.
    pub fn is_refundable(&self) -> bool {
        matches!(self, ChargeStatus::Charged | ChargeStatus::PartiallyRefunded)
    }

    /// Reserved money can be captured.
    pub fn is_capturable(&self) -> bool {
        matches!(self, ChargeStatus::Reserved)
    }
}

/// Locally stored monthly charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCharge {
    agreement_id: String,
    charge_id: String,
    price_minor_units: i64,
    description: String,
    status: ChargeStatus,
    created: Timestamp,
}

impl MonthlyCharge {
    pub fn new(
        agreement_id: impl Into<String>,
        charge_id: impl Into<String>,
        price_minor_units: i64,
        description: impl Into<String>,
        status: ChargeStatus,
    ) -> Result<Self, ValidationError> {
        let agreement_id = agreement_id.into();
        let charge_id = charge_id.into();

        validate_agreement_id(&agreement_id)?;
        if charge_id.trim().is_empty() {
            return Err(ValidationError::empty_field("charge_id"));
        }
        validate_price(price_minor_units)?;

        Ok(Self {
            agreement_id,
            charge_id,
            price_minor_units,
            description: description.into(),
            status,
            created: Timestamp::now(),
        })
    }

    pub fn agreement_id(&self) -> &str {
        &self.agreement_id
    }

    pub fn charge_id(&self) -> &str {
        &self.charge_id
    }

    pub fn price_minor_units(&self) -> i64 {
        self.price_minor_units
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> ChargeStatus {
        self.status
    }

    pub fn created(&self) -> Timestamp {
        self.created
    }

    /// Records the latest status reported by the provider.
    pub fn set_status(&mut self, status: ChargeStatus) {
        self.status = status;
    }
}

impl Revisionable for MonthlyCharge {
    fn label(&self) -> String {
        self.charge_id.clone()
    }
}
