//! Agreement record, the stored copy of a provider agreement.

use serde::{Deserialize, Serialize};

use super::status::AgreementStatus;
use crate::domain::foundation::{StateMachine, Timestamp, ValidationError};
use crate::domain::revision::Revisionable;

/// Maximum length of a provider agreement id.
pub const AGREEMENT_ID_MAX_LEN: usize = 50;

/// Norwegian mobile numbers are 8 digits without country code.
const MOBILE_LEN: usize = 8;

/// Locally stored agreement.
///
/// Price and status are the fields that change between revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementRecord {
    agreement_id: String,
    mobile: String,
    price_minor_units: i64,
    status: AgreementStatus,
    published: bool,
    created: Timestamp,
    changed: Timestamp,
}

impl AgreementRecord {
    /// Creates a new, published agreement record.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` for a bad agreement id
    /// - `InvalidFormat` for a mobile number that is not 8 digits
    /// - `InvalidFormat` for a negative price
    pub fn new(
        agreement_id: impl Into<String>,
        mobile: impl Into<String>,
        price_minor_units: i64,
        status: AgreementStatus,
    ) -> Result<Self, ValidationError> {
        let agreement_id = agreement_id.into();
        let mobile = mobile.into();

        validate_agreement_id(&agreement_id)?;
        validate_mobile(&mobile)?;
        validate_price(price_minor_units)?;

        let now = Timestamp::now();
        Ok(Self {
            agreement_id,
            mobile,
            price_minor_units,
            status,
            published: true,
            created: now,
            changed: now,
        })
    }

    pub fn agreement_id(&self) -> &str {
        &self.agreement_id
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn price_minor_units(&self) -> i64 {
        self.price_minor_units
    }

    pub fn status(&self) -> AgreementStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn created(&self) -> Timestamp {
        self.created
    }

    pub fn changed(&self) -> Timestamp {
        self.changed
    }

    pub fn set_price(&mut self, price_minor_units: i64) -> Result<(), ValidationError> {
        validate_price(price_minor_units)?;
        self.price_minor_units = price_minor_units;
        self.touch();
        Ok(())
    }

    /// Moves the agreement to a new status following the provider lifecycle.
    pub fn set_status(&mut self, status: AgreementStatus) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(status)?;
        self.touch();
        Ok(())
    }

    pub fn set_published(&mut self, published: bool) {
        self.published = published;
        self.touch();
    }

    fn touch(&mut self) {
        self.changed = Timestamp::now();
    }
}

impl Revisionable for AgreementRecord {
    fn label(&self) -> String {
        self.agreement_id.clone()
    }
}

pub(crate) fn validate_agreement_id(agreement_id: &str) -> Result<(), ValidationError> {
    if agreement_id.trim().is_empty() {
        return Err(ValidationError::empty_field("agreement_id"));
    }
    let len = agreement_id.chars().count();
    if len > AGREEMENT_ID_MAX_LEN {
        return Err(ValidationError::too_long("agreement_id", AGREEMENT_ID_MAX_LEN, len));
    }
    Ok(())
}

fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if mobile.len() != MOBILE_LEN || !mobile.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format("mobile", "must be 8 digits"));
    }
    Ok(())
}

pub(crate) fn validate_price(price_minor_units: i64) -> Result<(), ValidationError> {
    if price_minor_units < 0 {
        return Err(ValidationError::invalid_format("price", "cannot be negative"));
    }
    Ok(())
}
