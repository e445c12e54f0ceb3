//! Agreement domain module.
//!
//! Locally stored copies of the provider's recurring agreements.

mod record;
mod status;

pub use record::{AgreementRecord, AGREEMENT_ID_MAX_LEN};
pub(crate) use record::{validate_agreement_id, validate_price};
pub use status::AgreementStatus;
