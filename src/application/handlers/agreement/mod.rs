//! Agreement handlers.

mod record_agreement;
mod update_agreement_status;

pub use record_agreement::{RecordAgreementCommand, RecordAgreementHandler, RecordAgreementResult};
pub use update_agreement_status::{
    UpdateAgreementStatusCommand, UpdateAgreementStatusHandler, UpdateAgreementStatusResult,
};
