//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod agreement;
pub mod charge;
pub mod revisions;

pub use agreement::{
    RecordAgreementCommand, RecordAgreementHandler, RecordAgreementResult,
    UpdateAgreementStatusCommand, UpdateAgreementStatusHandler, UpdateAgreementStatusResult,
};
pub use charge::{RecordChargeCommand, RecordChargeHandler, RecordChargeResult};
pub use revisions::{
    DeleteRevisionCommand, DeleteRevisionHandler, DeleteRevisionResult, RevertRevisionCommand,
    RevertRevisionHandler, RevertRevisionResult, RevisionOverviewHandler, RevisionOverviewQuery,
    RevisionOverviewResult, ShowRevisionHandler, ShowRevisionQuery, ShowRevisionResult,
};
