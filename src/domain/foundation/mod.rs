//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, the status state machine and error types
//! shared by the subscription, agreement and revision modules.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{RecordId, RevisionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
