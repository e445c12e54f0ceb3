//! Charge handlers.

mod record_charge;

pub use record_charge::{RecordChargeCommand, RecordChargeHandler, RecordChargeResult};
