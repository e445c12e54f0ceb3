//! Domain layer - pure business types with no I/O.

pub mod agreement;
pub mod charge;
pub mod foundation;
pub mod revision;
pub mod subscription;
