//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write new revisions; query handlers only read them.

pub mod handlers;

pub use handlers::*;
