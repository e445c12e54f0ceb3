//! Render Adapters
//!
//! Implementations of the TableRenderer port.

mod plain_text_table;

pub use plain_text_table::PlainTextTableRenderer;
