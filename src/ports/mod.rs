//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the hosting application. Adapters implement these ports.
//!
//! - `ContentStore` - Versioned persistence for agreement and charge records
//! - `TableRenderer` - Output of admin listings

mod content_store;
mod table_renderer;

pub use content_store::ContentStore;
pub use table_renderer::{OperationLink, TableCell, TableRenderer, TableRow};
