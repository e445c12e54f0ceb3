//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Content store implementations (in-memory)
//! - `render` - Table renderer implementations (plain text)

pub mod render;
pub mod storage;

pub use render::PlainTextTableRenderer;
pub use storage::InMemoryContentStore;
