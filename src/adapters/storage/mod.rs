//! Storage Adapters
//!
//! Implementations of the ContentStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryContentStore** - Keeps revisions in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use vipps_recurring::adapters::storage::InMemoryContentStore;
//! use vipps_recurring::domain::agreement::AgreementRecord;
//!
//! let agreements: InMemoryContentStore<AgreementRecord> = InMemoryContentStore::new();
//! ```

mod in_memory_content_store;

pub use in_memory_content_store::InMemoryContentStore;
