//! Revision domain module.
//!
//! Snapshots of stored records plus the admin vocabulary (paths,
//! permission names) for browsing and restoring them.

mod record_kind;
mod snapshot;

pub use record_kind::{RecordKind, RevisionPermissions};
pub use snapshot::{Revision, RevisionMeta, Revisionable};
