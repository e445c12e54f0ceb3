//! Revision history handlers.
//!
//! Shared by every revisioned record kind: listing, viewing, reverting and
//! deleting revisions.

mod delete_revision;
mod revert_revision;
mod revision_overview;
mod show_revision;

pub use delete_revision::{DeleteRevisionCommand, DeleteRevisionHandler, DeleteRevisionResult};
pub use revert_revision::{RevertRevisionCommand, RevertRevisionHandler, RevertRevisionResult};
pub use revision_overview::{
    RevisionOverviewHandler, RevisionOverviewQuery, RevisionOverviewResult,
};
pub use show_revision::{ShowRevisionHandler, ShowRevisionQuery, ShowRevisionResult};

use crate::domain::foundation::{DomainError, ErrorCode, RecordId, RevisionId};
use crate::domain::revision::{Revision, Revisionable};
use crate::ports::ContentStore;

/// Loads a revision and checks that it belongs to `record_id`.
async fn load_record_revision<T: Revisionable>(
    store: &dyn ContentStore<T>,
    record_id: &RecordId,
    revision_id: RevisionId,
) -> Result<Revision<T>, DomainError> {
    match store.load_revision(revision_id).await? {
        Some(revision) if revision.record_id == *record_id => Ok(revision),
        _ => Err(DomainError::new(
            ErrorCode::RevisionNotFound,
            format!("Revision {} not found for record {}", revision_id, record_id),
        )),
    }
}

/// Fails with `InvalidOperation` when `revision_id` is the record's current revision.
async fn ensure_not_current<T: Revisionable>(
    store: &dyn ContentStore<T>,
    record_id: &RecordId,
    revision_id: RevisionId,
    operation: &str,
) -> Result<(), DomainError> {
    if store.current_revision_id(record_id).await? == Some(revision_id) {
        return Err(DomainError::new(
            ErrorCode::InvalidOperation,
            format!("The current revision cannot be {}", operation),
        )
        .with_detail("revision_id", revision_id.to_string()));
    }
    Ok(())
}
