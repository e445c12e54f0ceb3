//! Content store port.
//!
//! Defines the contract for a versioned record store. Each save creates a
//! new revision; the newest revision of a record is its current one.
//!
//! # Example
//!
//! ```ignore
//! async fn change_price(
//!     store: &dyn ContentStore<AgreementRecord>,
//!     record_id: RecordId,
//!     price: i64,
//! ) -> Result<RevisionId, DomainError> {
//!     let current = store
//!         .load_current(&record_id)
//!         .await?
//!         .ok_or_else(|| DomainError::new(ErrorCode::RecordNotFound, "no such agreement"))?;
//!
//!     let mut record = current.data;
//!     record.set_price(price)?;
//!     store.save(record_id, record, RevisionMeta::new().with_message("Price change")).await
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RecordId, RevisionId};
use crate::domain::revision::{Revision, RevisionMeta, Revisionable};

/// Versioned storage for one record type.
///
/// Implementations must ensure:
/// - Revision ids increase monotonically across the store
/// - Saving never mutates an existing revision
#[async_trait]
pub trait ContentStore<T: Revisionable>: Send + Sync {
    /// Stores `data` as the new current revision of `record_id`.
    ///
    /// Creates the record if it does not exist yet.
    async fn save(
        &self,
        record_id: RecordId,
        data: T,
        meta: RevisionMeta,
    ) -> Result<RevisionId, DomainError>;

    /// Loads a single revision.
    ///
    /// Returns `None` if the revision does not exist.
    async fn load_revision(&self, revision_id: RevisionId)
        -> Result<Option<Revision<T>>, DomainError>;

    /// Lists all revision ids of a record, oldest first.
    ///
    /// Returns an empty list for unknown records.
    async fn list_revision_ids(&self, record_id: &RecordId) -> Result<Vec<RevisionId>, DomainError>;

    /// Returns the current revision id of a record.
    async fn current_revision_id(
        &self,
        record_id: &RecordId,
    ) -> Result<Option<RevisionId>, DomainError>;

    /// Deletes one revision.
    ///
    /// # Errors
    ///
    /// - `RevisionNotFound` if the revision doesn't exist
    /// - `InvalidOperation` if it is the current revision
    async fn delete_revision(&self, revision_id: RevisionId) -> Result<(), DomainError>;

    /// Loads the current revision of a record.
    async fn load_current(&self, record_id: &RecordId) -> Result<Option<Revision<T>>, DomainError> {
        match self.current_revision_id(record_id).await? {
            Some(revision_id) => self.load_revision(revision_id).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agreement::AgreementRecord;

    // Trait object safety test
    #[test]
    fn content_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ContentStore<AgreementRecord>) {}
    }
}
