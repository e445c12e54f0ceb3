//! RevertRevisionHandler - Command handler that restores an old revision.

use std::sync::Arc;

use super::{ensure_not_current, load_record_revision};
use crate::domain::foundation::{DomainError, ErrorCode, RecordId, RevisionId, Timestamp};
use crate::domain::revision::{RecordKind, RevisionMeta, RevisionPermissions, Revisionable};
use crate::ports::ContentStore;

/// Command to revert a record to one of its older revisions.
#[derive(Debug, Clone)]
pub struct RevertRevisionCommand {
    pub kind: RecordKind,
    pub record_id: RecordId,
    pub revision_id: RevisionId,
    pub permissions: RevisionPermissions,
    /// Who performs the revert, recorded on the new revision.
    pub author: Option<String>,
}

/// Result of a successful revert.
#[derive(Debug, Clone)]
pub struct RevertRevisionResult {
    /// The revision created from the old data.
    pub new_revision_id: RevisionId,
    /// Creation time of the reverted revision.
    pub reverted_from: Timestamp,
    pub message: String,
    pub redirect_to: String,
}

/// Handler for reverting to an older revision.
///
/// Reverting never rewrites history. The old data is saved as a new
/// current revision with a log message naming its origin.
pub struct RevertRevisionHandler<T: Revisionable> {
    store: Arc<dyn ContentStore<T>>,
}

impl<T: Revisionable> RevertRevisionHandler<T> {
    pub fn new(store: Arc<dyn ContentStore<T>>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RevertRevisionCommand,
    ) -> Result<RevertRevisionResult, DomainError> {
        // 1. Check access
        if !cmd.permissions.can_revert {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                format!("Not allowed to revert {} revisions", cmd.kind.permission_noun()),
            ));
        }

        // 2. Load the revision to restore
        let revision =
            load_record_revision(self.store.as_ref(), &cmd.record_id, cmd.revision_id).await?;
        ensure_not_current(self.store.as_ref(), &cmd.record_id, cmd.revision_id, "reverted")
            .await?;

        // 3. Save a copy as the new current revision
        let date = revision.created_at.format_short();
        let label = revision.label();
        let mut meta = RevisionMeta::new().with_message(format!("Copy of the revision from {}.", date));
        meta.author = cmd.author;

        let new_revision_id = self.store.save(cmd.record_id, revision.data, meta).await?;

        tracing::info!(
            kind = %cmd.kind,
            record_id = %cmd.record_id,
            reverted = %cmd.revision_id,
            new_revision = %new_revision_id,
            "Reverted record to older revision"
        );

        Ok(RevertRevisionResult {
            new_revision_id,
            reverted_from: revision.created_at,
            message: format!("{} has been reverted to the revision from {}.", label, date),
            redirect_to: cmd.kind.revisions_path(&cmd.record_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryContentStore;
    use crate::domain::agreement::{AgreementRecord, AgreementStatus};

    struct Fixture {
        store: Arc<InMemoryContentStore<AgreementRecord>>,
        record_id: RecordId,
        first: RevisionId,
        second: RevisionId,
    }

    async fn fixture() -> Fixture {
        let store: Arc<InMemoryContentStore<AgreementRecord>> = Arc::new(InMemoryContentStore::new());
        let record_id = RecordId::new();
        let mut record =
            AgreementRecord::new("agr_1", "91234567", 9900, AgreementStatus::Active).unwrap();
        let first = store.save(record_id, record.clone(), RevisionMeta::new()).await.unwrap();
        record.set_price(14900).unwrap();
        let second = store.save(record_id, record, RevisionMeta::new()).await.unwrap();

        Fixture {
            store,
            record_id,
            first,
            second,
        }
    }

    fn command(f: &Fixture, revision_id: RevisionId, permissions: RevisionPermissions) -> RevertRevisionCommand {
        RevertRevisionCommand {
            kind: RecordKind::VippsAgreements,
            record_id: f.record_id,
            revision_id,
            permissions,
            author: Some("admin".to_string()),
        }
    }

    fn handler(f: &Fixture) -> RevertRevisionHandler<AgreementRecord> {
        RevertRevisionHandler::new(f.store.clone())
    }

    #[tokio::test]
    async fn revert_saves_copy_as_current() {
        let f = fixture().await;
        let result = handler(&f)
            .handle(command(&f, f.first, RevisionPermissions::all()))
            .await
            .unwrap();

        let current = f.store.load_current(&f.record_id).await.unwrap().unwrap();
        assert_eq!(current.revision_id, result.new_revision_id);
        assert_eq!(current.data.price_minor_units(), 9900);
        assert_eq!(current.meta.author.as_deref(), Some("admin"));
        assert_eq!(
            current.meta.log_message,
            Some(format!("Copy of the revision from {}.", result.reverted_from.format_short()))
        );
        assert_eq!(
            f.store.list_revision_ids(&f.record_id).await.unwrap(),
            vec![f.first, f.second, result.new_revision_id]
        );
        assert_eq!(
            result.redirect_to,
            RecordKind::VippsAgreements.revisions_path(&f.record_id)
        );
        assert!(result.message.starts_with("agr_1 has been reverted"));
    }

    #[tokio::test]
    async fn refuses_current_revision() {
        let f = fixture().await;
        let err = handler(&f)
            .handle(command(&f, f.second, RevisionPermissions::all()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidOperation);
        assert_eq!(f.store.revision_count().await, 2);
    }

    #[tokio::test]
    async fn requires_revert_permission() {
        let f = fixture().await;
        let perms = RevisionPermissions {
            can_revert: false,
            can_delete: true,
        };
        let err = handler(&f).handle(command(&f, f.first, perms)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(f.store.revision_count().await, 2);
    }

    #[tokio::test]
    async fn unknown_revision_is_not_found() {
        let f = fixture().await;
        let err = handler(&f)
            .handle(command(&f, RevisionId::new(999), RevisionPermissions::all()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RevisionNotFound);
    }
}
