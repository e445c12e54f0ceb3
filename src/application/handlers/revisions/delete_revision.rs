//! DeleteRevisionHandler - Command handler for removing an old revision.

use std::sync::Arc;

use super::{ensure_not_current, load_record_revision};
use crate::domain::foundation::{DomainError, ErrorCode, RecordId, RevisionId};
use crate::domain::revision::{RecordKind, RevisionPermissions, Revisionable};
use crate::ports::ContentStore;

#[derive(Debug, Clone)]
pub struct DeleteRevisionCommand {
    pub kind: RecordKind,
    pub record_id: RecordId,
    pub revision_id: RevisionId,
    pub permissions: RevisionPermissions,
}

#[derive(Debug, Clone)]
pub struct DeleteRevisionResult {
    pub message: String,
    pub redirect_to: String,
}

/// Handler for deleting a non-current revision.
pub struct DeleteRevisionHandler<T: Revisionable> {
    store: Arc<dyn ContentStore<T>>,
}

impl<T: Revisionable> DeleteRevisionHandler<T> {
    pub fn new(store: Arc<dyn ContentStore<T>>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: DeleteRevisionCommand,
    ) -> Result<DeleteRevisionResult, DomainError> {
        if !cmd.permissions.can_delete {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                format!("Not allowed to delete {} revisions", cmd.kind.permission_noun()),
            ));
        }

        let revision =
            load_record_revision(self.store.as_ref(), &cmd.record_id, cmd.revision_id).await?;
        ensure_not_current(self.store.as_ref(), &cmd.record_id, cmd.revision_id, "deleted")
            .await?;

        self.store.delete_revision(cmd.revision_id).await?;

        tracing::info!(
            kind = %cmd.kind,
            record_id = %cmd.record_id,
            revision_id = %cmd.revision_id,
            "Deleted revision"
        );

        Ok(DeleteRevisionResult {
            message: format!(
                "Revision from {} of {} has been deleted.",
                revision.created_at.format_short(),
                revision.label()
            ),
            redirect_to: cmd.kind.revisions_path(&cmd.record_id),
        })
    }
}
