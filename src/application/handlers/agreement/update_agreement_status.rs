//! UpdateAgreementStatusHandler - Command handler for agreement status changes.

use std::sync::Arc;

use crate::domain::agreement::{AgreementRecord, AgreementStatus};
use crate::domain::foundation::{DomainError, ErrorCode, RecordId, RevisionId};
use crate::domain::revision::RevisionMeta;
use crate::ports::ContentStore;

#[derive(Debug, Clone)]
pub struct UpdateAgreementStatusCommand {
    pub record_id: RecordId,
    pub status: AgreementStatus,
    pub author: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateAgreementStatusResult {
    pub revision_id: RevisionId,
    pub previous: AgreementStatus,
    pub agreement: AgreementRecord,
}

/// Handler for moving an agreement through its lifecycle.
///
/// Every accepted change is saved as a new revision.
pub struct UpdateAgreementStatusHandler {
    store: Arc<dyn ContentStore<AgreementRecord>>,
}

impl UpdateAgreementStatusHandler {
    pub fn new(store: Arc<dyn ContentStore<AgreementRecord>>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateAgreementStatusCommand,
    ) -> Result<UpdateAgreementStatusResult, DomainError> {
        // 1. Load the current agreement
        let current = self
            .store
            .load_current(&cmd.record_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RecordNotFound,
                    format!("Agreement record {} not found", cmd.record_id),
                )
            })?;

        let mut agreement = current.data;
        let previous = agreement.status();

        // 2. Apply the transition (domain logic)
        agreement.set_status(cmd.status).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                .with_detail("from", previous.as_str())
                .with_detail("to", cmd.status.as_str())
        })?;

        // 3. Persist as a new revision
        let mut meta = RevisionMeta::new()
            .with_message(format!("Status changed from {} to {}", previous, cmd.status));
        meta.author = cmd.author;

        let revision_id = self.store.save(cmd.record_id, agreement.clone(), meta).await?;

        tracing::info!(
            record_id = %cmd.record_id,
            from = %previous,
            to = %cmd.status,
            "Agreement status changed"
        );

        Ok(UpdateAgreementStatusResult {
            revision_id,
            previous,
            agreement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryContentStore;

    async fn pending_agreement() -> (Arc<InMemoryContentStore<AgreementRecord>>, RecordId) {
        let store: Arc<InMemoryContentStore<AgreementRecord>> = Arc::new(InMemoryContentStore::new());
        let record_id = RecordId::new();
        let agreement =
            AgreementRecord::new("agr_1", "91234567", 9900, AgreementStatus::Pending).unwrap();
        store.save(record_id, agreement, RevisionMeta::new()).await.unwrap();
        (store, record_id)
    }

    fn command(record_id: RecordId, status: AgreementStatus) -> UpdateAgreementStatusCommand {
        UpdateAgreementStatusCommand {
            record_id,
            status,
            author: None,
        }
    }

    #[tokio::test]
    async fn activation_creates_revision_with_message() {
        let (store, record_id) = pending_agreement().await;
        let result = UpdateAgreementStatusHandler::new(store.clone())
            .handle(command(record_id, AgreementStatus::Active))
            .await
            .unwrap();

        assert_eq!(result.previous, AgreementStatus::Pending);
        assert_eq!(result.agreement.status(), AgreementStatus::Active);

        let current = store.load_current(&record_id).await.unwrap().unwrap();
        assert_eq!(current.revision_id, result.revision_id);
        assert_eq!(
            current.meta.log_message.as_deref(),
            Some("Status changed from PENDING to ACTIVE")
        );
        assert_eq!(store.list_revision_ids(&record_id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn illegal_transition_is_rejected() {
        let (store, record_id) = pending_agreement().await;
        let err = UpdateAgreementStatusHandler::new(store.clone())
            .handle(command(record_id, AgreementStatus::Stopped))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(err.details.get("from").map(String::as_str), Some("PENDING"));
        assert_eq!(store.revision_count().await, 1);
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let (store, _) = pending_agreement().await;
        let err = UpdateAgreementStatusHandler::new(store)
            .handle(command(RecordId::new(), AgreementStatus::Active))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RecordNotFound);
    }
}
