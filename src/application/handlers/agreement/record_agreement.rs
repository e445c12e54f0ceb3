//! RecordAgreementHandler - Command handler for storing a new agreement.

use std::sync::Arc;

use crate::domain::agreement::{AgreementRecord, AgreementStatus};
use crate::domain::foundation::{DomainError, RecordId, RevisionId};
use crate::domain::revision::RevisionMeta;
use crate::domain::subscription::ProductSubscription;
use crate::ports::ContentStore;

/// Command to record a freshly drafted agreement.
#[derive(Debug, Clone)]
pub struct RecordAgreementCommand {
    pub agreement_id: String,
    pub mobile: String,
    pub price_minor_units: i64,
    pub author: Option<String>,
}

impl RecordAgreementCommand {
    /// Builds the command for an agreement drafted from a product.
    pub fn for_product(
        agreement_id: impl Into<String>,
        mobile: impl Into<String>,
        product: &dyn ProductSubscription,
    ) -> Self {
        Self {
            agreement_id: agreement_id.into(),
            mobile: mobile.into(),
            price_minor_units: product.integer_price(),
            author: None,
        }
    }

    pub fn by(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordAgreementResult {
    pub record_id: RecordId,
    pub revision_id: RevisionId,
    pub agreement: AgreementRecord,
}

/// Stores new agreements as the first revision of a new record.
///
/// Agreements start out pending until the payer confirms them.
pub struct RecordAgreementHandler {
    store: Arc<dyn ContentStore<AgreementRecord>>,
}

impl RecordAgreementHandler {
    pub fn new(store: Arc<dyn ContentStore<AgreementRecord>>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RecordAgreementCommand,
    ) -> Result<RecordAgreementResult, DomainError> {
        let agreement = AgreementRecord::new(
            cmd.agreement_id,
            cmd.mobile,
            cmd.price_minor_units,
            AgreementStatus::Pending,
        )?;

        let record_id = RecordId::new();
        let mut meta = RevisionMeta::new().with_message("Agreement created");
        meta.author = cmd.author;

        let revision_id = self.store.save(record_id, agreement.clone(), meta).await?;

        tracing::info!(
            %record_id,
            agreement_id = agreement.agreement_id(),
            price = agreement.price_minor_units(),
            "Recorded agreement"
        );

        Ok(RecordAgreementResult {
            record_id,
            revision_id,
            agreement,
        })
    }
}
