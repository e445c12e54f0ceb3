//! RecordChargeHandler - Command handler for storing a monthly charge.

use std::sync::Arc;

use crate::domain::agreement::AgreementRecord;
use crate::domain::charge::{ChargeStatus, MonthlyCharge};
use crate::domain::foundation::{DomainError, ErrorCode, RecordId, RevisionId};
use crate::domain::revision::RevisionMeta;
use crate::ports::ContentStore;

/// Command to record a charge created against an agreement.
#[derive(Debug, Clone)]
pub struct RecordChargeCommand {
    /// Local record holding the agreement.
    pub agreement_record_id: RecordId,
    pub charge_id: String,
    pub price_minor_units: i64,
    pub description: String,
    pub status: ChargeStatus,
    pub author: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordChargeResult {
    pub record_id: RecordId,
    pub revision_id: RevisionId,
    pub charge: MonthlyCharge,
}

/// Handler for recording charges.
///
/// Only active agreements accept new charges.
pub struct RecordChargeHandler {
    agreements: Arc<dyn ContentStore<AgreementRecord>>,
    charges: Arc<dyn ContentStore<MonthlyCharge>>,
}

impl RecordChargeHandler {
    pub fn new(
        agreements: Arc<dyn ContentStore<AgreementRecord>>,
        charges: Arc<dyn ContentStore<MonthlyCharge>>,
    ) -> Self {
        Self { agreements, charges }
    }

    pub async fn handle(&self, cmd: RecordChargeCommand) -> Result<RecordChargeResult, DomainError> {
        // 1. Find the agreement
        let agreement = self
            .agreements
            .load_current(&cmd.agreement_record_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RecordNotFound,
                    format!("Agreement record {} not found", cmd.agreement_record_id),
                )
            })?
            .data;

        if !agreement.status().accepts_charges() {
            tracing::warn!(
                agreement_id = agreement.agreement_id(),
                status = %agreement.status(),
                "Charge refused for inactive agreement"
            );
            return Err(DomainError::new(
                ErrorCode::InvalidOperation,
                format!(
                    "Agreement {} is {} and does not accept charges",
                    agreement.agreement_id(),
                    agreement.status()
                ),
            ));
        }

        // 2. Build and persist the charge
        let charge = MonthlyCharge::new(
            agreement.agreement_id(),
            cmd.charge_id,
            cmd.price_minor_units,
            cmd.description,
            cmd.status,
        )?;

        let record_id = RecordId::new();
        let mut meta = RevisionMeta::new().with_message("Charge created");
        meta.author = cmd.author;

        let revision_id = self.charges.save(record_id, charge.clone(), meta).await?;

        tracing::info!(
            %record_id,
            agreement_id = charge.agreement_id(),
            charge_id = charge.charge_id(),
            "Recorded charge"
        );

        Ok(RecordChargeResult {
            record_id,
            revision_id,
            charge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryContentStore;
    use crate::domain::agreement::AgreementStatus;

    struct Stores {
        agreements: Arc<InMemoryContentStore<AgreementRecord>>,
        charges: Arc<InMemoryContentStore<MonthlyCharge>>,
    }

    impl Stores {
        fn new() -> Self {
            Self {
                agreements: Arc::new(InMemoryContentStore::new()),
                charges: Arc::new(InMemoryContentStore::new()),
            }
        }

        async fn agreement(&self, status: AgreementStatus) -> RecordId {
            let record_id = RecordId::new();
            let agreement = AgreementRecord::new("agr_1", "91234567", 9900, status).unwrap();
            self.agreements
                .save(record_id, agreement, RevisionMeta::new())
                .await
                .unwrap();
            record_id
        }

        fn handler(&self) -> RecordChargeHandler {
            RecordChargeHandler::new(self.agreements.clone(), self.charges.clone())
        }
    }

    fn command(agreement_record_id: RecordId) -> RecordChargeCommand {
        RecordChargeCommand {
            agreement_record_id,
            charge_id: "chr_1".to_string(),
            price_minor_units: 9900,
            description: "October".to_string(),
            status: ChargeStatus::Pending,
            author: None,
        }
    }

    #[tokio::test]
    async fn records_charge_for_active_agreement() {
        let stores = Stores::new();
        let agreement = stores.agreement(AgreementStatus::Active).await;

        let result = stores.handler().handle(command(agreement)).await.unwrap();

        assert_eq!(result.charge.agreement_id(), "agr_1");
        assert_eq!(result.charge.charge_id(), "chr_1");
        let stored = stores
            .charges
            .load_current(&result.record_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.data, result.charge);
    }

    #[tokio::test]
    async fn pending_agreement_refuses_charges() {
        let stores = Stores::new();
        let agreement = stores.agreement(AgreementStatus::Pending).await;

        let err = stores.handler().handle(command(agreement)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidOperation);
        assert_eq!(stores.charges.revision_count().await, 0);
    }

    #[tokio::test]
    async fn unknown_agreement_is_not_found() {
        let stores = Stores::new();
        let err = stores
            .handler()
            .handle(command(RecordId::new()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RecordNotFound);
    }

    #[tokio::test]
    async fn empty_charge_id_is_rejected() {
        let stores = Stores::new();
        let agreement = stores.agreement(AgreementStatus::Active).await;
        let mut cmd = command(agreement);
        cmd.charge_id = "  ".to_string();

        let err = stores.handler().handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
