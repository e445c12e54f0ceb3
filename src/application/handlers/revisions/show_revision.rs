//! ShowRevisionHandler - Query handler for a single past revision.

use std::sync::Arc;

use super::load_record_revision;
use crate::domain::foundation::{DomainError, RecordId, RevisionId};
use crate::domain::revision::{Revision, Revisionable};
use crate::ports::ContentStore;

/// Query for one revision of a record.
#[derive(Debug, Clone)]
pub struct ShowRevisionQuery {
    pub record_id: RecordId,
    pub revision_id: RevisionId,
}

#[derive(Debug, Clone)]
pub struct ShowRevisionResult<T> {
    /// Page title, e.g. `Revision of agr_1 from 17.10.2026 - 09:00`.
    pub title: String,
    pub revision: Revision<T>,
}

pub struct ShowRevisionHandler<T: Revisionable> {
    store: Arc<dyn ContentStore<T>>,
}

impl<T: Revisionable> ShowRevisionHandler<T> {
    pub fn new(store: Arc<dyn ContentStore<T>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ShowRevisionQuery) -> Result<ShowRevisionResult<T>, DomainError> {
        let revision =
            load_record_revision(self.store.as_ref(), &query.record_id, query.revision_id).await?;

        let title = format!(
            "Revision of {} from {}",
            revision.label(),
            revision.created_at.format_short()
        );

        Ok(ShowRevisionResult { title, revision })
    }
}
