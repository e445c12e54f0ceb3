//! RevisionOverviewHandler - Query handler listing a record's revisions.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RecordId};
use crate::domain::revision::{RecordKind, RevisionPermissions, Revisionable};
use crate::ports::{ContentStore, OperationLink, TableCell, TableRenderer, TableRow};

/// Query for the revision history of one record.
#[derive(Debug, Clone)]
pub struct RevisionOverviewQuery {
    pub kind: RecordKind,
    pub record_id: RecordId,
    pub permissions: RevisionPermissions,
}

/// Revision history table, newest first.
#[derive(Debug, Clone)]
pub struct RevisionOverviewResult {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub rendered: String,
}

/// Builds the revision history table for a record.
///
/// The newest revision is marked as current and offers no operations.
/// Older revisions link to their view page and offer revert and delete
/// according to the viewer's permissions.
pub struct RevisionOverviewHandler<T: Revisionable> {
    store: Arc<dyn ContentStore<T>>,
    renderer: Arc<dyn TableRenderer>,
}

impl<T: Revisionable> RevisionOverviewHandler<T> {
    pub fn new(store: Arc<dyn ContentStore<T>>, renderer: Arc<dyn TableRenderer>) -> Self {
        Self { store, renderer }
    }

    pub async fn handle(
        &self,
        query: RevisionOverviewQuery,
    ) -> Result<RevisionOverviewResult, DomainError> {
        let RevisionOverviewQuery {
            kind,
            record_id,
            permissions,
        } = query;

        let current = self.store.load_current(&record_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::RecordNotFound,
                format!("No {} record {}", kind, record_id),
            )
        })?;

        let mut rows = Vec::new();
        let mut latest = true;

        for revision_id in self.store.list_revision_ids(&record_id).await?.into_iter().rev() {
            let revision = match self.store.load_revision(revision_id).await? {
                Some(revision) => revision,
                None => {
                    tracing::warn!(%record_id, %revision_id, "Listed revision is missing from store");
                    continue;
                }
            };

            let href = if revision_id == current.revision_id {
                kind.canonical_path(&record_id)
            } else {
                kind.revision_path(&record_id, revision_id)
            };

            let summary = TableCell::Link {
                text: format!(
                    "{} by {}",
                    revision.created_at.format_short(),
                    revision.author_display()
                ),
                href,
                note: revision.meta.log_message.clone(),
            };

            let row = if latest {
                latest = false;
                TableRow {
                    cells: vec![summary, TableCell::Emphasis("Current revision".to_string())],
                    classes: vec!["revision-current".to_string()],
                }
            } else {
                let mut links = Vec::new();
                if permissions.can_revert {
                    links.push(OperationLink {
                        title: "Revert".to_string(),
                        href: kind.revision_revert_path(&record_id, revision_id),
                    });
                }
                if permissions.can_delete {
                    links.push(OperationLink {
                        title: "Delete".to_string(),
                        href: kind.revision_delete_path(&record_id, revision_id),
                    });
                }
                TableRow {
                    cells: vec![summary, TableCell::Operations(links)],
                    classes: Vec::new(),
                }
            };

            rows.push(row);
        }

        let headers = vec!["Revision".to_string(), "Operations".to_string()];
        let rendered = self.renderer.render_table(&headers, &rows);

        tracing::debug!(%kind, %record_id, revisions = rows.len(), "Built revision overview");

        Ok(RevisionOverviewResult {
            title: format!("Revisions for {}", current.label()),
            headers,
            rows,
            rendered,
        })
    }
}
