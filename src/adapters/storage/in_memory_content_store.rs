//! In-Memory Content Store Adapter
//!
//! Keeps every revision in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RecordId, RevisionId, Timestamp};
use crate::domain::revision::{Revision, RevisionMeta, Revisionable};
use crate::ports::ContentStore;

#[derive(Debug)]
struct StoreState<T> {
    next_revision: u64,
    revisions: BTreeMap<RevisionId, Revision<T>>,
    /// Revision ids per record, oldest first.
    history: HashMap<RecordId, Vec<RevisionId>>,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            next_revision: 1,
            revisions: BTreeMap::new(),
            history: HashMap::new(),
        }
    }
}

/// In-memory versioned store
#[derive(Debug, Clone)]
pub struct InMemoryContentStore<T> {
    state: Arc<RwLock<StoreState<T>>>,
}

impl<T> InMemoryContentStore<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    /// Total number of stored revisions across all records
    pub async fn revision_count(&self) -> usize {
        self.state.read().await.revisions.len()
    }

    /// Number of distinct records
    pub async fn record_count(&self) -> usize {
        self.state.read().await.history.len()
    }
}

impl<T> Default for InMemoryContentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Revisionable> ContentStore<T> for InMemoryContentStore<T> {
    async fn save(
        &self,
        record_id: RecordId,
        data: T,
        meta: RevisionMeta,
    ) -> Result<RevisionId, DomainError> {
        let mut state = self.state.write().await;

        let revision_id = RevisionId::new(state.next_revision);
        state.next_revision += 1;

        state.revisions.insert(
            revision_id,
            Revision {
                revision_id,
                record_id,
                created_at: Timestamp::now(),
                meta,
                data,
            },
        );
        state.history.entry(record_id).or_default().push(revision_id);

        Ok(revision_id)
    }

    async fn load_revision(
        &self,
        revision_id: RevisionId,
    ) -> Result<Option<Revision<T>>, DomainError> {
        Ok(self.state.read().await.revisions.get(&revision_id).cloned())
    }

    async fn list_revision_ids(&self, record_id: &RecordId) -> Result<Vec<RevisionId>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .history
            .get(record_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn current_revision_id(
        &self,
        record_id: &RecordId,
    ) -> Result<Option<RevisionId>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .history
            .get(record_id)
            .and_then(|ids| ids.last().copied()))
    }

    async fn delete_revision(&self, revision_id: RevisionId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        let record_id = state
            .revisions
            .get(&revision_id)
            .map(|r| r.record_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RevisionNotFound,
                    format!("Revision {} not found", revision_id),
                )
            })?;

        let ids = state.history.entry(record_id).or_default();
        if ids.last() == Some(&revision_id) {
            return Err(DomainError::new(
                ErrorCode::InvalidOperation,
                "The current revision cannot be deleted",
            )
            .with_detail("revision_id", revision_id.to_string()));
        }
        ids.retain(|id| *id != revision_id);
        state.revisions.remove(&revision_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note(String);

    impl Revisionable for Note {
        fn label(&self) -> String {
            self.0.clone()
        }
    }

    fn note(s: &str) -> Note {
        Note(s.to_string())
    }

    #[tokio::test]
    async fn save_assigns_increasing_revision_ids() {
        let store = InMemoryContentStore::new();
        let a = RecordId::new();
        let b = RecordId::new();

        let r1 = store.save(a, note("a1"), RevisionMeta::new()).await.unwrap();
        let r2 = store.save(b, note("b1"), RevisionMeta::new()).await.unwrap();
        let r3 = store.save(a, note("a2"), RevisionMeta::new()).await.unwrap();

        assert!(r1 < r2 && r2 < r3);
        assert_eq!(store.list_revision_ids(&a).await.unwrap(), vec![r1, r3]);
        assert_eq!(store.record_count().await, 2);
        assert_eq!(store.revision_count().await, 3);
    }

    #[tokio::test]
    async fn newest_revision_is_current() {
        let store = InMemoryContentStore::new();
        let id = RecordId::new();
        store.save(id, note("v1"), RevisionMeta::new()).await.unwrap();
        let r2 = store.save(id, note("v2"), RevisionMeta::new()).await.unwrap();

        assert_eq!(store.current_revision_id(&id).await.unwrap(), Some(r2));
        let current = store.load_current(&id).await.unwrap().unwrap();
        assert_eq!(current.data, note("v2"));
    }

    #[tokio::test]
    async fn unknown_record_has_no_history() {
        let store: InMemoryContentStore<Note> = InMemoryContentStore::new();
        let id = RecordId::new();
        assert!(store.list_revision_ids(&id).await.unwrap().is_empty());
        assert!(store.load_current(&id).await.unwrap().is_none());
        assert!(store
            .load_revision(RevisionId::new(99))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_removes_old_revision() {
        let store = InMemoryContentStore::new();
        let id = RecordId::new();
        let r1 = store.save(id, note("v1"), RevisionMeta::new()).await.unwrap();
        let r2 = store.save(id, note("v2"), RevisionMeta::new()).await.unwrap();

        store.delete_revision(r1).await.unwrap();

        assert_eq!(store.list_revision_ids(&id).await.unwrap(), vec![r2]);
        assert!(store.load_revision(r1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_refuses_current_revision() {
        let store = InMemoryContentStore::new();
        let id = RecordId::new();
        let r1 = store.save(id, note("v1"), RevisionMeta::new()).await.unwrap();

        let err = store.delete_revision(r1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOperation);
        assert!(store.load_revision(r1).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_unknown_revision_is_not_found() {
        let store: InMemoryContentStore<Note> = InMemoryContentStore::new();
        let err = store.delete_revision(RevisionId::new(5)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RevisionNotFound);
    }

    #[tokio::test]
    async fn revision_keeps_meta() {
        let store = InMemoryContentStore::new();
        let id = RecordId::new();
        let rev = store
            .save(id, note("v1"), RevisionMeta::new().by("admin").with_message("Created"))
            .await
            .unwrap();

        let loaded = store.load_revision(rev).await.unwrap().unwrap();
        assert_eq!(loaded.record_id, id);
        assert_eq!(loaded.meta.author.as_deref(), Some("admin"));
        assert_eq!(loaded.meta.log_message.as_deref(), Some("Created"));
    }
}
