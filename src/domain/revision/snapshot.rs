//! Revision snapshots.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, RevisionId, Timestamp};

/// Anything that can be stored with revision history.
pub trait Revisionable: Clone + Send + Sync + 'static {
    /// Human readable label used in admin titles.
    fn label(&self) -> String;
}

/// Who made a change and why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionMeta {
    pub author: Option<String>,
    pub log_message: Option<String>,
}

impl RevisionMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.log_message = Some(message.into());
        self
    }
}

/// An immutable snapshot of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision<T> {
    pub revision_id: RevisionId,
    pub record_id: RecordId,
    pub created_at: Timestamp,
    pub meta: RevisionMeta,
    pub data: T,
}

impl<T: Revisionable> Revision<T> {
    pub fn label(&self) -> String {
        self.data.label()
    }

    /// Author name for display, `Anonymous` when unknown.
    pub fn author_display(&self) -> &str {
        self.meta.author.as_deref().unwrap_or("Anonymous")
    }
}
