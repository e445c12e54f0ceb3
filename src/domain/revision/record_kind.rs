//! Record kinds and the admin vocabulary derived from them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::{RecordId, RevisionId};

/// The two kinds of revisioned records this crate stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    VippsAgreements,
    MonthlyCharges,
}

impl RecordKind {
    /// Machine name used in paths and permission strings.
    pub fn machine_name(&self) -> &'static str {
        match self {
            RecordKind::VippsAgreements => "vipps_agreements",
            RecordKind::MonthlyCharges => "monthly_charges",
        }
    }

    /// Lower-case plural used in permission names.
    pub fn permission_noun(&self) -> &'static str {
        match self {
            RecordKind::VippsAgreements => "vipps agreements",
            RecordKind::MonthlyCharges => "monthly charges",
        }
    }

    pub fn collection_path(&self) -> String {
        format!("/admin/structure/{}", self.machine_name())
    }

    pub fn canonical_path(&self, record_id: &RecordId) -> String {
        format!("{}/{}", self.collection_path(), record_id)
    }

    pub fn revisions_path(&self, record_id: &RecordId) -> String {
        format!("{}/revisions", self.canonical_path(record_id))
    }

    pub fn revision_path(&self, record_id: &RecordId, revision: RevisionId) -> String {
        format!("{}/{}/view", self.revisions_path(record_id), revision)
    }

    pub fn revision_revert_path(&self, record_id: &RecordId, revision: RevisionId) -> String {
        format!("{}/{}/revert", self.revisions_path(record_id), revision)
    }

    pub fn revision_delete_path(&self, record_id: &RecordId, revision: RevisionId) -> String {
        format!("{}/{}/delete", self.revisions_path(record_id), revision)
    }

    pub fn administer_permission(&self) -> String {
        format!("administer {} entities", self.permission_noun())
    }

    pub fn revert_permission(&self) -> String {
        format!("revert all {} revisions", self.permission_noun())
    }

    pub fn delete_permission(&self) -> String {
        format!("delete all {} revisions", self.permission_noun())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.machine_name())
    }
}

/// What the viewer may do with non-current revisions of one record kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevisionPermissions {
    pub can_revert: bool,
    pub can_delete: bool,
}

impl RevisionPermissions {
    /// Resolves permissions from the viewer's granted permission names.
    ///
    /// The administer permission implies both revert and delete.
    pub fn resolve(kind: RecordKind, granted: &HashSet<String>) -> Self {
        let admin = granted.contains(&kind.administer_permission());
        Self {
            can_revert: admin || granted.contains(&kind.revert_permission()),
            can_delete: admin || granted.contains(&kind.delete_permission()),
        }
    }

    pub fn all() -> Self {
        Self {
            can_revert: true,
            can_delete: true,
        }
    }
}
