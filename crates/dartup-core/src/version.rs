//! Version records
//!
//! The remote `VERSION` manifest and the local `.dart-up` marker share one
//! shape. Only `version` and `revision` are consulted; every other manifest
//! field is carried opaquely so the persisted record round-trips the remote
//! document.

use serde::{Deserialize, Serialize};

/// A version manifest, remote or locally persisted
///
/// The default value is the empty record, meaning "never installed".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Human-readable release version, e.g. "1.24.3"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Opaque build identifier used for equality comparison
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    /// Remaining manifest fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VersionRecord {
    /// Whether this record describes an installed version
    pub fn is_installed(&self) -> bool {
        self.version.is_some()
    }

    /// Revision equality; absent revisions never compare equal
    pub fn same_revision(&self, other: &VersionRecord) -> bool {
        match (&self.revision, &other.revision) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Display label, e.g. "1.24.3 (123456)"
    pub fn label(&self) -> String {
        match (&self.version, &self.revision) {
            (Some(version), Some(revision)) => format!("{} ({})", version, revision),
            (Some(version), None) => version.clone(),
            _ => "none".to_string(),
        }
    }
}
