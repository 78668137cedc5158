//! Local version marker store
//!
//! A single JSON file named `.dart-up` in the install root records the last
//! successfully installed version manifest. An absent or unreadable file
//! means "not installed"; the file is only ever rewritten after a fully
//! successful run.

use std::fs;
use std::path::{Path, PathBuf};

use dartup_core::{Result, VersionRecord};
use tracing::debug;

/// File name of the persisted version marker
pub const MARKER_FILE: &str = ".dart-up";

/// Reads and writes the persisted version marker
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    /// Create a store rooted at the install directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(MARKER_FILE),
        }
    }

    /// Path of the marker file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record
    ///
    /// A missing, unreadable, or malformed file yields the empty record.
    pub fn read(&self) -> VersionRecord {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No usable version marker at {:?}: {}", self.path, e);
                return VersionRecord::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => record,
            Err(e) => {
                debug!("Malformed version marker at {:?}: {}", self.path, e);
                VersionRecord::default()
            }
        }
    }

    /// Persist a record, replacing any previous one
    ///
    /// Writes to a temporary sibling first and renames it over the marker,
    /// so a crash mid-write cannot leave a record that looks successful.
    pub fn write(&self, record: &VersionRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!("Wrote version marker {:?}", self.path);
        Ok(())
    }
}
