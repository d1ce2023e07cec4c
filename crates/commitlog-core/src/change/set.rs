//! Change-set files: JSON descriptions of already-discovered changes

use super::{ChangeKind, ChangeRecord};
use crate::error::{CommitlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// change set JSON schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeSetFile {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub changes: Vec<ChangeEntry>,
}

/// One changed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub path: PathBuf,
    pub root: String,
    pub kind: ChangeKind,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub path_from_root: Option<String>,
    #[serde(default)]
    pub old_revision: Option<String>,
    #[serde(default)]
    pub new_revision: Option<String>,
}

impl ChangeEntry {
    pub fn into_record(self) -> ChangeRecord {
        let mut record = ChangeRecord::new(self.path, self.root, self.kind);
        if let Some(package) = self.package {
            record = record.with_package_name(package);
        }
        if let Some(path) = self.path_from_root {
            record = record.with_path_from_root(path);
        }
        record.set_old_revision(self.old_revision);
        record.set_new_revision(self.new_revision);
        record
    }
}

impl ChangeSetFile {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| CommitlogError::ChangeSetInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn into_records(self) -> Vec<ChangeRecord> {
        self.changes.into_iter().map(ChangeEntry::into_record).collect()
    }
}
