//! Change records: one file's state within a change set

mod index;
mod set;

pub use index::{Bucket, ChangeIndex, RootSelector};
pub use set::{ChangeEntry, ChangeSetFile};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How a file changed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

impl ChangeKind {
    /// Verb shown by `$FILE_ACTION$`
    pub fn action(self) -> &'static str {
        match self {
            ChangeKind::Added => "Added",
            ChangeKind::Modified => "Modified",
            ChangeKind::Deleted => "Removed",
        }
    }
}

/// Path-stable identity of a file; the only thing record equality looks at
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(PathBuf);

impl FileId {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Looks up the revision a file is at after the commit
///
/// Implemented by the host's VCS integration; the engine only consumes the
/// resulting labels.
pub trait RevisionLookup: Send + Sync + fmt::Debug {
    /// `Ok(None)` when the VCS has no revision for the file (e.g. deleted)
    fn current_revision(&self, record: &ChangeRecord) -> crate::Result<Option<String>>;
}

/// Shared handle to the VCS that owns a record
pub type VcsHandle = Arc<dyn RevisionLookup>;

/// One file's state within a change set
///
/// Equality and hashing use the file identity only, so the same path under
/// two roots compares equal.
#[derive(Debug, Clone)]
pub struct ChangeRecord {
    file: FileId,
    display_path: Option<PathBuf>,
    path_from_root: Option<String>,
    root_name: String,
    package_name: Option<String>,
    kind: ChangeKind,
    old_revision: Option<String>,
    new_revision: Option<String>,
    vcs: Option<VcsHandle>,
}

impl ChangeRecord {
    /// Record for `file` under `root_name`; the display path defaults to `file`
    pub fn new(file: impl Into<PathBuf>, root_name: impl Into<String>, kind: ChangeKind) -> Self {
        let path = file.into();
        Self {
            file: FileId::new(path.clone()),
            display_path: Some(path),
            path_from_root: None,
            root_name: root_name.into(),
            package_name: None,
            kind,
            old_revision: None,
            new_revision: None,
            vcs: None,
        }
    }

    pub fn with_display_path(mut self, path: Option<PathBuf>) -> Self {
        self.display_path = path;
        self
    }

    pub fn with_path_from_root(mut self, path: impl Into<String>) -> Self {
        self.path_from_root = Some(path.into());
        self
    }

    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn with_old_revision(mut self, revision: impl Into<String>) -> Self {
        self.old_revision = Some(revision.into());
        self
    }

    pub fn with_new_revision(mut self, revision: impl Into<String>) -> Self {
        self.new_revision = Some(revision.into());
        self
    }

    pub fn with_vcs(mut self, vcs: VcsHandle) -> Self {
        self.vcs = Some(vcs);
        self
    }

    pub fn file(&self) -> &FileId {
        &self.file
    }

    pub fn display_path(&self) -> Option<&Path> {
        self.display_path.as_deref()
    }

    /// Last component of the display path
    pub fn file_name(&self) -> Option<String> {
        self.display_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn path_from_root(&self) -> Option<&str> {
        self.path_from_root.as_deref()
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn old_revision(&self) -> Option<&str> {
        self.old_revision.as_deref()
    }

    pub fn new_revision(&self) -> Option<&str> {
        self.new_revision.as_deref()
    }

    pub fn vcs(&self) -> Option<&VcsHandle> {
        self.vcs.as_ref()
    }

    /// Set when the record is discovered, before the commit
    pub fn set_old_revision(&mut self, revision: Option<String>) {
        self.old_revision = revision;
    }

    /// Set after the commit
    pub fn set_new_revision(&mut self, revision: Option<String>) {
        self.new_revision = revision;
    }

    /// Nothing was actually committed: both labels absent, or equal
    pub fn is_no_op(&self) -> bool {
        self.old_revision == self.new_revision
    }
}

impl PartialEq for ChangeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file
    }
}

impl Eq for ChangeRecord {}

impl Hash for ChangeRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file.hash(state);
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} -> {}",
            self.file,
            self.old_revision.as_deref().unwrap_or("none"),
            self.new_revision.as_deref().unwrap_or("none")
        )
    }
}
