//! Placeholder vocabulary and inline diagnostics

use crate::change::ChangeKind;

/// Recognized value placeholder names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueName {
    Time,
    Date,
    DateTime,
    FileCount,
    RootCount,
    RootList,
    CommitMessage,
    RootName,
    PackageName,
    PackagePath,
    PathFromRoot,
    FileName,
    FilePath,
    FileAction,
    OldRevisionNumber,
    NewRevisionNumber,
}

const VALUE_NAMES: &[(&str, ValueName)] = &[
    ("TIME", ValueName::Time),
    ("DATE", ValueName::Date),
    ("DATE_TIME", ValueName::DateTime),
    ("FILE_COUNT", ValueName::FileCount),
    ("ROOT_COUNT", ValueName::RootCount),
    ("ROOT_LIST", ValueName::RootList),
    ("COMMIT_MESSAGE", ValueName::CommitMessage),
    ("ROOT_NAME", ValueName::RootName),
    ("PACKAGE_NAME", ValueName::PackageName),
    ("PACKAGE_PATH", ValueName::PackagePath),
    ("PATH_FROM_ROOT", ValueName::PathFromRoot),
    ("FILE_NAME", ValueName::FileName),
    ("FILE_PATH", ValueName::FilePath),
    ("FILE_ACTION", ValueName::FileAction),
    ("OLD_REVISION_NUMBER", ValueName::OldRevisionNumber),
    ("NEW_REVISION_NUMBER", ValueName::NewRevisionNumber),
];

impl ValueName {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        VALUE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
    }

    /// Names that only make sense for a single file
    pub(crate) fn is_file_scoped(self) -> bool {
        matches!(
            self,
            ValueName::FileName
                | ValueName::FilePath
                | ValueName::FileAction
                | ValueName::PackageName
                | ValueName::PackagePath
                | ValueName::PathFromRoot
                | ValueName::OldRevisionNumber
                | ValueName::NewRevisionNumber
        )
    }
}

pub(crate) const ROOTS_SECTION: &str = "ROOTS_SECTION";
pub(crate) const ROOT_ENTRY: &str = "ROOT_ENTRY";
pub(crate) const FILE_ENTRY: &str = "FILE_ENTRY";
pub(crate) const MODIFIED_FILES: &str = "MODIFIED_FILES";
pub(crate) const ADDED_FILES: &str = "ADDED_FILES";
pub(crate) const DELETED_FILES: &str = "DELETED_FILES";
pub(crate) const ALL_FILES: &str = "ALL_FILES";

/// Which change kinds a file-type section repeats over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSelection {
    Only(ChangeKind),
    /// Deleted, then Modified, then Added
    All,
}

impl FileSelection {
    pub(crate) fn from_opener(name: &str) -> Option<Self> {
        match name {
            MODIFIED_FILES => Some(FileSelection::Only(ChangeKind::Modified)),
            ADDED_FILES => Some(FileSelection::Only(ChangeKind::Added)),
            DELETED_FILES => Some(FileSelection::Only(ChangeKind::Deleted)),
            ALL_FILES => Some(FileSelection::All),
            _ => None,
        }
    }

    pub fn opener(self) -> &'static str {
        match self {
            FileSelection::Only(ChangeKind::Modified) => MODIFIED_FILES,
            FileSelection::Only(ChangeKind::Added) => ADDED_FILES,
            FileSelection::Only(ChangeKind::Deleted) => DELETED_FILES,
            FileSelection::All => ALL_FILES,
        }
    }

    /// Change kinds in rendering order
    pub fn kinds(self) -> &'static [ChangeKind] {
        match self {
            FileSelection::Only(ChangeKind::Modified) => &[ChangeKind::Modified],
            FileSelection::Only(ChangeKind::Added) => &[ChangeKind::Added],
            FileSelection::Only(ChangeKind::Deleted) => &[ChangeKind::Deleted],
            FileSelection::All => &[ChangeKind::Deleted, ChangeKind::Modified, ChangeKind::Added],
        }
    }
}

/// `Illegal Placeholder : $NAME$`
pub(crate) fn illegal_value(name: &str) -> String {
    format!("Illegal Placeholder : ${}$", name)
}

/// `Illegal Placeholder : [NAME]`
pub(crate) fn illegal_block(name: &str) -> String {
    format!("Illegal Placeholder : [{}]", name)
}

/// Block placeholder found where only `closer` may appear
pub(crate) fn illegal_section(name: &str, closer: &str) -> String {
    format!("Illegal section placeholder {} : expecting [{}]", name, closer)
}

/// Section opener whose closer never arrived
pub(crate) fn unclosed_section(name: &str) -> String {
    format!(
        "Unclosed section placeholder [{}] : expecting [/{}]",
        name, name
    )
}

/// `"a, b, c"`
pub(crate) fn join_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items.into_iter().collect::<Vec<_>>().join(", ")
}
