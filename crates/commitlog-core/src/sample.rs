//! Built-in change set used to preview templates

use crate::change::{ChangeKind, ChangeRecord};
use crate::config::consts::SAMPLE_COMMIT_MESSAGE;
use crate::report::CommitLog;

const PACKAGE: &str = "commitlog.samplecommit";
const PATH_FROM_ROOT: &str = "commitlog/samplecommit";
const OLD_REVISION: &str = "1.2.3.4";
const NEW_REVISION: &str = "1.2.3.5";
const ADDED_REVISION: &str = "1.0";

/// (root, class, kind)
const SAMPLE_FILES: &[(&str, &str, ChangeKind)] = &[
    ("MyVCSModule", "ModifiedClass1", ChangeKind::Modified),
    ("MyVCSModule", "ModifiedClass2", ChangeKind::Modified),
    ("MyVCSModule", "ObsoleteClass", ChangeKind::Deleted),
    ("MyVCSModule", "NewClass", ChangeKind::Added),
    ("AnotherVCSModule", "ModifiedClass1", ChangeKind::Modified),
    ("AnotherVCSModule", "ModifiedClass2", ChangeKind::Modified),
];

fn sample_record(root: &str, class: &str, kind: ChangeKind) -> ChangeRecord {
    let path = format!("sandbox/{}/{}/{}.java", root, PATH_FROM_ROOT, class);
    let mut record = ChangeRecord::new(path, root, kind)
        .with_package_name(PACKAGE)
        .with_path_from_root(PATH_FROM_ROOT);

    match kind {
        ChangeKind::Modified => {
            record.set_old_revision(Some(OLD_REVISION.to_string()));
            record.set_new_revision(Some(NEW_REVISION.to_string()));
        }
        ChangeKind::Deleted => record.set_old_revision(Some(OLD_REVISION.to_string())),
        ChangeKind::Added => record.set_new_revision(Some(ADDED_REVISION.to_string())),
    }
    record
}

/// A commit log over the sample change set, ready to render with `template`
pub fn sample_commit_log(template: impl Into<String>) -> CommitLog {
    let mut log = CommitLog::new(template, SAMPLE_COMMIT_MESSAGE);
    for (root, class, kind) in SAMPLE_FILES {
        log.add(sample_record(root, class, *kind));
    }
    log
}
