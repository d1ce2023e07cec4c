//! Two-level grouping of change records: root name → change kind → records

use super::{ChangeKind, ChangeRecord, FileId};
use std::collections::{BTreeMap, HashMap};

/// Which root group to address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSelector<'a> {
    /// The aggregate group every record is mirrored into
    All,
    Named(&'a str),
}

impl<'a> From<Option<&'a str>> for RootSelector<'a> {
    fn from(root: Option<&'a str>) -> Self {
        match root {
            Some(name) => RootSelector::Named(name),
            None => RootSelector::All,
        }
    }
}

/// Records of one (root, kind) pair, deduplicated by file identity
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    records: BTreeMap<FileId, ChangeRecord>,
}

impl Bucket {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, file: &FileId) -> bool {
        self.records.contains_key(file)
    }

    pub fn get(&self, file: &FileId) -> Option<&ChangeRecord> {
        self.records.get(file)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.records.values()
    }

    /// Keeps the first record seen for a file; returns whether it was new
    fn insert(&mut self, record: ChangeRecord) -> bool {
        if self.records.contains_key(record.file()) {
            return false;
        }
        self.records.insert(record.file().clone(), record);
        true
    }

    fn remove_no_ops(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| {
            if record.is_no_op() {
                tracing::debug!(
                    "Removing commit log entry for {} : file not committed",
                    record.file()
                );
                false
            } else {
                true
            }
        });
        before - self.records.len()
    }
}

type KindBuckets = BTreeMap<ChangeKind, Bucket>;

/// Removes no-op records and then empty buckets; returns records removed
fn prune_group(group: &mut KindBuckets) -> usize {
    let removed = group.values_mut().map(Bucket::remove_no_ops).sum();
    group.retain(|_, bucket| !bucket.is_empty());
    removed
}

fn group_has_records(group: &KindBuckets) -> bool {
    group.values().any(|bucket| !bucket.is_empty())
}

/// Change records grouped by VCS root name and change kind
///
/// Every record added under a named root is mirrored into the
/// [`RootSelector::All`] group. Root names iterate in ascending order and
/// size queries only count groups that hold at least one record.
#[derive(Debug, Clone, Default)]
pub struct ChangeIndex {
    roots: BTreeMap<String, KindBuckets>,
    all: KindBuckets,
    file_count: usize,
}

impl ChangeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert into the record's (root, kind) bucket and the (all, kind) bucket
    pub fn add(&mut self, record: ChangeRecord) {
        let root = record.root_name().to_string();
        let kind = record.kind();
        let is_new = self
            .roots
            .entry(root)
            .or_default()
            .entry(kind)
            .or_default()
            .insert(record.clone());
        self.all.entry(kind).or_default().insert(record);
        if is_new {
            self.file_count += 1;
        }
    }

    /// Drop every record whose old and new revision labels are equal
    ///
    /// Emptied buckets and root groups are removed. Returns the number of
    /// records removed from the named roots, which is also subtracted from
    /// [`ChangeIndex::file_count`].
    pub fn prune_no_ops(&mut self) -> usize {
        let mut removed = 0;
        self.roots.retain(|root, group| {
            removed += prune_group(group);
            if group.is_empty() {
                tracing::debug!("Root '{}' has no committed files left", root);
            }
            !group.is_empty()
        });
        prune_group(&mut self.all);
        self.file_count = self.file_count.saturating_sub(removed);
        removed
    }

    /// The (root, kind) bucket, created empty if absent
    pub fn entries_for(&mut self, root: RootSelector<'_>, kind: ChangeKind) -> &Bucket {
        let group = match root {
            RootSelector::All => &mut self.all,
            RootSelector::Named(name) => self.roots.entry(name.to_string()).or_default(),
        };
        group.entry(kind).or_default()
    }

    /// The (root, kind) bucket without creating it
    pub fn bucket(&self, root: RootSelector<'_>, kind: ChangeKind) -> Option<&Bucket> {
        let group = match root {
            RootSelector::All => &self.all,
            RootSelector::Named(name) => self.roots.get(name)?,
        };
        group.get(&kind)
    }

    /// Root names holding at least one record, ascending
    pub fn root_names(&self) -> impl Iterator<Item = &str> {
        self.roots
            .iter()
            .filter(|(_, group)| group_has_records(group))
            .map(|(name, _)| name.as_str())
    }

    pub fn root_count(&self) -> usize {
        self.root_names().count()
    }

    /// Records under `root` across all kinds
    pub fn root_file_count(&self, root: &str) -> usize {
        self.roots
            .get(root)
            .map(|group| group.values().map(Bucket::len).sum())
            .unwrap_or(0)
    }

    /// Distinct records added, minus those pruned
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn is_empty(&self) -> bool {
        self.root_count() == 0
    }

    /// Every record once, in kind then path order
    pub fn records(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.all.values().flat_map(Bucket::iter)
    }

    /// Apply `f` to every stored copy of every record
    fn for_each_record_mut(&mut self, mut f: impl FnMut(&mut ChangeRecord)) {
        let named = self.roots.values_mut().flat_map(|group| group.values_mut());
        for bucket in named.chain(self.all.values_mut()) {
            bucket.records.values_mut().for_each(&mut f);
        }
    }

    /// Set the post-commit revision of `file` in every group; returns copies updated
    pub fn set_new_revision(&mut self, file: &FileId, revision: Option<String>) -> usize {
        let mut updated = 0;
        self.for_each_record_mut(|record| {
            if record.file() == file {
                record.set_new_revision(revision.clone());
                updated += 1;
            }
        });
        updated
    }

    /// Ask each record's VCS for its post-commit revision
    ///
    /// Each file is looked up once. When the VCS reports no revision the old
    /// revision is carried over, which makes the record a no-op. Failed
    /// lookups are logged and leave the record unchanged. Returns the number
    /// of files resolved.
    pub fn refresh_new_revisions(&mut self) -> usize {
        let mut resolved: HashMap<FileId, Option<String>> = HashMap::new();

        for record in self.records() {
            if resolved.contains_key(record.file()) {
                continue;
            }
            let Some(vcs) = record.vcs() else {
                continue;
            };
            match vcs.current_revision(record) {
                Ok(revision) => {
                    let revision = revision.or_else(|| record.old_revision().map(str::to_string));
                    resolved.insert(record.file().clone(), revision);
                }
                Err(err) => {
                    tracing::warn!("Could not resolve revision for {}: {}", record.file(), err);
                }
            }
        }

        self.for_each_record_mut(|record| {
            if let Some(revision) = resolved.get(record.file()) {
                record.set_new_revision(revision.clone());
            }
        });
        resolved.len()
    }
}
