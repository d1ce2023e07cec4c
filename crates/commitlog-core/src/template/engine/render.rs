//! Section renderer
//!
//! Walks the structured template top-down, repeating each section over the
//! part of the [`ChangeIndex`] it addresses. A section whose collection is
//! empty renders as `""` but still reports its full node span.

use std::fmt::Write as _;

use chrono::NaiveDateTime;

use super::blocks::{Item, Section, SectionKind};
use super::names::{illegal_value, join_list, ValueName};
use super::ReportContext;
use crate::change::{Bucket, ChangeIndex, ChangeKind, ChangeRecord, RootSelector};
use crate::config::consts::NO_FILE;

/// Rendered text plus the number of template nodes it consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSection {
    pub text: String,
    pub used_nodes: usize,
}

/// What the placeholders at the current position can see
#[derive(Debug, Clone, Copy)]
enum Frame<'a> {
    /// Top level and the roots section body
    Global,
    /// Inside one root entry
    Root { name: &'a str },
    /// Inside one change kind of a file-type section
    Files {
        root: RootSelector<'a>,
        bucket: Option<&'a Bucket>,
    },
    /// Inside one file entry
    ///
    /// `section` is the bucket of a file-type section that repeats per file
    /// without a `[FILE_ENTRY]`; its `FILE_COUNT` is still the bucket size.
    File {
        record: &'a ChangeRecord,
        kind: ChangeKind,
        section: Option<&'a Bucket>,
    },
}

impl<'a> Frame<'a> {
    /// Root group a nested file-type section reads from
    fn root(self) -> RootSelector<'a> {
        match self {
            Frame::Global => RootSelector::All,
            Frame::Root { name } => RootSelector::Named(name),
            Frame::Files { root, .. } => root,
            Frame::File { record, .. } => RootSelector::Named(record.root_name()),
        }
    }
}

pub(crate) struct Renderer<'a> {
    index: &'a ChangeIndex,
    context: &'a ReportContext,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(index: &'a ChangeIndex, context: &'a ReportContext) -> Self {
        Self { index, context }
    }

    /// Render a top-level item list
    pub(crate) fn render(&self, items: &'a [Item]) -> RenderSection {
        self.render_items(items, Frame::Global)
    }

    fn render_items(&self, items: &'a [Item], frame: Frame<'a>) -> RenderSection {
        let mut text = String::new();
        let mut used_nodes = 0;

        for item in items {
            match item {
                Item::Text(literal) => text.push_str(literal),
                Item::Value { name, .. } => text.push_str(&self.resolve(name, frame)),
                Item::Invalid(diagnostic) => text.push_str(diagnostic),
                Item::Section(section) => text.push_str(&self.render_section(section, frame).text),
            }
            used_nodes += item.span();
        }

        RenderSection { text, used_nodes }
    }

    /// Render one section in the frame that encloses it
    fn render_section(&self, section: &'a Section, frame: Frame<'a>) -> RenderSection {
        let text = match section.kind {
            SectionKind::Roots => {
                if self.index.root_count() == 0 {
                    String::new()
                } else {
                    self.render_items(&section.body, Frame::Global).text
                }
            }
            SectionKind::RootEntry => self
                .index
                .root_names()
                .map(|name| self.render_items(&section.body, Frame::Root { name }).text)
                .collect(),
            SectionKind::Files(selection) => {
                let root = frame.root();
                selection
                    .kinds()
                    .iter()
                    .map(|kind| self.render_files(&section.body, root, *kind))
                    .collect()
            }
            SectionKind::FileEntry => match frame {
                Frame::Files {
                    bucket: Some(bucket),
                    ..
                } => bucket
                    .iter()
                    .map(|record| {
                        let frame = Frame::File {
                            record,
                            kind: record.kind(),
                            section: None,
                        };
                        self.render_items(&section.body, frame).text
                    })
                    .collect(),
                _ => String::new(),
            },
        };

        RenderSection {
            text,
            used_nodes: section.span,
        }
    }

    /// One change kind of a file-type section; empty buckets render nothing
    fn render_files(&self, body: &'a [Item], root: RootSelector<'a>, kind: ChangeKind) -> String {
        match self.index.bucket(root, kind) {
            Some(bucket) if !bucket.is_empty() && repeats_per_file(body) => bucket
                .iter()
                .map(|record| {
                    let frame = Frame::File {
                        record,
                        kind: record.kind(),
                        section: Some(bucket),
                    };
                    self.render_items(body, frame).text
                })
                .collect(),
            Some(bucket) if !bucket.is_empty() => {
                let frame = Frame::Files {
                    root,
                    bucket: Some(bucket),
                };
                self.render_items(body, frame).text
            }
            _ => String::new(),
        }
    }

    fn resolve(&self, name: &str, frame: Frame<'a>) -> String {
        ValueName::from_name(name)
            .and_then(|value| {
                self.resolve_in_frame(value, frame)
                    .or_else(|| self.resolve_common(value))
            })
            .unwrap_or_else(|| illegal_value(name))
    }

    /// Names whose meaning depends on the enclosing section
    fn resolve_in_frame(&self, value: ValueName, frame: Frame<'a>) -> Option<String> {
        match frame {
            Frame::Global => None,
            Frame::Root { name } => match value {
                ValueName::RootName => Some(name.to_string()),
                ValueName::FileCount => Some(self.index.root_file_count(name).to_string()),
                _ => None,
            },
            Frame::Files { bucket, .. } => bucket_value(value, bucket),
            Frame::File {
                record,
                kind,
                section,
            } => resolve_file(value, record, kind)
                .or_else(|| section.and_then(|bucket| bucket_value(value, Some(bucket)))),
        }
    }

    /// Names valid everywhere
    fn resolve_common(&self, value: ValueName) -> Option<String> {
        let formats = &self.context.formats;
        match value {
            ValueName::Time => Some(format_timestamp(self.context.timestamp, &formats.time)),
            ValueName::Date => Some(format_timestamp(self.context.timestamp, &formats.date)),
            ValueName::DateTime => {
                Some(format_timestamp(self.context.timestamp, &formats.date_time))
            }
            ValueName::FileCount => Some(self.index.file_count().to_string()),
            ValueName::RootCount => Some(self.index.root_count().to_string()),
            ValueName::RootList => Some(join_list(self.index.root_names())),
            ValueName::CommitMessage => Some(self.context.message.clone()),
            _ => None,
        }
    }
}

/// A file-type section body that uses file values but has no `[FILE_ENTRY]`
/// acts as its own file entry
fn repeats_per_file(body: &[Item]) -> bool {
    let mut has_file_value = false;
    for item in body {
        match item {
            Item::Section(Section {
                kind: SectionKind::FileEntry,
                ..
            }) => return false,
            Item::Value { name, .. } => {
                has_file_value |= ValueName::from_name(name).is_some_and(ValueName::is_file_scoped);
            }
            _ => {}
        }
    }
    has_file_value
}

/// `FILE_COUNT` at file-type section level; empty when there are no files
fn bucket_value(value: ValueName, bucket: Option<&Bucket>) -> Option<String> {
    match value {
        ValueName::FileCount => Some(match bucket {
            Some(bucket) if !bucket.is_empty() => bucket.len().to_string(),
            _ => String::new(),
        }),
        _ => None,
    }
}

fn resolve_file(value: ValueName, record: &ChangeRecord, kind: ChangeKind) -> Option<String> {
    let text = match value {
        ValueName::FileName => record.file_name().unwrap_or_else(|| NO_FILE.to_string()),
        ValueName::FilePath => record
            .display_path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| NO_FILE.to_string()),
        ValueName::FileAction => kind.action().to_string(),
        ValueName::RootName => record.root_name().to_string(),
        ValueName::PackageName => record.package_name().unwrap_or_default().to_string(),
        ValueName::PackagePath | ValueName::PathFromRoot => {
            record.path_from_root().unwrap_or_default().to_string()
        }
        ValueName::OldRevisionNumber => match record.old_revision() {
            Some(revision) if kind != ChangeKind::Added => revision.to_string(),
            _ => ChangeKind::Added.action().to_string(),
        },
        ValueName::NewRevisionNumber => match record.new_revision() {
            Some(revision) if kind != ChangeKind::Deleted => revision.to_string(),
            _ => ChangeKind::Deleted.action().to_string(),
        },
        _ => return None,
    };
    Some(text)
}

/// Format with a strftime pattern, falling back to the default rendering
fn format_timestamp(timestamp: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(pattern)).is_err() {
        tracing::warn!("Invalid date format '{}'", pattern);
        return timestamp.to_string();
    }
    out
}
