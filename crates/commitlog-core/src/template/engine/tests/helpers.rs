//! Shared test helpers for template engine tests

use crate::change::{ChangeIndex, ChangeKind, ChangeRecord};
use crate::template::engine::{ReportContext, Template, TemplateEngine};
use chrono::{NaiveDate, NaiveDateTime};

/// 2026-01-15 09:30:05
pub(super) fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 5)
        .unwrap()
}

pub(super) fn context() -> ReportContext {
    ReportContext::new("Fix parser", fixed_time())
}

pub(super) fn record(path: &str, root: &str, kind: ChangeKind) -> ChangeRecord {
    ChangeRecord::new(path, root, kind)
}

/// core: lib.rs modified (1.1 -> 1.2), old.rs deleted (1.4)
/// docs: guide.md added (1.0)
pub(super) fn two_root_index() -> ChangeIndex {
    let mut index = ChangeIndex::new();
    index.add(
        record("core/src/lib.rs", "core", ChangeKind::Modified)
            .with_path_from_root("src")
            .with_package_name("core")
            .with_old_revision("1.1")
            .with_new_revision("1.2"),
    );
    index.add(
        record("core/src/old.rs", "core", ChangeKind::Deleted)
            .with_path_from_root("src")
            .with_old_revision("1.4"),
    );
    index.add(
        record("docs/guide.md", "docs", ChangeKind::Added)
            .with_path_from_root("")
            .with_new_revision("1.0"),
    );
    index
}

pub(super) fn render(text: &str, index: &ChangeIndex) -> String {
    TemplateEngine::new()
        .render_text(text, index, &context())
        .unwrap()
}

pub(super) fn template(text: &str) -> Template {
    Template::parse(text).unwrap()
}
