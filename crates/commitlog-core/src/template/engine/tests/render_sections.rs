use super::helpers::{record, render, two_root_index};
use crate::change::{ChangeIndex, ChangeKind};

const ROOT_LINES: &str =
    "[ROOTS_SECTION][ROOT_ENTRY]$ROOT_NAME$=$FILE_COUNT$;[/ROOT_ENTRY][/ROOTS_SECTION]";

#[test]
fn test_roots_section_suppressed_without_roots() {
    assert_eq!(
        render(
            "[ROOTS_SECTION]Roots:[ROOT_ENTRY] $ROOT_NAME$[/ROOT_ENTRY][/ROOTS_SECTION]done",
            &ChangeIndex::new()
        ),
        "done"
    );
}

#[test]
fn test_roots_section_body_renders_once() {
    assert_eq!(
        render(
            "[ROOTS_SECTION]Roots:[ROOT_ENTRY] $ROOT_NAME$[/ROOT_ENTRY]\n[/ROOTS_SECTION]",
            &two_root_index()
        ),
        "Roots: core docs\n"
    );
}

#[test]
fn test_root_entry_repeats_per_root_with_root_file_count() {
    assert_eq!(render(ROOT_LINES, &two_root_index()), "core=2;docs=1;");
}

#[test]
fn test_root_entry_order_ignores_insertion_order() {
    let mut index = ChangeIndex::new();
    index.add(record("zeta/a.rs", "zeta", ChangeKind::Added));
    index.add(record("alpha/b.rs", "alpha", ChangeKind::Added));
    index.add(record("mid/c.rs", "mid", ChangeKind::Added));

    assert_eq!(render(ROOT_LINES, &index), "alpha=1;mid=1;zeta=1;");
}

#[test]
fn test_global_values_inside_root_entry() {
    assert_eq!(
        render(
            "[ROOTS_SECTION][ROOT_ENTRY]$ROOT_NAME$/$ROOT_COUNT$:$COMMIT_MESSAGE$;[/ROOT_ENTRY][/ROOTS_SECTION]",
            &two_root_index()
        ),
        "core/2:Fix parser;docs/2:Fix parser;"
    );
}

#[test]
fn test_file_count_in_roots_section_is_global() {
    assert_eq!(
        render(
            "[ROOTS_SECTION]$FILE_COUNT$[/ROOTS_SECTION]",
            &two_root_index()
        ),
        "3"
    );
}

#[test]
fn test_file_sections_inside_root_entry_are_root_scoped() {
    assert_eq!(
        render(
            "[ROOTS_SECTION][ROOT_ENTRY]$ROOT_NAME$:[ALL_FILES][FILE_ENTRY] $FILE_NAME$[/FILE_ENTRY][/ALL_FILES]\n[/ROOT_ENTRY][/ROOTS_SECTION]",
            &two_root_index()
        ),
        "core: old.rs lib.rs\ndocs: guide.md\n"
    );
}

#[test]
fn test_kind_section_skipped_for_root_without_that_kind() {
    assert_eq!(
        render(
            "[ROOTS_SECTION][ROOT_ENTRY]$ROOT_NAME$[ADDED_FILES] +$FILE_COUNT$[/ADDED_FILES];[/ROOT_ENTRY][/ROOTS_SECTION]",
            &two_root_index()
        ),
        "core;docs +1;"
    );
}

#[test]
fn test_pruned_root_disappears() {
    let mut index = ChangeIndex::new();
    index.add(
        record("core/a.rs", "core", ChangeKind::Modified)
            .with_old_revision("3")
            .with_new_revision("4"),
    );
    index.add(
        record("docs/b.md", "docs", ChangeKind::Modified)
            .with_old_revision("7")
            .with_new_revision("7"),
    );
    assert_eq!(index.prune_no_ops(), 1);

    assert_eq!(render(ROOT_LINES, &index), "core=1;");
    assert_eq!(render("$ROOT_COUNT$/$FILE_COUNT$", &index), "1/1");
}
