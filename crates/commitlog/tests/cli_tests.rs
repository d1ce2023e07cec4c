//! Integration tests for the commitlog CLI

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use commitlog_testkit::{
    SAMPLE_CHANGE_SET, temp_dir_in_workspace, with_isolated_env, write_change_set, write_config,
    write_template,
};
use predicates::prelude::*;
use std::process::Command;

const AT: &str = "2026-10-19 08:15:00";

fn commitlog() -> Command {
    Command::new(cargo_bin!(env!("CARGO_PKG_NAME")))
}

#[test]
fn test_cli_help_flag() {
    with_isolated_env(None, || {
        commitlog()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("sample"));
    });
}

#[test]
fn test_render_default_comment() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let changes = write_change_set(temp.path(), SAMPLE_CHANGE_SET);

        commitlog()
            .current_dir(temp.path())
            .args(["render", "--comment", "--at", AT, "--changes"])
            .arg(&changes)
            .assert()
            .success()
            .stdout("Fix parser\n\nRemoved: old.rs\nModified: lib.rs\nAdded: guide.md\n");
    });
}

#[test]
fn test_render_with_template_and_message() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let changes = write_change_set(temp.path(), SAMPLE_CHANGE_SET);
        let template = write_template(
            temp.path(),
            "log.txt",
            "$DATE$ $COMMIT_MESSAGE$: $FILE_COUNT$ in $ROOT_LIST$",
        );

        commitlog()
            .args(["render", "--at", AT, "-m", "Release", "--changes"])
            .arg(&changes)
            .arg("--template")
            .arg(&template)
            .assert()
            .success()
            .stdout("2026-10-19 Release: 3 in core, docs");
    });
}

#[test]
fn test_render_skips_unchanged_files() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let changes = write_change_set(
            temp.path(),
            r#"{ "message": "m", "changes": [
                { "path": "a.rs", "root": "core", "kind": "modified",
                  "old_revision": "3", "new_revision": "3" },
                { "path": "b.rs", "root": "core", "kind": "modified",
                  "old_revision": "3", "new_revision": "4" } ] }"#,
        );
        let template = write_template(
            temp.path(),
            "t.txt",
            "[ALL_FILES][FILE_ENTRY]$FILE_NAME$ [/FILE_ENTRY][/ALL_FILES]",
        );

        commitlog()
            .args(["render", "--at", AT, "--changes"])
            .arg(&changes)
            .arg("--template")
            .arg(&template)
            .assert()
            .success()
            .stdout("b.rs ");

        commitlog()
            .args(["render", "--keep-unchanged", "--at", AT, "--changes"])
            .arg(&changes)
            .arg("--template")
            .arg(&template)
            .assert()
            .success()
            .stdout("a.rs b.rs ");
    });
}

#[test]
fn test_render_syntax_error_exits_nonzero() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let changes = write_change_set(temp.path(), SAMPLE_CHANGE_SET);
        let template = write_template(temp.path(), "bad.txt", "Price is $5");

        commitlog()
            .args(["render", "--changes"])
            .arg(&changes)
            .arg("--template")
            .arg(&template)
            .assert()
            .failure()
            .stderr(predicate::str::contains("error at index 9"));
    });
}

#[test]
fn test_render_missing_change_set() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();

        commitlog()
            .args(["render", "--changes"])
            .arg(temp.path().join("missing.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    });
}

#[test]
fn test_render_rejects_bad_timestamp() {
    with_isolated_env(None, || {
        commitlog()
            .args(["render", "--changes", "x.json", "--at", "yesterday"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("YYYY-MM-DD HH:MM:SS"));
    });
}

#[test]
fn test_local_config_file_is_used() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let changes = write_change_set(temp.path(), SAMPLE_CHANGE_SET);
        write_config(temp.path(), "[log]\ntemplate = \"$ROOT_COUNT$ roots\"\n");

        commitlog()
            .current_dir(temp.path())
            .args(["render", "--changes"])
            .arg(&changes)
            .assert()
            .success()
            .stdout("2 roots");
    });
}

#[test]
fn test_config_from_environment() {
    let temp = temp_dir_in_workspace();
    let changes = write_change_set(temp.path(), SAMPLE_CHANGE_SET);
    let config = write_config(
        temp.path(),
        "[comment]\ntemplate = \"$COMMIT_MESSAGE$!\"\n",
    );

    with_isolated_env(Some(&config), || {
        commitlog()
            .args(["render", "--comment", "--changes"])
            .arg(&changes)
            .assert()
            .success()
            .stdout("Fix parser!");
    });
}

#[test]
fn test_disabled_report_prints_nothing() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let changes = write_change_set(temp.path(), SAMPLE_CHANGE_SET);
        let config = write_config(temp.path(), "[log]\nenabled = false\n");

        commitlog()
            .arg("--config")
            .arg(&config)
            .args(["render", "--changes"])
            .arg(&changes)
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("disabled"));
    });
}

#[test]
fn test_check_valid_template() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let template = write_template(
            temp.path(),
            "ok.txt",
            "[ALL_FILES][FILE_ENTRY]$FILE_NAME$[/FILE_ENTRY][/ALL_FILES]",
        );

        commitlog()
            .arg("check")
            .arg(&template)
            .assert()
            .success()
            .stdout(predicate::str::contains("Template OK (5 nodes, 2 sections)"));
    });
}

#[test]
fn test_check_reports_misplaced_sections() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let template = write_template(temp.path(), "warn.txt", "[FILE_ENTRY]$FILE_NAME$");

        commitlog()
            .arg("check")
            .arg(&template)
            .assert()
            .success()
            .stdout(predicate::str::contains("Illegal Placeholder : [FILE_ENTRY]"));
    });
}

#[test]
fn test_check_syntax_error() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let template = write_template(temp.path(), "bad.txt", "Price is $5");

        commitlog()
            .arg("check")
            .arg(&template)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Price is $<<<ERROR"))
            .stdout(predicate::str::contains("error at index 9"));
    });
}

#[test]
fn test_check_json() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let template = write_template(temp.path(), "ok.txt", "$COMMIT_MESSAGE$ [ROOTS_SECTION][/ROOTS_SECTION]");

        let output = commitlog()
            .args(["check", "--json"])
            .arg(&template)
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["nodes"], 4);
        assert_eq!(json["sections"], 1);
        assert!(json["error"].is_null());
    });
}

#[test]
fn test_check_json_error() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let template = write_template(temp.path(), "bad.txt", "a]b");

        let output = commitlog()
            .args(["check", "--json"])
            .arg(&template)
            .output()
            .unwrap();
        assert!(!output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["location"], 1);
    });
}

#[test]
fn test_check_default_templates() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();

        commitlog()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success();

        commitlog()
            .current_dir(temp.path())
            .args(["check", "--comment"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Template OK"));
    });
}

#[test]
fn test_sample_preview() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let template = write_template(
            temp.path(),
            "roots.txt",
            "[ROOTS_SECTION][ROOT_ENTRY]$ROOT_NAME$ $FILE_COUNT$\n[/ROOT_ENTRY][/ROOTS_SECTION]",
        );

        commitlog()
            .args(["sample", "--at", AT, "--template"])
            .arg(&template)
            .assert()
            .success()
            .stdout("AnotherVCSModule 2\nMyVCSModule 4\n");
    });
}

#[test]
fn test_sample_preview_marks_syntax_error() {
    with_isolated_env(None, || {
        let temp = temp_dir_in_workspace();
        let template = write_template(temp.path(), "bad.txt", "ok [ROOT");

        commitlog()
            .args(["sample", "--template"])
            .arg(&template)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("ok [<<<ERROR\n"));
    });
}
