//! Fixture files for CLI and integration tests

use std::path::{Path, PathBuf};

/// Two roots, one file of each kind, with revisions
pub const SAMPLE_CHANGE_SET: &str = r#"{
  "message": "Fix parser",
  "changes": [
    { "path": "core/src/lib.rs", "root": "core", "kind": "modified",
      "package": "core", "path_from_root": "src",
      "old_revision": "41", "new_revision": "42" },
    { "path": "core/src/old.rs", "root": "core", "kind": "deleted",
      "path_from_root": "src", "old_revision": "7" },
    { "path": "docs/guide.md", "root": "docs", "kind": "added",
      "new_revision": "1" }
  ]
}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Writes `changes.json` into `dir`
pub fn write_change_set(dir: &Path, json: &str) -> PathBuf {
    write(dir, "changes.json", json)
}

/// Writes a template file named `name` into `dir`
pub fn write_template(dir: &Path, name: &str, text: &str) -> PathBuf {
    write(dir, name, text)
}

/// Writes `commitlog.toml` into `dir`
pub fn write_config(dir: &Path, toml: &str) -> PathBuf {
    write(dir, "commitlog.toml", toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fixture_writers() {
        let temp = TempDir::new().unwrap();

        let changes = write_change_set(temp.path(), SAMPLE_CHANGE_SET);
        assert_eq!(changes.file_name().unwrap(), "changes.json");
        assert!(std::fs::read_to_string(&changes).unwrap().contains("Fix parser"));

        let template = write_template(temp.path(), "log.txt", "$FILE_COUNT$");
        assert_eq!(std::fs::read_to_string(template).unwrap(), "$FILE_COUNT$");

        let config = write_config(temp.path(), "[report]\nkeep_unchanged = true\n");
        assert_eq!(config.file_name().unwrap(), "commitlog.toml");
    }
}
