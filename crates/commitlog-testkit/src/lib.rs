//! Test utilities for commitlog
//!
//! This crate provides shared testing utilities used across the commitlog workspace.

mod env;
mod fixtures;

pub use env::{CONFIG_ENV, ENV_LOCK, with_isolated_env};
pub use fixtures::{SAMPLE_CHANGE_SET, write_change_set, write_config, write_template};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// All test scratch files end up in one gitignored location.
///
/// # Panics
///
/// Panics if the current directory is unavailable or `.tmp/` cannot be created.
///
/// # Examples
///
/// ```rust
/// use commitlog_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("changes.json");
/// std::fs::write(&file_path, "{}").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    // Create unique subdirectory within .tmp/
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_creates_in_tmp() {
        let temp = temp_dir_in_workspace();
        let path = temp.path();

        assert!(
            path.to_string_lossy().contains(".tmp"),
            "Path should contain .tmp, got: {}",
            path.display()
        );
        assert!(path.is_dir(), "Path should be a directory");
    }

    #[test]
    fn test_temp_dir_auto_cleanup() {
        let path = {
            let temp = temp_dir_in_workspace();
            let p = temp.path().to_path_buf();
            assert!(p.exists(), "Directory should exist before drop");
            p
        }; // temp dropped here

        assert!(
            !path.exists(),
            "Directory should not exist after drop: {}",
            path.display()
        );
    }

    #[test]
    fn test_multiple_temp_dirs_unique() {
        let temp1 = temp_dir_in_workspace();
        let temp2 = temp_dir_in_workspace();

        assert_ne!(
            temp1.path(),
            temp2.path(),
            "Multiple temp directories should have unique paths"
        );
    }

    #[test]
    fn test_try_temp_dir_in_workspace_returns_ok() {
        let temp = try_temp_dir_in_workspace().expect("Should create temp directory");
        assert!(temp.path().exists());
        assert!(temp.path().to_string_lossy().contains(".tmp"));
    }
}
