//! Constants shared across the crate

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "commitlog.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "COMMITLOG_CONFIG";

/// Shown by `$FILE_NAME$` / `$FILE_PATH$` when a record has no path
pub const NO_FILE: &str = "<no file>";

/// Marker inserted after the error offset in template previews
pub const ERROR_MARKER: &str = "<<<ERROR\n";

/// Commit message used for template previews
pub const SAMPLE_COMMIT_MESSAGE: &str = "Refactored sample classes and removed obsolete code";

/// Date/time patterns (chrono strftime syntax)
pub mod format {
    pub const TIME: &str = "%H:%M:%S";
    pub const DATE: &str = "%Y-%m-%d";
    pub const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
}

/// Report generated after a commit
pub const DEFAULT_COMMIT_LOG_TEMPLATE: &str = r"Commit Log
==========
$DATE_TIME$

$COMMIT_MESSAGE$

$FILE_COUNT$ file(s) in $ROOT_COUNT$ root(s): $ROOT_LIST$
[ROOTS_SECTION][ROOT_ENTRY]
$ROOT_NAME$ ($FILE_COUNT$ files)
[DELETED_FILES]  Removed ($FILE_COUNT$):
[FILE_ENTRY]    $PATH_FROM_ROOT$/$FILE_NAME$ ($OLD_REVISION_NUMBER$)
[/FILE_ENTRY][/DELETED_FILES][MODIFIED_FILES]  Modified ($FILE_COUNT$):
[FILE_ENTRY]    $PATH_FROM_ROOT$/$FILE_NAME$ ($OLD_REVISION_NUMBER$ -> $NEW_REVISION_NUMBER$)
[/FILE_ENTRY][/MODIFIED_FILES][ADDED_FILES]  Added ($FILE_COUNT$):
[FILE_ENTRY]    $PATH_FROM_ROOT$/$FILE_NAME$ ($NEW_REVISION_NUMBER$)
[/FILE_ENTRY][/ADDED_FILES][/ROOT_ENTRY][/ROOTS_SECTION]";

/// Commit comment generated from the selected files
pub const DEFAULT_COMMENT_TEMPLATE: &str = r"$COMMIT_MESSAGE$

[ALL_FILES][FILE_ENTRY]$FILE_ACTION$: $FILE_NAME$
[/FILE_ENTRY][/ALL_FILES]";
