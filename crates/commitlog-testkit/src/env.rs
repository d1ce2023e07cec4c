//! Environment isolation utilities for testing
//!
//! Config lookup reads `COMMITLOG_CONFIG`, so tests touching it must not
//! run concurrently.

use std::path::Path;
use std::sync::Mutex;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Environment variable naming an explicit commitlog.toml
pub const CONFIG_ENV: &str = "COMMITLOG_CONFIG";

/// Run `f` with `COMMITLOG_CONFIG` set to `config`, or unset when `None`
///
/// Holds [`ENV_LOCK`] for the duration and restores the previous value
/// afterwards. A lock poisoned by an earlier panicking test is recovered.
///
/// # Examples
///
/// ```no_run
/// use commitlog_testkit::with_isolated_env;
/// use std::path::Path;
///
/// with_isolated_env(Some(Path::new("/tmp/commitlog.toml")), || {
///     assert_eq!(
///         std::env::var("COMMITLOG_CONFIG").unwrap(),
///         "/tmp/commitlog.toml"
///     );
/// });
/// ```
pub fn with_isolated_env<F, R>(config: Option<&Path>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let original = std::env::var_os(CONFIG_ENV);

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        match config {
            Some(path) => std::env::set_var(CONFIG_ENV, path),
            None => std::env::remove_var(CONFIG_ENV),
        }
    }

    let result = f();

    // SAFETY: We still hold ENV_LOCK, ensuring exclusive access to env vars.
    unsafe {
        match original {
            Some(value) => std::env::set_var(CONFIG_ENV, value),
            None => std::env::remove_var(CONFIG_ENV),
        }
    }

    result
}
