//! Tests for the env file loader.
//!
//! Responsibilities:
//! - Test line handling end to end through a real file and `MemoryEnv`.
//! - Test error categories and that the store is untouched on open failure.
//! - Test loading into the real process environment and default path resolution.
//!
//! Invariants:
//! - Tests that touch the process environment or working directory use
//!   `serial_test` to prevent cross-test contamination.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;


/// Write `contents` to `name` inside `dir` and return its path.
pub fn write_env_file(dir: &TempDir, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
