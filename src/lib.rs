//! Shared helpers for the workspace-level workflow tests.

use std::path::PathBuf;

/// Directory holding the golden solver outputs used by the workflow tests.
#[must_use]
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("testdata")
}
