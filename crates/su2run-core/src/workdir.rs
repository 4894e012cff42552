//! Working directory creation and lookup.

use std::path::{Path, PathBuf};

use crate::error::Su2Error;
use crate::settings::RunSettings;

const RUN_DIR_PREFIX: &str = "SU2Run_";
const DATE_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Create a new timestamped working directory.
///
/// With a `global_wkdir` (optimisation or DoE), the directory is created as
/// `<global_wkdir>/Runs/Run<date>`; otherwise as `<base>/SU2Run_<date>`.
/// The returned path is absolute, so it stays valid when recorded in the
/// settings and read back from another directory.
pub fn create_new_wkdir(base: &Path, global_wkdir: Option<&Path>) -> Result<PathBuf, Su2Error> {
    let date = chrono::Local::now().format(DATE_FORMAT).to_string();
    let run_dir = run_dir_path(base, global_wkdir, &date)?;
    std::fs::create_dir_all(&run_dir).map_err(|e| Su2Error::io(&run_dir, e))?;
    tracing::info!("created working directory {}", run_dir.display());
    Ok(run_dir)
}

fn run_dir_path(base: &Path, global_wkdir: Option<&Path>, date: &str) -> Result<PathBuf, Su2Error> {
    let run_dir = match global_wkdir {
        Some(global) => global.join("Runs").join(format!("Run{date}")),
        None => base.join(format!("{RUN_DIR_PREFIX}{date}")),
    };
    std::path::absolute(&run_dir).map_err(|e| Su2Error::io(&run_dir, e))
}

/// Return the working directory recorded in the settings, or create a new
/// one and record it.
pub fn get_wkdir_or_create_new(
    settings: &mut RunSettings,
    base: &Path,
) -> Result<PathBuf, Su2Error> {
    if let Some(existing) = settings.files.wkdir_path.as_ref().filter(|p| p.is_dir()) {
        return Ok(existing.clone());
    }
    if let Some(stale) = &settings.files.wkdir_path {
        tracing::warn!(
            "recorded working directory {} does not exist, creating a new one",
            stale.display()
        );
    }
    let wkdir = create_new_wkdir(base, settings.files.global_wkdir.as_deref())?;
    settings.files.wkdir_path = Some(wkdir.clone());
    Ok(wkdir)
}

/// Fail unless `path` is an existing directory.
pub fn ensure_wkdir(path: &Path) -> Result<(), Su2Error> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Su2Error::WorkdirMissing(path.to_path_buf()))
    }
}
