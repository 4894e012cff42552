//! SU2 executables and their install locations.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Su2Error;

/// An SU2 executable driven by the workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverTool {
    /// Flow solver.
    Cfd,
    /// Solution export (surface and volume flow files).
    Sol,
    /// Mesh deformation.
    Def,
}

impl SolverTool {
    pub const ALL: [SolverTool; 3] = [Self::Cfd, Self::Sol, Self::Def];

    /// Executable name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cfd => "SU2_CFD",
            Self::Sol => "SU2_SOL",
            Self::Def => "SU2_DEF",
        }
    }
}

impl fmt::Display for SolverTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SolverTool {
    type Err = Su2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Su2Error::Settings(format!("unknown SU2 tool: {s}")))
    }
}

/// Resolve the install path of each tool.
///
/// `solver_dir` (usually `$SU2_RUN`) is searched first, then `PATH`, then
/// the default macOS bundle location.
pub fn get_install_path(
    tools: &[SolverTool],
    solver_dir: Option<&Path>,
) -> Result<HashMap<SolverTool, PathBuf>, Su2Error> {
    let mut found = HashMap::with_capacity(tools.len());
    for &tool in tools {
        let path = locate(tool.as_str(), solver_dir).ok_or(Su2Error::ToolNotInstalled(tool))?;
        tracing::info!("{tool} is installed at: {}", path.display());
        found.insert(tool, path);
    }
    Ok(found)
}

/// Find `mpirun`. Its absence is not an error: runs fall back to one process.
#[must_use]
pub fn find_mpirun() -> Option<PathBuf> {
    let path = which("mpirun");
    if path.is_none() {
        tracing::warn!("mpirun is not installed on this computer");
        tracing::warn!("Calculations will be run only on 1 proc");
    }
    path
}

fn locate(name: &str, solver_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = solver_dir {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    if let Some(path) = which(name) {
        return Some(path);
    }
    if cfg!(target_os = "macos") {
        let bundled = Path::new("/Applications/SU2").join(name);
        if is_executable(&bundled) {
            return Some(bundled);
        }
    }
    None
}

/// Search `PATH` for an executable.
#[must_use]
pub fn which(name: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
