//! Error type shared by every SU2Run crate.

use std::path::PathBuf;

use crate::tools::SolverTool;

/// Error type for SU2 orchestration.
#[derive(Debug, thiserror::Error)]
pub enum Su2Error {
    /// An I/O operation on a path failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The working directory does not exist.
    #[error("the working directory {0} does not exist")]
    WorkdirMissing(PathBuf),

    /// No `Case*` directory was found in the working directory.
    #[error("no case directory found in the working directory {0}")]
    NoCaseFound(PathBuf),

    /// A required configuration file is missing from a directory.
    #[error("no \"{name}\" file found in {dir}")]
    MissingConfig { name: String, dir: PathBuf },

    /// A required input file is missing.
    #[error("required file {0} not found")]
    MissingFile(PathBuf),

    /// A text file could not be parsed.
    #[error("parse error in {path} line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    /// The settings file is invalid or incomplete.
    #[error("settings error: {0}")]
    Settings(String),

    /// A solver executable could not be found.
    #[error("{0} is not installed on this computer")]
    ToolNotInstalled(SolverTool),

    /// A solver process exited unsuccessfully.
    #[error(
        "{tool} failed with exit status {}",
        .code.map_or_else(|| "unknown (killed by signal)".to_string(), |c| c.to_string())
    )]
    SolverFailed { tool: SolverTool, code: Option<i32> },

    /// The run was cancelled.
    #[error("run cancelled")]
    Cancelled,
}

impl Su2Error {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
