//! Orchestration interfaces.

use std::path::Path;
use std::time::Duration;

use su2run_core::error::Su2Error;
use su2run_core::settings::AeroResult;
use su2run_core::tools::SolverTool;

/// Runs one SU2 executable on a configuration inside a working directory.
pub trait SolverLauncher {
    fn launch(&self, tool: SolverTool, config: &Path, wkdir: &Path) -> Result<(), Su2Error>;
}

/// Trait for reporting multi-case progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// A case is about to start. `index` is zero-based.
    fn case_started(&self, index: usize, total: usize, name: &str);

    /// A case finished successfully.
    fn case_finished(&self, outcome: &CaseOutcome);

    /// Report completion of the whole run.
    fn complete(&self);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the per-case execution summary.
    fn present_cases(&self, outcomes: &[CaseOutcome]);

    /// Present extracted aerodynamic coefficients.
    fn present_results(&self, results: &[AeroResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Execution summary of one case directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    /// Case directory name.
    pub name: String,
    /// Executables run, in order.
    pub tools: Vec<SolverTool>,
    pub duration: Duration,
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn case_started(&self, _index: usize, _total: usize, _name: &str) {}
    fn case_finished(&self, _outcome: &CaseOutcome) {}
    fn complete(&self) {}
}
