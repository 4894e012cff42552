//! # su2run-orchestration
//!
//! SU2 workflows (single case, multi-case, FSI), configuration generation,
//! and extraction of coefficients and loads.

pub mod config_gen;
pub mod interfaces;
pub mod launcher;
pub mod loads;
pub mod results;
pub mod runner;

pub use config_gen::generate_su2_config;
pub use interfaces::{CaseOutcome, ProgressReporter, ResultPresenter, SolverLauncher};
pub use launcher::{ProcessLauncher, RecordingLauncher};
pub use loads::extract_loads;
pub use results::{get_efficiency, get_su2_results, get_wetted_area};
pub use runner::{run_fsi, run_multi, run_single, MultiRunOptions};
