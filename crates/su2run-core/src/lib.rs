//! # su2run-core
//!
//! Building blocks for driving the SU2 CFD suite: the SU2 configuration
//! format, run settings, working directories, case discovery, and the
//! standard atmosphere used to set free-stream conditions.

pub mod atmosphere;
pub mod cases;
pub mod constants;
pub mod error;
pub mod progress;
pub mod settings;
pub mod su2_config;
pub mod tools;
pub mod workdir;

// Re-exports
pub use cases::{list_case_dirs, CaseConfigs};
pub use constants::exit_codes;
pub use error::Su2Error;
pub use progress::CancellationToken;
pub use settings::{AeroResult, FlightCase, RunSettings, Su2Settings};
pub use su2_config::{ConfigValue, Su2Config};
pub use tools::SolverTool;
