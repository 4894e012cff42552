//! Error handling and exit codes.

use su2run_core::constants::exit_codes;
use su2run_core::error::Su2Error;

/// Map an application error to the process exit code.
///
/// A failing solver's own exit status is forwarded.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Su2Error>() {
        Some(su2) => su2_exit_code(su2),
        None => exit_codes::ERROR_GENERIC,
    }
}

fn su2_exit_code(err: &Su2Error) -> i32 {
    match err {
        Su2Error::SolverFailed {
            code: Some(code), ..
        } if *code != exit_codes::SUCCESS => *code,
        Su2Error::SolverFailed { .. } => exit_codes::ERROR_SOLVER,
        Su2Error::Cancelled => exit_codes::ERROR_CANCELED,
        Su2Error::Settings(_)
        | Su2Error::Parse { .. }
        | Su2Error::MissingConfig { .. }
        | Su2Error::MissingFile(_)
        | Su2Error::WorkdirMissing(_)
        | Su2Error::NoCaseFound(_) => exit_codes::ERROR_CONFIG,
        Su2Error::Io { .. } | Su2Error::ToolNotInstalled(_) => exit_codes::ERROR_GENERIC,
    }
}
