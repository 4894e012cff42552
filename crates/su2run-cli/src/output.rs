//! CLI output formatting.

use std::path::Path;
use std::time::Duration;

use su2run_core::error::Su2Error;
use su2run_core::settings::AeroResult;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else if secs < 3600.0 {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:02.0}s")
    } else {
        let hours = (secs / 3600.0).floor() as u64;
        let mins = ((secs - hours as f64 * 3600.0) / 60.0).floor() as u64;
        format!("{hours}h{mins:02}m")
    }
}

/// Format an optional coefficient, `-` when absent.
#[must_use]
pub fn format_coefficient(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

/// Write the aerodynamic results as a JSON array.
pub fn write_results_json(path: &Path, results: &[AeroResult]) -> Result<(), Su2Error> {
    let content =
        serde_json::to_string_pretty(results).map_err(|e| Su2Error::Settings(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| Su2Error::io(path, e))
}
