//! Extraction of aerodynamic coefficients from SU2 outputs.

use std::path::Path;

use su2run_core::cases::list_case_dirs;
use su2run_core::constants::{logfile_name, FORCES_BREAKDOWN};
use su2run_core::error::Su2Error;
use su2run_core::settings::{AeroResult, RunSettings};
use su2run_core::tools::SolverTool;

/// Coefficients read from a `forces_breakdown.dat` file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForceCoefficients {
    pub mach: Option<f64>,
    pub aoa: Option<f64>,
    pub aos: Option<f64>,
    pub cl: Option<f64>,
    pub cd: Option<f64>,
    pub cs: Option<f64>,
    /// CL/CD as reported by the solver.
    pub cl_cd: Option<f64>,
    pub cmx: Option<f64>,
    pub cmy: Option<f64>,
    pub cmz: Option<f64>,
}

/// Parse the content of a `forces_breakdown.dat` file.
///
/// Unknown lines are ignored; missing values stay `None`.
#[must_use]
pub fn parse_forces_breakdown(text: &str) -> ForceCoefficients {
    let mut fc = ForceCoefficients::default();
    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Mach number:") {
            fc.mach = first_number(rest);
        }
        if let Some((_, rest)) = line.split_once("Angle of attack (AoA):") {
            fc.aoa = first_number(rest);
        }
        if let Some((_, rest)) = line.split_once("angle of sideslip (AoS):") {
            fc.aos = first_number(rest);
        }

        let Some(rest) = line.strip_prefix("Total ") else {
            continue;
        };
        let Some((name, value)) = rest.split_once(':') else {
            continue;
        };
        let slot = match name.trim() {
            "CL" => &mut fc.cl,
            "CD" => &mut fc.cd,
            "CSF" => &mut fc.cs,
            "CL/CD" => &mut fc.cl_cd,
            "CMx" => &mut fc.cmx,
            "CMy" => &mut fc.cmy,
            "CMz" => &mut fc.cmz,
            _ => continue,
        };
        *slot = first_number(value);
    }
    fc
}

/// Aerodynamic efficiency CL/CD.
///
/// Prefers the value reported by the solver; otherwise computes it. `None`
/// when CD is zero or a coefficient is missing.
#[must_use]
pub fn get_efficiency(fc: &ForceCoefficients) -> Option<f64> {
    if fc.cl_cd.is_some() {
        return fc.cl_cd;
    }
    match (fc.cl, fc.cd) {
        (Some(cl), Some(cd)) if cd != 0.0 => Some(cl / cd),
        _ => None,
    }
}

/// Wetted area reported in the `SU2_CFD` log of a case directory.
pub fn get_wetted_area(case_dir: &Path) -> Result<Option<f64>, Su2Error> {
    let log_path = case_dir.join(logfile_name(SolverTool::Cfd.as_str()));
    if !log_path.is_file() {
        tracing::warn!("no SU2_CFD log in {}, wetted area unknown", case_dir.display());
        return Ok(None);
    }
    let text = std::fs::read_to_string(&log_path).map_err(|e| Su2Error::io(&log_path, e))?;
    Ok(text
        .lines()
        .filter_map(|line| line.split_once("Wetted area ="))
        .find_map(|(_, rest)| first_number(rest)))
}

/// Read the results of every case of `wkdir` and store them in the settings.
///
/// Cases without a forces breakdown are skipped with a warning.
pub fn collect_case_results(wkdir: &Path) -> Result<Vec<AeroResult>, Su2Error> {
    let mut results = Vec::new();
    for case_dir in list_case_dirs(wkdir)? {
        let case = case_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let forces_path = case_dir.join(FORCES_BREAKDOWN);
        if !forces_path.is_file() {
            tracing::warn!("no {FORCES_BREAKDOWN} in case {case}, skipped");
            continue;
        }
        let text =
            std::fs::read_to_string(&forces_path).map_err(|e| Su2Error::io(&forces_path, e))?;
        let fc = parse_forces_breakdown(&text);
        results.push(AeroResult {
            case,
            mach: fc.mach,
            aoa: fc.aoa,
            aos: fc.aos,
            cl: fc.cl,
            cd: fc.cd,
            cs: fc.cs,
            cmx: fc.cmx,
            cmy: fc.cmy,
            cmz: fc.cmz,
            efficiency: get_efficiency(&fc),
            wetted_area: get_wetted_area(&case_dir)?,
        });
    }
    Ok(results)
}

/// Extract the results of `wkdir`, write them to `settings_out`, and return them.
pub fn get_su2_results(
    settings_in: &Path,
    settings_out: &Path,
    wkdir: &Path,
) -> Result<Vec<AeroResult>, Su2Error> {
    let mut settings = RunSettings::load(settings_in)?;
    let results = collect_case_results(wkdir)?;
    tracing::info!("{} case results extracted from {}", results.len(), wkdir.display());
    settings.aero_results.clone_from(&results);
    settings.save(settings_out)?;
    Ok(results)
}

/// First numeric token of `s`, ignoring trailing punctuation.
fn first_number(s: &str) -> Option<f64> {
    s.split_whitespace()
        .next()
        .map(|tok| tok.trim_end_matches(['.', ',', '|']))
        .and_then(|tok| tok.parse().ok())
}
