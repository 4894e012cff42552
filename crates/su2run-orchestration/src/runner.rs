//! SU2 workflows: single case, multi-case, and fluid-structure interaction.

use std::path::Path;
use std::time::Instant;

use su2run_core::cases::{list_case_dirs, CaseConfigs};
use su2run_core::constants::{CONFIG_CFD, CONFIG_DEF, DEFORMED_MESH_FILENAME};
use su2run_core::error::Su2Error;
use su2run_core::progress::CancellationToken;
use su2run_core::settings::FsiSettings;
use su2run_core::su2_config::Su2Config;
use su2run_core::tools::SolverTool;
use su2run_core::workdir::ensure_wkdir;

use crate::interfaces::{CaseOutcome, ProgressReporter, SolverLauncher};
use crate::loads::extract_loads;

/// Options of a multi-case run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiRunOptions {
    /// Run `SU2_SOL` after `SU2_CFD` in every case. Only needed when surface
    /// or volume flow files are wanted; `SU2_CFD` already writes the forces
    /// breakdown.
    pub run_sol: bool,
}

/// Run `SU2_CFD` then `SU2_SOL` on one configuration.
pub fn run_single(
    launcher: &dyn SolverLauncher,
    config_path: &Path,
    wkdir: &Path,
) -> Result<(), Su2Error> {
    ensure_wkdir(wkdir)?;
    if !config_path.is_file() {
        return Err(Su2Error::MissingFile(config_path.to_path_buf()));
    }
    launcher.launch(SolverTool::Cfd, config_path, wkdir)?;
    launcher.launch(SolverTool::Sol, config_path, wkdir)
}

/// Run every `Case*` directory of a working directory.
///
/// In each case, every deformation config present runs through `SU2_DEF`
/// before `SU2_CFD`. `ConfigCFD.cfg` is required up front: a case without it
/// stops the run before its `SU2_DEF` runs, so no mesh is deformed for a case
/// that cannot be solved.
///
/// The reporter is completed whether the run succeeds or not.
pub fn run_multi(
    launcher: &dyn SolverLauncher,
    wkdir: &Path,
    opts: &MultiRunOptions,
    reporter: &dyn ProgressReporter,
    cancel: &CancellationToken,
) -> Result<Vec<CaseOutcome>, Su2Error> {
    let result = run_cases(launcher, wkdir, opts, reporter, cancel);
    reporter.complete();
    result
}

fn run_cases(
    launcher: &dyn SolverLauncher,
    wkdir: &Path,
    opts: &MultiRunOptions,
    reporter: &dyn ProgressReporter,
    cancel: &CancellationToken,
) -> Result<Vec<CaseOutcome>, Su2Error> {
    ensure_wkdir(wkdir)?;
    let case_dirs = list_case_dirs(wkdir)?;
    let total = case_dirs.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, case_dir) in case_dirs.iter().enumerate() {
        cancel.check_cancelled()?;

        let name = case_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        reporter.case_started(index, total, &name);
        tracing::info!("running case {name} ({}/{total})", index + 1);

        let configs = CaseConfigs::scan(case_dir)?;
        let cfd = configs.require_cfd(case_dir)?;

        let start = Instant::now();
        let mut tools = Vec::new();
        for def in configs.deformation_configs() {
            launcher.launch(SolverTool::Def, def, case_dir)?;
            tools.push(SolverTool::Def);
        }
        launcher.launch(SolverTool::Cfd, cfd, case_dir)?;
        tools.push(SolverTool::Cfd);
        if opts.run_sol {
            launcher.launch(SolverTool::Sol, cfd, case_dir)?;
            tools.push(SolverTool::Sol);
        }

        let outcome = CaseOutcome {
            name,
            tools,
            duration: start.elapsed(),
        };
        reporter.case_finished(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Deform the mesh from a structural displacement file, run the flow, and
/// export the surface loads for the structural model.
///
/// Writes `ConfigDEF.cfg` and `ConfigCFD.cfg` derived from `config_path`
/// into `wkdir`. Returns the number of load points written.
pub fn run_fsi(
    launcher: &dyn SolverLauncher,
    config_path: &Path,
    wkdir: &Path,
    fsi: &FsiSettings,
) -> Result<usize, Su2Error> {
    ensure_wkdir(wkdir)?;
    let displacement = wkdir.join(&fsi.displacement_file);
    if !displacement.is_file() {
        return Err(Su2Error::MissingFile(displacement));
    }

    let base = Su2Config::read(config_path)?;

    let mut cfg_def = base.clone();
    cfg_def.set("DV_KIND", "SURFACE_FILE");
    cfg_def.set("DV_MARKER", fsi.marker.as_str());
    cfg_def.set("DV_FILENAME", fsi.displacement_file.as_str());
    cfg_def.set("DV_PARAM", ["WING", "0", "0", "1", "0.0", "0.0", "1.0"]);
    cfg_def.set("DV_VALUE", fsi.dv_value);
    cfg_def.set("MESH_OUT_FILENAME", DEFORMED_MESH_FILENAME);
    let config_def_path = wkdir.join(CONFIG_DEF);
    cfg_def.write(&config_def_path)?;

    let mut cfg_cfd = base;
    cfg_cfd.set("MESH_FILENAME", DEFORMED_MESH_FILENAME);
    let config_cfd_path = wkdir.join(CONFIG_CFD);
    cfg_cfd.write(&config_cfd_path)?;

    launcher.launch(SolverTool::Def, &config_def_path, wkdir)?;
    launcher.launch(SolverTool::Cfd, &config_cfd_path, wkdir)?;
    launcher.launch(SolverTool::Sol, &config_cfd_path, wkdir)?;

    extract_loads(wkdir)
}
