//! Application entry point and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use su2run_cli::output::write_results_json;
use su2run_cli::presenter::{CLIProgressReporter, CLIResultPresenter};
use su2run_core::error::Su2Error;
use su2run_core::progress::CancellationToken;
use su2run_core::settings::{AeroResult, RunSettings};
use su2run_orchestration::config_gen::generate_su2_config;
use su2run_orchestration::interfaces::ResultPresenter;
use su2run_orchestration::launcher::ProcessLauncher;
use su2run_orchestration::results::get_su2_results;
use su2run_orchestration::runner::{run_fsi, run_multi, run_single, MultiRunOptions};

use crate::config::{AppConfig, Workflow};
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        su2run_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    tracing::info!("----- Start of {} -----", full_version());

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    let result = match &config.command {
        Some(Workflow::Config) => run_config(config).map(|_| ()),
        Some(Workflow::Single { wkdir, config: cfg }) => run_single_case(config, wkdir, cfg),
        Some(Workflow::Multi { wkdir, with_sol }) => {
            run_multi_case(config, wkdir, *with_sol, &cancel)
        }
        Some(Workflow::Fsi { wkdir, config: cfg }) => run_fsi_case(config, wkdir, cfg),
        Some(Workflow::Results { wkdir }) => run_results(config, wkdir),
        None => run_full(config, &cancel),
    };

    // A solver interrupted by Ctrl+C exits with its own failure status.
    let result = result.map_err(|e| {
        if cancel.is_cancelled() {
            anyhow::Error::new(Su2Error::Cancelled)
        } else {
            e
        }
    });

    tracing::info!("----- End of {} -----", full_version());
    result
}

fn run_config(config: &AppConfig) -> Result<PathBuf> {
    let generated = generate_su2_config(&config.input, config.output_path(), &config.wkdir_base)
        .context("configuration generation failed")?;
    if !config.quiet {
        su2run_cli::ui::print_success(&format!(
            "{} case(s) written to {}",
            generated.cases.len(),
            generated.wkdir.display()
        ));
    }
    Ok(generated.wkdir)
}

fn run_single_case(config: &AppConfig, wkdir: &Path, cfg: &Path) -> Result<()> {
    let settings = load_settings_or_default(&config.input)?;
    let launcher = launcher(config, &settings);
    run_single(&launcher, &wkdir.join(cfg), wkdir).context("single-case run failed")?;
    if !config.quiet {
        su2run_cli::ui::print_success(&format!("SU2 run completed in {}", wkdir.display()));
    }
    Ok(())
}

fn run_multi_case(
    config: &AppConfig,
    wkdir: &Path,
    with_sol: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let settings = load_settings_or_default(&config.input)?;
    let launcher = launcher(config, &settings);
    let opts = MultiRunOptions {
        run_sol: with_sol || settings.su2.run_sol_in_multi,
    };
    let reporter = CLIProgressReporter::new(config.quiet);
    let outcomes =
        run_multi(&launcher, wkdir, &opts, &reporter, cancel).context("multi-case run failed")?;
    CLIResultPresenter::new(config.verbose, config.quiet).present_cases(&outcomes);
    Ok(())
}

fn run_fsi_case(config: &AppConfig, wkdir: &Path, cfg: &Path) -> Result<()> {
    let settings = load_settings_or_default(&config.input)?;
    let launcher = launcher(config, &settings);
    let points = run_fsi(&launcher, &wkdir.join(cfg), wkdir, &settings.su2.fsi)
        .context("FSI run failed")?;
    if !config.quiet {
        su2run_cli::ui::print_success(&format!("{points} load points exported"));
    }
    Ok(())
}

fn run_results(config: &AppConfig, wkdir: &Path) -> Result<()> {
    let results = get_su2_results(&config.input, config.output_path(), wkdir)
        .context("result extraction failed")?;
    present_results(config, &results)
}

fn run_full(config: &AppConfig, cancel: &CancellationToken) -> Result<()> {
    let wkdir = run_config(config)?;
    // The generated settings are the input of the following steps.
    let settings = RunSettings::load(config.output_path())?;
    let launcher = launcher(config, &settings);
    let opts = MultiRunOptions {
        run_sol: settings.su2.run_sol_in_multi,
    };
    let reporter = CLIProgressReporter::new(config.quiet);
    let outcomes =
        run_multi(&launcher, &wkdir, &opts, &reporter, cancel).context("multi-case run failed")?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_cases(&outcomes);

    let results = get_su2_results(config.output_path(), config.output_path(), &wkdir)
        .context("result extraction failed")?;
    present_results(config, &results)
}

fn present_results(config: &AppConfig, results: &[AeroResult]) -> Result<()> {
    CLIResultPresenter::new(config.verbose, config.quiet).present_results(results);
    if let Some(path) = &config.json {
        write_results_json(path, results)?;
    }
    Ok(())
}

fn launcher(config: &AppConfig, settings: &RunSettings) -> ProcessLauncher {
    let nb_proc = config.nb_proc.unwrap_or(settings.su2.nb_proc);
    ProcessLauncher::new(config.solver_dir.clone(), nb_proc)
}

/// Settings are optional for runs on an existing working directory.
fn load_settings_or_default(path: &Path) -> Result<RunSettings> {
    if path.is_file() {
        Ok(RunSettings::load(path)?)
    } else {
        tracing::info!("no settings file at {}, using defaults", path.display());
        Ok(RunSettings::default())
    }
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || {
        cancel.cancel();
    }) {
        tracing::warn!("Ctrl+C handler not installed: {e}");
    }
}
