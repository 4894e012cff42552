//! Solver launchers: the real subprocess launcher and an in-memory recorder.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use parking_lot::Mutex;

use su2run_core::constants::logfile_name;
use su2run_core::error::Su2Error;
use su2run_core::tools::{self, SolverTool};

use crate::interfaces::SolverLauncher;

/// Launches SU2 executables as child processes.
///
/// Output of each run goes to `logfile<TOOL>.log` in the working directory.
pub struct ProcessLauncher {
    solver_dir: Option<PathBuf>,
    nb_proc: u32,
    mpirun: Option<PathBuf>,
}

impl ProcessLauncher {
    /// Create a launcher. `mpirun` is looked up only when `nb_proc > 1`.
    #[must_use]
    pub fn new(solver_dir: Option<PathBuf>, nb_proc: u32) -> Self {
        let nb_proc = nb_proc.max(1);
        let mpirun = if nb_proc > 1 { tools::find_mpirun() } else { None };
        Self {
            solver_dir,
            nb_proc,
            mpirun,
        }
    }

    fn command(&self, exe: &Path) -> Command {
        match &self.mpirun {
            Some(mpirun) if self.nb_proc > 1 => {
                let mut cmd = Command::new(mpirun);
                cmd.arg("-np").arg(self.nb_proc.to_string()).arg(exe);
                cmd
            }
            _ => Command::new(exe),
        }
    }
}

impl SolverLauncher for ProcessLauncher {
    fn launch(&self, tool: SolverTool, config: &Path, wkdir: &Path) -> Result<(), Su2Error> {
        let mut installs = tools::get_install_path(&[tool], self.solver_dir.as_deref())?;
        let exe = installs
            .remove(&tool)
            .ok_or(Su2Error::ToolNotInstalled(tool))?;

        // The child runs inside `wkdir`; relative paths must not move with it.
        let exe = std::path::absolute(&exe).map_err(|e| Su2Error::io(&exe, e))?;
        let config = std::path::absolute(config).map_err(|e| Su2Error::io(config, e))?;

        let log_path = wkdir.join(logfile_name(tool.as_str()));
        let log = File::create(&log_path).map_err(|e| Su2Error::io(&log_path, e))?;
        let log_err = log.try_clone().map_err(|e| Su2Error::io(&log_path, e))?;

        let mut cmd = self.command(&exe);
        cmd.arg(&config)
            .current_dir(wkdir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(log))
            .stderr(Stdio::from(log_err));

        tracing::info!(">>> {tool} Start Time");
        let start = Instant::now();
        let status = cmd.status().map_err(|e| Su2Error::io(&exe, e))?;
        tracing::info!(">>> {tool} End Time ({:.3?})", start.elapsed());

        if status.success() {
            Ok(())
        } else {
            tracing::error!(
                "{tool} exited with {status}, see {}",
                log_path.display()
            );
            Err(Su2Error::SolverFailed {
                tool,
                code: status.code(),
            })
        }
    }
}

/// One recorded launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub tool: SolverTool,
    pub config: PathBuf,
    pub wkdir: PathBuf,
}

type LaunchHook = Box<dyn Fn(&Invocation) -> Result<(), Su2Error> + Send + Sync>;

/// Records launches instead of running anything.
///
/// An optional hook runs on every launch, e.g. to write the files a solver
/// would produce or to simulate a failure.
#[derive(Default)]
pub struct RecordingLauncher {
    calls: Mutex<Vec<Invocation>>,
    hook: Option<LaunchHook>,
}

impl RecordingLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hook<F>(hook: F) -> Self
    where
        F: Fn(&Invocation) -> Result<(), Su2Error> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            hook: Some(Box::new(hook)),
        }
    }

    /// All launches so far, in order.
    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }

    /// The tools launched so far, in order.
    #[must_use]
    pub fn tools(&self) -> Vec<SolverTool> {
        self.calls.lock().iter().map(|c| c.tool).collect()
    }
}

impl SolverLauncher for RecordingLauncher {
    fn launch(&self, tool: SolverTool, config: &Path, wkdir: &Path) -> Result<(), Su2Error> {
        let invocation = Invocation {
            tool,
            config: config.to_path_buf(),
            wkdir: wkdir.to_path_buf(),
        };
        self.calls.lock().push(invocation.clone());
        match &self.hook {
            Some(hook) => hook(&invocation),
            None => Ok(()),
        }
    }
}
