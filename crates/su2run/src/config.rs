//! Application configuration from CLI flags and environment.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use su2run_core::constants::{CONFIG_CFD, SU2_RUN_ENV};

/// SU2Run: run SU2 CFD calculations from aircraft-design settings.
///
/// Without a subcommand, generates the case directories, runs every case,
/// and extracts the aerodynamic coefficients.
#[derive(Parser, Debug)]
#[command(name = "su2run", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Workflow>,

    /// Run settings file (JSON).
    #[arg(
        short,
        long,
        default_value = "settings.json",
        env = "SU2RUN_SETTINGS",
        global = true
    )]
    pub input: PathBuf,

    /// Output settings file. Defaults to the input file.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Directory holding the SU2 executables.
    #[arg(long, env = SU2_RUN_ENV, global = true)]
    pub solver_dir: Option<PathBuf>,

    /// Number of MPI processes (overrides the settings).
    #[arg(short, long, global = true)]
    pub nb_proc: Option<u32>,

    /// Parent directory of newly created working directories.
    #[arg(long, default_value = "WKDIR", global = true)]
    pub wkdir_base: PathBuf,

    /// Write extracted results to this JSON file.
    #[arg(long, global = true)]
    pub json: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output coefficients).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Workflow to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Workflow {
    /// Generate the case directories from the settings.
    Config,

    /// Run SU2_CFD then SU2_SOL on one configuration.
    Single {
        /// Working directory.
        wkdir: PathBuf,
        /// Configuration file, relative to the working directory.
        #[arg(long, default_value = CONFIG_CFD)]
        config: PathBuf,
    },

    /// Run every Case* directory of a working directory.
    Multi {
        /// Working directory.
        wkdir: PathBuf,
        /// Also run SU2_SOL after SU2_CFD in each case.
        #[arg(long)]
        with_sol: bool,
    },

    /// Deform the mesh from structural displacements, run, and export loads.
    Fsi {
        /// Working directory.
        wkdir: PathBuf,
        /// Configuration file, relative to the working directory.
        #[arg(long, default_value = CONFIG_CFD)]
        config: PathBuf,
    },

    /// Extract aerodynamic coefficients from a working directory.
    Results {
        /// Working directory.
        wkdir: PathBuf,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Settings file receiving the working directory and results.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}
