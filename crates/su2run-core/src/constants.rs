//! File names and defaults used across the SU2 workflows.

/// Main flow-solver configuration file of a case.
pub const CONFIG_CFD: &str = "ConfigCFD.cfg";

/// Mesh deformation configuration file.
pub const CONFIG_DEF: &str = "ConfigDEF.cfg";

/// Mesh rotation configuration file.
pub const CONFIG_DEF_ROT: &str = "ConfigDEF_rot.cfg";

/// Symmetric mesh rotation configuration file.
pub const CONFIG_DEF_ROT_SYM: &str = "ConfigDEF_rot_sym.cfg";

/// Substring identifying a case directory in a working directory.
pub const CASE_DIR_MARKER: &str = "Case";

/// Mesh file name inside a working directory.
pub const MESH_FILENAME: &str = "mesh.su2";

/// Mesh written by `SU2_DEF`.
pub const DEFORMED_MESH_FILENAME: &str = "mesh_out.su2";

/// Default displacement file given by the structural model.
pub const DEFAULT_DISPLACEMENT_FILE: &str = "disp.dat";

/// Default deformed surface marker for FSI runs.
pub const DEFAULT_FSI_MARKER: &str = "Wing";

/// Default far-field marker of generated meshes.
pub const DEFAULT_FARFIELD_MARKER: &str = "Farfield";

/// Default design variable value for FSI surface deformation.
pub const DEFAULT_DV_VALUE: f64 = 0.01;

/// Force coefficient summary written by `SU2_CFD`.
pub const FORCES_BREAKDOWN: &str = "forces_breakdown.dat";

/// Surface solution written by `SU2_SOL`.
pub const SURFACE_FLOW: &str = "surface_flow.csv";

/// Load file handed to the structural model.
pub const LOADS_FILE: &str = "loads.csv";

/// Environment variable pointing to the SU2 binaries directory.
pub const SU2_RUN_ENV: &str = "SU2_RUN";

/// Default number of solver iterations.
pub const DEFAULT_MAX_ITER: u32 = 200;

/// Default rotation rate (rad/s) for damping derivative cases.
pub const DEFAULT_ROTATION_RATE: f64 = 0.077;

/// Log file name for a solver executable.
#[must_use]
pub fn logfile_name(tool: &str) -> String {
    format!("logfile{tool}.log")
}

/// Exit codes of the `su2run` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A solver failed without reporting an exit code.
    pub const ERROR_SOLVER: i32 = 2;
    /// Invalid configuration or settings.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logfile_names() {
        assert_eq!(logfile_name("SU2_CFD"), "logfileSU2_CFD.log");
        assert_eq!(logfile_name("SU2_DEF"), "logfileSU2_DEF.log");
    }

    #[test]
    fn deformation_configs_share_prefix() {
        assert!(CONFIG_DEF_ROT.starts_with("ConfigDEF"));
        assert!(CONFIG_DEF_ROT_SYM.starts_with("ConfigDEF"));
    }
}
