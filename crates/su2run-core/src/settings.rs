//! Aircraft-design run settings (JSON).
//!
//! Holds the aerodynamic inputs the SU2 workflows need and receives the
//! working directory path and the aerodynamic results in return.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DISPLACEMENT_FILE, DEFAULT_DV_VALUE, DEFAULT_FARFIELD_MARKER, DEFAULT_FSI_MARKER,
    DEFAULT_MAX_ITER, DEFAULT_ROTATION_RATE,
};
use crate::error::Su2Error;

/// Top-level settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub files: FilesSettings,
    pub su2: Su2Settings,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aero_results: Vec<AeroResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesSettings {
    /// Active working directory of this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkdir_path: Option<PathBuf>,
    /// Parent directory of the run directories of an optimisation or DoE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_wkdir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Su2Settings {
    pub nb_proc: u32,
    pub mesh_path: Option<PathBuf>,
    /// Template configuration; built-in defaults are used when absent.
    pub base_config: Option<PathBuf>,
    pub max_iter: u32,
    /// Wall markers of the mesh, used when no template is given.
    pub wall_markers: Vec<String>,
    pub farfield_marker: String,
    pub reference: ReferenceValues,
    pub aero_map: Vec<FlightCase>,
    pub damping_derivatives: bool,
    /// Rotation rate (rad/s) of the damping derivative cases.
    pub rotation_rate: f64,
    pub fixed_cl: Option<f64>,
    pub fsi: FsiSettings,
    /// Also run `SU2_SOL` after `SU2_CFD` in multi-case runs.
    pub run_sol_in_multi: bool,
}

impl Default for Su2Settings {
    fn default() -> Self {
        Self {
            nb_proc: 1,
            mesh_path: None,
            base_config: None,
            max_iter: DEFAULT_MAX_ITER,
            wall_markers: Vec::new(),
            farfield_marker: DEFAULT_FARFIELD_MARKER.to_string(),
            reference: ReferenceValues::default(),
            aero_map: Vec::new(),
            damping_derivatives: false,
            rotation_rate: DEFAULT_ROTATION_RATE,
            fixed_cl: None,
            fsi: FsiSettings::default(),
            run_sol_in_multi: false,
        }
    }
}

/// Reference length, area, and moment origin for coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceValues {
    pub length: f64,
    pub area: f64,
    pub origin: [f64; 3],
}

impl Default for ReferenceValues {
    fn default() -> Self {
        Self {
            length: 1.0,
            area: 1.0,
            origin: [0.0; 3],
        }
    }
}

/// One flight condition of the aero map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightCase {
    /// Altitude in metres.
    pub altitude: f64,
    pub mach: f64,
    /// Angle of attack in degrees.
    pub aoa: f64,
    /// Angle of sideslip in degrees.
    #[serde(default)]
    pub aos: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsiSettings {
    pub marker: String,
    pub displacement_file: String,
    pub dv_value: f64,
}

impl Default for FsiSettings {
    fn default() -> Self {
        Self {
            marker: DEFAULT_FSI_MARKER.to_string(),
            displacement_file: DEFAULT_DISPLACEMENT_FILE.to_string(),
            dv_value: DEFAULT_DV_VALUE,
        }
    }
}

/// Aerodynamic coefficients extracted from one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroResult {
    pub case: String,
    pub mach: Option<f64>,
    pub aoa: Option<f64>,
    pub aos: Option<f64>,
    pub cl: Option<f64>,
    pub cd: Option<f64>,
    pub cs: Option<f64>,
    pub cmx: Option<f64>,
    pub cmy: Option<f64>,
    pub cmz: Option<f64>,
    pub efficiency: Option<f64>,
    pub wetted_area: Option<f64>,
}

impl RunSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Su2Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Su2Error::io(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| Su2Error::Settings(format!("{}: {e}", path.display())))
    }

    /// Save settings as pretty JSON, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), Su2Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Su2Error::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Su2Error::Settings(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| Su2Error::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let settings: RunSettings = serde_json::from_str(
            r#"{ "su2": { "aero_map": [ { "altitude": 1000.0, "mach": 0.3, "aoa": 2.0 } ] } }"#,
        )
        .unwrap();
        assert_eq!(settings.su2.nb_proc, 1);
        assert_eq!(settings.su2.max_iter, DEFAULT_MAX_ITER);
        assert_eq!(settings.su2.fsi.marker, "Wing");
        assert_eq!(settings.su2.aero_map.len(), 1);
        assert!(settings.su2.aero_map[0].aos.abs() < f64::EPSILON);
        assert!(settings.files.wkdir_path.is_none());
    }

    #[test]
    fn empty_document_is_default() {
        let settings: RunSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, RunSettings::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out").join("settings.json");
        let mut settings = RunSettings::default();
        settings.files.wkdir_path = Some(dir.path().to_path_buf());
        settings.su2.fixed_cl = Some(0.5);
        settings.save(&path).unwrap();
        assert_eq!(RunSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn invalid_json_is_settings_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            RunSettings::load(&path),
            Err(Su2Error::Settings(_))
        ));
    }

    #[test]
    fn results_omitted_when_empty() {
        let json = serde_json::to_string(&RunSettings::default()).unwrap();
        assert!(!json.contains("aero_results"));
    }
}
