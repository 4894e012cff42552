//! Case directory discovery.

use std::path::{Path, PathBuf};

use crate::constants::{
    CASE_DIR_MARKER, CONFIG_CFD, CONFIG_DEF, CONFIG_DEF_ROT, CONFIG_DEF_ROT_SYM,
};
use crate::error::Su2Error;

/// List the case directories of a working directory, sorted by name.
pub fn list_case_dirs(wkdir: &Path) -> Result<Vec<PathBuf>, Su2Error> {
    let entries = std::fs::read_dir(wkdir).map_err(|e| Su2Error::io(wkdir, e))?;
    let mut cases = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Su2Error::io(wkdir, e))?;
        let path = entry.path();
        if path.is_dir() && entry.file_name().to_string_lossy().contains(CASE_DIR_MARKER) {
            cases.push(path);
        }
    }
    if cases.is_empty() {
        return Err(Su2Error::NoCaseFound(wkdir.to_path_buf()));
    }
    cases.sort();
    Ok(cases)
}

/// Configuration files found in one case directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseConfigs {
    pub cfd: Option<PathBuf>,
    pub def: Option<PathBuf>,
    pub def_rot: Option<PathBuf>,
    pub def_rot_sym: Option<PathBuf>,
}

impl CaseConfigs {
    /// Look up the known configuration files by exact name.
    pub fn scan(case_dir: &Path) -> Result<Self, Su2Error> {
        let entries = std::fs::read_dir(case_dir).map_err(|e| Su2Error::io(case_dir, e))?;
        let mut configs = Self::default();
        for entry in entries {
            let entry = entry.map_err(|e| Su2Error::io(case_dir, e))?;
            let slot = match entry.file_name().to_str() {
                Some(CONFIG_CFD) => &mut configs.cfd,
                Some(CONFIG_DEF) => &mut configs.def,
                Some(CONFIG_DEF_ROT) => &mut configs.def_rot,
                Some(CONFIG_DEF_ROT_SYM) => &mut configs.def_rot_sym,
                _ => continue,
            };
            *slot = Some(entry.path());
        }
        Ok(configs)
    }

    /// Deformation configs present, in execution order.
    #[must_use]
    pub fn deformation_configs(&self) -> Vec<&Path> {
        [&self.def, &self.def_rot, &self.def_rot_sym]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect()
    }

    /// The flow configuration, or a `MissingConfig` error.
    pub fn require_cfd(&self, case_dir: &Path) -> Result<&Path, Su2Error> {
        self.cfd.as_deref().ok_or_else(|| Su2Error::MissingConfig {
            name: CONFIG_CFD.to_string(),
            dir: case_dir.to_path_buf(),
        })
    }
}
