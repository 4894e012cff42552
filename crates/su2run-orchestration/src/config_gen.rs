//! Generation of the case directory tree from the run settings.

use std::path::{Path, PathBuf};

use su2run_core::atmosphere::isa;
use su2run_core::constants::{CONFIG_CFD, MESH_FILENAME};
use su2run_core::error::Su2Error;
use su2run_core::settings::{FlightCase, RunSettings, Su2Settings};
use su2run_core::su2_config::Su2Config;
use su2run_core::workdir::get_wkdir_or_create_new;

/// Working directory and case directories created by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRun {
    pub wkdir: PathBuf,
    pub cases: Vec<PathBuf>,
}

/// Load `settings_in`, create (or reuse) the working directory under
/// `wkdir_base`, write one case directory per flight condition, and save the
/// updated settings to `settings_out`.
pub fn generate_su2_config(
    settings_in: &Path,
    settings_out: &Path,
    wkdir_base: &Path,
) -> Result<GeneratedRun, Su2Error> {
    let mut settings = RunSettings::load(settings_in)?;
    let wkdir = get_wkdir_or_create_new(&mut settings, wkdir_base)?;
    let cases = write_case_configs(&settings.su2, &wkdir)?;
    settings.save(settings_out)?;
    tracing::info!("{} cases generated in {}", cases.len(), wkdir.display());
    Ok(GeneratedRun { wkdir, cases })
}

/// Copy the mesh into `wkdir` and write every case directory.
pub fn write_case_configs(su2: &Su2Settings, wkdir: &Path) -> Result<Vec<PathBuf>, Su2Error> {
    if su2.aero_map.is_empty() {
        return Err(Su2Error::Settings("the aero map has no flight case".into()));
    }

    let mesh = su2
        .mesh_path
        .as_deref()
        .ok_or_else(|| Su2Error::Settings("no mesh path given".into()))?;
    if !mesh.is_file() {
        return Err(Su2Error::MissingFile(mesh.to_path_buf()));
    }
    let mesh_dest = wkdir.join(MESH_FILENAME);
    std::fs::copy(mesh, &mesh_dest).map_err(|e| Su2Error::io(&mesh_dest, e))?;

    let template = match &su2.base_config {
        Some(path) => Su2Config::read(path)?,
        None => default_config(su2)?,
    };

    let mut cases = Vec::new();
    for (index, case) in su2.aero_map.iter().enumerate() {
        let name = case_dir_name(index, case);
        let cfg = case_config(&template, su2, case)?;
        cases.push(write_case(wkdir, &name, &cfg)?);

        if su2.damping_derivatives {
            for (suffix, axis) in [("dp", 0), ("dq", 1), ("dr", 2)] {
                let mut rates = [0.0; 3];
                rates[axis] = su2.rotation_rate;
                let mut rot = cfg.clone();
                rot.set("GRID_MOVEMENT", "ROTATING_FRAME");
                rot.set("MOTION_ORIGIN", spaced(&su2.reference.origin));
                rot.set("ROTATION_RATE", spaced(&rates));
                cases.push(write_case(wkdir, &format!("{name}_{suffix}"), &rot)?);
            }
        }
    }
    Ok(cases)
}

/// Case directory name, e.g. `Case00_alt1000_mach0.30_aoa2.0_aos0.0`.
#[must_use]
pub fn case_dir_name(index: usize, case: &FlightCase) -> String {
    format!(
        "Case{index:02}_alt{}_mach{:.2}_aoa{:.1}_aos{:.1}",
        case.altitude, case.mach, case.aoa, case.aos
    )
}

/// Built-in Euler configuration used when the settings give no template.
pub fn default_config(su2: &Su2Settings) -> Result<Su2Config, Su2Error> {
    if su2.wall_markers.is_empty() {
        return Err(Su2Error::Settings(
            "wall_markers must be set when no base_config is given".into(),
        ));
    }
    let walls = su2.wall_markers.clone();

    let mut cfg = Su2Config::new();
    cfg.set("SOLVER", "EULER");
    cfg.set("MATH_PROBLEM", "DIRECT");
    cfg.set("RESTART_SOL", "NO");
    cfg.set("MARKER_EULER", walls.clone());
    cfg.set("MARKER_FAR", su2.farfield_marker.as_str());
    cfg.set("MARKER_PLOTTING", walls.clone());
    cfg.set("MARKER_MONITORING", walls);
    cfg.set("NUM_METHOD_GRAD", "WEIGHTED_LEAST_SQUARES");
    cfg.set("CFL_NUMBER", 1.0);
    cfg.set("CONV_NUM_METHOD_FLOW", "JST");
    cfg.set("TIME_DISCRE_FLOW", "EULER_IMPLICIT");
    cfg.set("CONV_RESIDUAL_MINVAL", -8_i64);
    cfg.set("MESH_FORMAT", "SU2");
    Ok(cfg)
}

fn case_config(
    template: &Su2Config,
    su2: &Su2Settings,
    case: &FlightCase,
) -> Result<Su2Config, Su2Error> {
    let atm = isa(case.altitude)?;
    let mut cfg = template.clone();
    cfg.set("MESH_FILENAME", format!("../{MESH_FILENAME}"));
    cfg.set("MACH_NUMBER", case.mach);
    cfg.set("AOA", case.aoa);
    cfg.set("SIDESLIP_ANGLE", case.aos);
    cfg.set("FREESTREAM_PRESSURE", atm.pressure);
    cfg.set("FREESTREAM_TEMPERATURE", atm.temperature);
    cfg.set("REF_LENGTH", su2.reference.length);
    cfg.set("REF_AREA", su2.reference.area);
    cfg.set("REF_ORIGIN_MOMENT_X", su2.reference.origin[0]);
    cfg.set("REF_ORIGIN_MOMENT_Y", su2.reference.origin[1]);
    cfg.set("REF_ORIGIN_MOMENT_Z", su2.reference.origin[2]);
    cfg.set("ITER", su2.max_iter);
    if let Some(target) = su2.fixed_cl {
        cfg.set("FIXED_CL_MODE", "YES");
        cfg.set("TARGET_CL", target);
    }
    Ok(cfg)
}

fn write_case(wkdir: &Path, name: &str, cfg: &Su2Config) -> Result<PathBuf, Su2Error> {
    let dir = wkdir.join(name);
    std::fs::create_dir_all(&dir).map_err(|e| Su2Error::io(&dir, e))?;
    cfg.write(&dir.join(CONFIG_CFD))?;
    Ok(dir)
}

fn spaced(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use su2run_core::su2_config::ConfigValue;

    fn settings_with_mesh(dir: &Path) -> Su2Settings {
        let mesh = dir.join("aircraft.su2");
        std::fs::write(&mesh, "NDIME= 3\n").unwrap();
        Su2Settings {
            mesh_path: Some(mesh),
            wall_markers: vec!["Wing".into(), "Fuselage".into()],
            aero_map: vec![
                FlightCase {
                    altitude: 0.0,
                    mach: 0.3,
                    aoa: 2.0,
                    aos: 0.0,
                },
                FlightCase {
                    altitude: 11_000.0,
                    mach: 0.78,
                    aoa: 1.5,
                    aos: 0.0,
                },
            ],
            ..Su2Settings::default()
        }
    }

    #[test]
    fn case_names() {
        let case = FlightCase {
            altitude: 1000.0,
            mach: 0.3,
            aoa: 2.0,
            aos: 0.0,
        };
        assert_eq!(case_dir_name(3, &case), "Case03_alt1000_mach0.30_aoa2.0_aos0.0");
    }

    #[test]
    fn writes_one_dir_per_case() {
        let src = tempfile::TempDir::new().unwrap();
        let wkdir = tempfile::TempDir::new().unwrap();
        let su2 = settings_with_mesh(src.path());
        let cases = write_case_configs(&su2, wkdir.path()).unwrap();
        assert_eq!(cases.len(), 2);
        assert!(wkdir.path().join(MESH_FILENAME).is_file());

        let cfg = Su2Config::read(&cases[1].join(CONFIG_CFD)).unwrap();
        assert_eq!(cfg.get("MACH_NUMBER").and_then(ConfigValue::as_f64), Some(0.78));
        assert_eq!(cfg.get("MESH_FILENAME"), Some(&ConfigValue::from("../mesh.su2")));
        let t = cfg
            .get("FREESTREAM_TEMPERATURE")
            .and_then(ConfigValue::as_f64)
            .unwrap();
        assert!((t - 216.65).abs() < 1e-6);
        assert_eq!(
            cfg.get("MARKER_EULER").and_then(ConfigValue::as_list).map(<[String]>::len),
            Some(2)
        );
        assert!(!cfg.contains_key("TARGET_CL"));
    }

    #[test]
    fn single_wall_marker_reads_back_as_list() {
        let src = tempfile::TempDir::new().unwrap();
        let wkdir = tempfile::TempDir::new().unwrap();
        let mut su2 = settings_with_mesh(src.path());
        su2.wall_markers = vec!["Wing".into()];
        let cases = write_case_configs(&su2, wkdir.path()).unwrap();
        let cfg = Su2Config::read(&cases[0].join(CONFIG_CFD)).unwrap();
        for key in ["MARKER_EULER", "MARKER_PLOTTING", "MARKER_MONITORING"] {
            assert_eq!(
                cfg.get(key).and_then(ConfigValue::as_list),
                Some(&["Wing".to_string()][..]),
                "{key}"
            );
        }
    }

    #[test]
    fn fixed_cl_sets_target() {
        let src = tempfile::TempDir::new().unwrap();
        let wkdir = tempfile::TempDir::new().unwrap();
        let mut su2 = settings_with_mesh(src.path());
        su2.fixed_cl = Some(0.45);
        let cases = write_case_configs(&su2, wkdir.path()).unwrap();
        let cfg = Su2Config::read(&cases[0].join(CONFIG_CFD)).unwrap();
        assert_eq!(cfg.get("FIXED_CL_MODE"), Some(&ConfigValue::from("YES")));
        assert_eq!(cfg.get("TARGET_CL").and_then(ConfigValue::as_f64), Some(0.45));
    }

    #[test]
    fn damping_derivatives_add_rotating_cases() {
        let src = tempfile::TempDir::new().unwrap();
        let wkdir = tempfile::TempDir::new().unwrap();
        let mut su2 = settings_with_mesh(src.path());
        su2.damping_derivatives = true;
        su2.rotation_rate = 0.5;
        let cases = write_case_configs(&su2, wkdir.path()).unwrap();
        assert_eq!(cases.len(), 8);
        assert!(cases[2].to_string_lossy().ends_with("_dq"));
        let cfg = Su2Config::read(&cases[2].join(CONFIG_CFD)).unwrap();
        assert_eq!(
            cfg.get("GRID_MOVEMENT"),
            Some(&ConfigValue::from("ROTATING_FRAME"))
        );
        assert_eq!(cfg.get("ROTATION_RATE"), Some(&ConfigValue::from("0 0.5 0")));
    }

    #[test]
    fn template_config_is_used() {
        let src = tempfile::TempDir::new().unwrap();
        let wkdir = tempfile::TempDir::new().unwrap();
        let template = src.path().join("template.cfg");
        std::fs::write(&template, "SOLVER= RANS\nKIND_TURB_MODEL= SA\n").unwrap();
        let mut su2 = settings_with_mesh(src.path());
        su2.base_config = Some(template);
        su2.wall_markers.clear();
        let cases = write_case_configs(&su2, wkdir.path()).unwrap();
        let cfg = Su2Config::read(&cases[0].join(CONFIG_CFD)).unwrap();
        assert_eq!(cfg.get("SOLVER"), Some(&ConfigValue::from("RANS")));
        assert_eq!(cfg.iter().next().map(|(k, _)| k), Some("SOLVER"));
    }

    #[test]
    fn empty_aero_map_rejected() {
        let wkdir = tempfile::TempDir::new().unwrap();
        let err = write_case_configs(&Su2Settings::default(), wkdir.path()).unwrap_err();
        assert!(matches!(err, Su2Error::Settings(_)));
    }

    #[test]
    fn missing_markers_rejected_without_template() {
        let src = tempfile::TempDir::new().unwrap();
        let wkdir = tempfile::TempDir::new().unwrap();
        let mut su2 = settings_with_mesh(src.path());
        su2.wall_markers.clear();
        assert!(write_case_configs(&su2, wkdir.path()).is_err());
    }

    #[test]
    fn generate_records_wkdir() {
        let src = tempfile::TempDir::new().unwrap();
        let base = tempfile::TempDir::new().unwrap();
        let settings = RunSettings {
            su2: settings_with_mesh(src.path()),
            ..RunSettings::default()
        };
        let settings_in = src.path().join("in.json");
        let settings_out = src.path().join("out.json");
        settings.save(&settings_in).unwrap();

        let run = generate_su2_config(&settings_in, &settings_out, base.path()).unwrap();
        assert_eq!(run.cases.len(), 2);
        assert!(run.wkdir.starts_with(base.path()));
        let saved = RunSettings::load(&settings_out).unwrap();
        assert_eq!(saved.files.wkdir_path, Some(run.wkdir));
    }
}
