//! End-to-end CLI integration tests.
//!
//! Solver runs use small shell scripts standing in for the SU2 executables.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn su2run() -> Command {
    let mut cmd = Command::cargo_bin("su2run").expect("binary not found");
    cmd.env_remove("SU2_RUN").env_remove("SU2RUN_SETTINGS").env("NO_COLOR", "1");
    cmd
}

#[cfg(unix)]
const FAKE_CFD: &str = r#"#!/bin/sh
cat > forces_breakdown.dat <<'EOF'
Mach number: 0.3.
Angle of attack (AoA): 2 deg, and angle of sideslip (AoS): 0 deg.
Total CL:    0.500000 | Pressure (90.0%): 0.45 | Friction (10.0%): 0.05
Total CD:    0.020000 | Pressure (70.0%): 0.014 | Friction (30.0%): 0.006
Total CMy:  -0.040000 | Pressure: -0.04 | Friction: 0.0
EOF
echo "Wetted area = 10.5 m^2."
"#;

#[cfg(unix)]
fn install_fake_solvers(dir: &Path, cfd_script: &str) {
    use std::os::unix::fs::PermissionsExt;

    for (name, script) in [
        ("SU2_CFD", cfd_script),
        ("SU2_SOL", "#!/bin/sh\nexit 0\n"),
        ("SU2_DEF", "#!/bin/sh\nexit 0\n"),
    ] {
        let path = dir.join(name);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

fn make_case(wkdir: &Path, name: &str) {
    let case = wkdir.join(name);
    std::fs::create_dir_all(&case).unwrap();
    std::fs::write(case.join("ConfigCFD.cfg"), "SOLVER= EULER\nMESH_FILENAME= ../mesh.su2\n")
        .unwrap();
}

#[test]
fn help_flag() {
    su2run()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SU2"));
}

#[test]
fn version_flag() {
    su2run()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("su2run"));
}

#[test]
fn shell_completion_bash() {
    su2run()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("su2run"));
}

#[test]
fn missing_wkdir_is_config_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    su2run()
        .current_dir(tmp.path())
        .args(["multi", "does-not-exist"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn empty_wkdir_has_no_case() {
    let tmp = tempfile::TempDir::new().unwrap();
    su2run()
        .current_dir(tmp.path())
        .args(["multi", "."])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no case directory"));
}

#[test]
fn config_requires_settings() {
    let tmp = tempfile::TempDir::new().unwrap();
    su2run()
        .current_dir(tmp.path())
        .args(["config", "-i", "missing.json"])
        .assert()
        .failure();
}

#[test]
fn config_generates_cases() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("aircraft.su2"), "NDIME= 3\n").unwrap();
    std::fs::write(
        tmp.path().join("settings.json"),
        r#"{
            "su2": {
                "mesh_path": "aircraft.su2",
                "wall_markers": ["Wing"],
                "aero_map": [
                    { "altitude": 0.0, "mach": 0.3, "aoa": 0.0 },
                    { "altitude": 1000.0, "mach": 0.3, "aoa": 2.0 }
                ]
            }
        }"#,
    )
    .unwrap();

    su2run()
        .current_dir(tmp.path())
        .args(["config", "--wkdir-base", "runs"])
        .assert()
        .success();

    let settings: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(tmp.path().join("settings.json")).unwrap())
            .unwrap();
    // The recorded working directory does not depend on the current directory.
    let wkdir = std::path::PathBuf::from(settings["files"]["wkdir_path"].as_str().unwrap());
    assert!(wkdir.is_absolute());
    assert!(wkdir.join("mesh.su2").is_file());
    assert!(wkdir
        .join("Case01_alt1000_mach0.30_aoa2.0_aos0.0")
        .join("ConfigCFD.cfg")
        .is_file());
}

#[cfg(unix)]
#[test]
fn multi_then_results() {
    let tmp = tempfile::TempDir::new().unwrap();
    let bin = tmp.path().join("bin");
    let wkdir = tmp.path().join("wk");
    std::fs::create_dir_all(&bin).unwrap();
    install_fake_solvers(&bin, FAKE_CFD);
    make_case(&wkdir, "Case00");
    make_case(&wkdir, "Case01");

    su2run()
        .current_dir(tmp.path())
        .args(["multi", "wk", "--solver-dir", "bin", "-q"])
        .assert()
        .success();
    assert!(wkdir.join("Case01").join("logfileSU2_CFD.log").is_file());

    std::fs::write(tmp.path().join("settings.json"), "{}").unwrap();
    su2run()
        .current_dir(tmp.path())
        .args(["results", "wk", "-o", "out.json", "--json", "results.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Case00").and(predicate::str::contains("Case01")));

    let results: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(tmp.path().join("results.json")).unwrap())
            .unwrap();
    assert_eq!(results.as_array().unwrap().len(), 2);
    assert_eq!(results[0]["cl"], 0.5);
    assert_eq!(results[0]["efficiency"], 25.0);
    assert_eq!(results[0]["wetted_area"], 10.5);
    assert!(tmp.path().join("out.json").is_file());
}

#[cfg(unix)]
#[test]
fn solver_exit_status_forwarded() {
    let tmp = tempfile::TempDir::new().unwrap();
    let bin = tmp.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    install_fake_solvers(&bin, "#!/bin/sh\nexit 3\n");
    make_case(&tmp.path().join("wk"), "Case00");

    su2run()
        .current_dir(tmp.path())
        .args(["multi", "wk", "--solver-dir", "bin"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("SU2_CFD failed"));
}

#[cfg(unix)]
#[test]
fn single_case_runs() {
    let tmp = tempfile::TempDir::new().unwrap();
    let bin = tmp.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    install_fake_solvers(&bin, FAKE_CFD);
    std::fs::create_dir_all(tmp.path().join("wk")).unwrap();
    std::fs::write(tmp.path().join("wk").join("ConfigCFD.cfg"), "SOLVER= EULER\n").unwrap();

    su2run()
        .current_dir(tmp.path())
        .args(["single", "wk", "--solver-dir", "bin"])
        .assert()
        .success();
    assert!(tmp.path().join("wk").join("logfileSU2_SOL.log").is_file());
    assert!(tmp.path().join("wk").join("forces_breakdown.dat").is_file());
}

#[cfg(unix)]
#[test]
fn full_workflow() {
    let tmp = tempfile::TempDir::new().unwrap();
    let bin = tmp.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    install_fake_solvers(&bin, FAKE_CFD);
    std::fs::write(tmp.path().join("aircraft.su2"), "NDIME= 3\n").unwrap();
    std::fs::write(
        tmp.path().join("settings.json"),
        r#"{
            "su2": {
                "mesh_path": "aircraft.su2",
                "wall_markers": ["Wing", "Fuselage"],
                "aero_map": [
                    { "altitude": 0.0, "mach": 0.3, "aoa": 2.0 },
                    { "altitude": 5000.0, "mach": 0.5, "aoa": 2.0 },
                    { "altitude": 10000.0, "mach": 0.7, "aoa": 2.0 }
                ]
            }
        }"#,
    )
    .unwrap();

    su2run()
        .current_dir(tmp.path())
        .args([
            "--solver-dir",
            "bin",
            "-o",
            "out.json",
            "--json",
            "results.json",
            "-q",
        ])
        .assert()
        .success();

    let out: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(tmp.path().join("out.json")).unwrap())
            .unwrap();
    assert_eq!(out["aero_results"].as_array().unwrap().len(), 3);
    assert!(out["files"]["wkdir_path"].is_string());
}
