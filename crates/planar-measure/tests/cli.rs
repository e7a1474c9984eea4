#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("planar-measure").expect("binary built")
}

#[test]
fn help_lists_reference_flags() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--cam_index"))
        .stdout(predicate::str::contains("--Z"))
        .stdout(predicate::str::contains("--focal-length").not());
}

#[test]
fn focal_length_is_not_a_flag() {
    bin()
        .args(["--focal-length", "812"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--focal-length"));
}

#[test]
fn rejects_unknown_flags() {
    bin().arg("--cal_file").arg("x.json").assert().failure();
}

#[cfg(not(feature = "opencv"))]
#[test]
fn reports_missing_camera_backend() {
    bin()
        .args(["--cam_index", "0", "--Z", "1.04"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("camera support is not compiled in"));
}
