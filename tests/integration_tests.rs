use assert_cmd::prelude::*;
use predicates::str::{contains, starts_with};
use std::process::Command;

#[test]
fn runs_without_arguments() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.assert().success();
}

#[test]
fn looks_up_branch_with_condition_codes() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("lookup").arg("BRnzp").arg("--minimal");
    cmd.assert()
        .success()
        .stdout(starts_with("BR    LABEL"))
        .stdout(contains("PCoffset9"))
        .stdout(contains("    BR\tLABEL_NAME"));
}

#[test]
fn prints_popup_markup() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("lookup").arg("JSRR").arg("--html");
    cmd.assert()
        .success()
        .stdout(contains(r#"<label class="key">JSRR</label>"#))
        .stdout(contains("<code><br>JSR\tLABEL_NAME<br>JSRR\tR3</code>"));
}

#[test]
fn unknown_word_fails() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("lookup").arg("FOO");
    cmd.assert().failure().stderr(contains("No instruction matches `FOO`"));
}

#[test]
fn scope_gate_hides_valid_mnemonic() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("lookup").arg("ADD").arg("--no-scope");
    cmd.assert().failure();
}

#[test]
fn hovers_over_file_offset() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("hover").arg("tests/files/loop.asm").arg("17").arg("--minimal");
    cmd.assert().success().stdout(starts_with("ADD    DR, SR, VALUE"));
}

#[test]
fn hover_needs_assembly_file() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("hover").arg("tests/files/loop.txt").arg("17");
    cmd.assert()
        .failure()
        .stderr(contains("is not an assembly source"));
}

#[test]
fn lists_every_instruction() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("list").arg("--minimal");
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 23);
    assert!(text.lines().next().unwrap().starts_with("AND"));
}

#[test]
fn sim_reports_missing_simulator() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("sim")
        .arg("--minimal")
        .arg("--simulator")
        .arg("./no-such-lc3-simulator");
    cmd.assert()
        .failure()
        .stderr(contains("Could not start simulator"));
}

#[test]
fn sim_rejects_missing_object() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("sim").arg("tests/files/missing.obj");
    cmd.assert().failure().stderr(contains("does not exist"));
}

#[test]
fn hover_rejects_offset_past_end() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.arg("hover").arg("tests/files/loop.asm").arg("9999");
    cmd.assert()
        .failure()
        .stderr(contains("past the end of the file"));
}

#[test]
fn sim_uses_simulator_from_env() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.env("LACETIP_SIMULATOR", "./from-env-sim").arg("sim");
    cmd.assert()
        .failure()
        .stderr(contains("Could not start simulator"))
        .stderr(contains("./from-env-sim"));
}

#[test]
fn sim_defaults_to_lc3sim() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.env_remove("LACETIP_SIMULATOR")
        .env_remove("LACETIP_MINIMAL")
        .arg("sim");
    cmd.assert()
        .stdout(contains("Simulating lc3sim"));
}

#[cfg(unix)]
#[test]
fn simulator_flag_beats_env() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.env("LACETIP_SIMULATOR", "./from-env-sim")
        .env_remove("LACETIP_MINIMAL")
        .arg("sim")
        .arg("--simulator")
        .arg("true");
    cmd.assert()
        .success()
        .stdout(contains("Simulating true"))
        .stdout(contains("Completed 1 simulator run(s)"));
}

#[cfg(unix)]
#[test]
fn minimal_env_silences_status_lines() {
    let mut cmd = Command::cargo_bin("lacetip").unwrap();
    cmd.env("LACETIP_MINIMAL", "1")
        .arg("sim")
        .arg("--simulator")
        .arg("true");
    cmd.assert().success().stdout("");
}
