// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration and tooling faults.
//!
//! Every fault exits 2 and leaves the status file untouched.

use crate::prelude::*;

#[test]
fn invalid_toml_is_tooling_error() {
    let project = Project::scripted();
    project.config("version = [\n");

    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("ratchet.toml"));
    assert!(!project.has_status());
}

#[test]
fn unknown_config_key_is_rejected() {
    let project = Project::scripted();
    project.config("version = 1\nverbose = true\n");

    project.cmd().assert().code(2);
}

#[test]
fn unsupported_version_is_rejected() {
    let project = Project::scripted();
    project.config("version = 2\n");

    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("version"));
}

#[test]
fn duplicate_check_names_are_rejected() {
    let project = Project::scripted();
    project.config(
        r#"version = 1
[[checks]]
name = "lint"
command = ["true"]

[[checks]]
name = "lint"
command = ["true"]
"#,
    );

    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("lint"));
}

#[test]
fn explicit_config_that_does_not_exist_fails() {
    let project = Project::scripted();

    project.cmd().args(["-C", "missing.toml"]).assert().code(2);
}

#[test]
fn config_from_environment() {
    let project = Project::scripted();
    project.file("alt/ratchet.toml", &SCRIPTED_CONFIG.replace("results.txt", "../results.txt"));
    project.results(&[("a", false)]);
    // Checks resolve against the config's directory.
    project.file("alt/lint.ok", "");

    project
        .cmd()
        .arg("--init")
        .env("RATCHET_CONFIG", "alt/ratchet.toml")
        .assert()
        .success();

    assert!(project.path().join("alt/.test-status.json").exists());
}

#[test]
fn status_flag_overrides_config() {
    let project = Project::scripted();
    project.results(&[("a", true)]);

    project.cmd().args(["--init", "--status", "state/ratchet.json"]).assert().success();

    assert!(project.path().join("state/ratchet.json").exists());
    assert!(!project.has_status());
}

#[test]
fn corrupt_status_file_fails_before_running() {
    let project = Project::scripted();
    project.file(".test-status.json", "not json");

    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains(".test-status.json"));
    assert_eq!(project.read(".test-status.json"), "not json");
}

#[test]
fn init_recovers_corrupt_status_file() {
    let project = Project::scripted();
    project.file(".test-status.json", "not json");
    project.results(&[("a", true)]);

    project.cmd().arg("--init").assert().success();

    assert_eq!(project.status()["tests"]["a"], "passing");
}

#[test]
fn missing_test_runner_is_tooling_error() {
    let project = Project::scripted();
    project.config(
        &SCRIPTED_CONFIG.replace(r#"["cat", "results.txt"]"#, r#"["ratchet-no-such-runner"]"#),
    );

    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("ratchet-no-such-runner"));
    assert!(!project.has_status());
}

#[test]
fn timed_out_check_is_tooling_error() {
    let project = Project::scripted();
    project.config(
        r#"version = 1
[tests]
command = ["cat", "results.txt"]

[[checks]]
name = "slow"
command = ["sleep", "5"]
timeout = "100ms"
"#,
    );

    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("timed out"));
    assert!(!project.has_status());
}
