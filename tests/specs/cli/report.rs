// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `ratchet report`.

use crate::prelude::*;

#[test]
fn report_without_record() {
    let project = Project::scripted();

    project
        .cmd()
        .arg("report")
        .assert()
        .success()
        .stdout("No status record found.\n");
}

#[test]
fn report_shows_counts_without_running_sources() {
    let project = Project::scripted();
    project.results(&[("a", true), ("b", false)]);
    project.cmd().arg("--init").assert().success();

    // A runner that would now fail cannot affect a report.
    project.config(&SCRIPTED_CONFIG.replace(r#"["cat", "results.txt"]"#, r#"["false"]"#));

    project
        .cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("Status: .test-status.json"))
        .stdout(predicates::str::contains("Tests:  1 passing, 1 pending"))
        .stdout(predicates::str::contains("Checks: 1 passing, 0 pending"));
}

#[test]
fn report_json_includes_record() {
    let project = Project::scripted();
    project.results(&[("a", true)]);
    project.cmd().arg("--init").assert().success();

    let output = project.cmd().args(["report", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status_file"], ".test-status.json");
    assert_eq!(json["record"]["tests"]["a"], "passing");
    assert_eq!(json["summary"]["checks"]["passing"], 1);
}

#[test]
fn report_json_without_record_is_null() {
    let project = Project::scripted();

    let output = project.cmd().args(["report", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    assert!(stdout_json(&output)["record"].is_null());
}

#[test]
fn report_on_corrupt_record_is_tooling_error() {
    let project = Project::scripted();
    project.file(".test-status.json", "{ nope");

    project
        .cmd()
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicates::str::starts_with("error:"));
}
