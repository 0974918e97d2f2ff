// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for JSON output.

use crate::prelude::*;

#[test]
fn json_output_on_success() {
    let project = Project::scripted();
    project.results(&[("a", false)]);

    let output = project.cmd().args(["-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "run");
    assert_eq!(json["passed"], true);
    assert_eq!(json["summary"]["tests"]["pending"], 1);
    assert_eq!(json["transitions"][0]["name"], "a");
    assert_eq!(json["transitions"][0]["kind"], "new_pending");
    assert_eq!(json["violations"].as_array().unwrap().len(), 0);
}

#[test]
fn json_output_on_failure() {
    let project = Project::scripted();
    project.results(&[("a", true)]);

    let output = project.cmd().args(["-o", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["passed"], false);
    let violation = &json["violations"][0];
    assert_eq!(violation["category"], "tests");
    assert_eq!(violation["name"], "a");
    assert_eq!(violation["kind"], "new_test_passed");
    assert_eq!(violation["message"], "new test passed: a");
}

#[test]
fn json_output_for_init() {
    let project = Project::scripted();
    project.results(&[("a", true)]);

    let output = project.cmd().args(["--init", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "init");
    assert_eq!(json["status_file"], ".test-status.json");
    assert_eq!(json["summary"]["tests"]["passing"], 1);
}

#[test]
fn json_output_has_no_text_banner() {
    let project = Project::scripted();

    project
        .cmd()
        .args(["-o", "json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running tests...").not());
}
