// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `ratchet --init`.

use crate::prelude::*;

#[test]
fn init_seeds_status_file() {
    let project = Project::scripted();
    project.results(&[("a", true), ("b", false)]);
    project.lint(false);

    project
        .cmd()
        .arg("--init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Initialized .test-status.json:"))
        .stdout(predicates::str::contains("  Tests:  1 passing, 1 pending"))
        .stdout(predicates::str::contains("  Checks: 0 passing, 1 pending"));

    let status = project.status();
    assert_eq!(status["tests"]["a"], "passing");
    assert_eq!(status["tests"]["b"], "pending");
    assert_eq!(status["checks"]["lint"], "pending");
}

#[test]
fn init_never_reports_violations() {
    let project = Project::scripted();
    project.results(&[("a", true), ("b", true)]);
    project.cmd().arg("--init").assert().success();

    // Regressing `a` and dropping `b` would fail a normal run.
    project.results(&[("a", false)]);

    project.cmd().arg("--init").assert().success();

    let status = project.status();
    assert_eq!(status["tests"]["a"], "pending");
    assert!(status["tests"].get("b").is_none());
}

#[test]
fn status_file_layout() {
    let project = Project::scripted();
    project.results(&[("z", true), ("a", false)]);

    project.cmd().arg("--init").assert().success();

    similar_asserts::assert_eq!(
        project.read(".test-status.json"),
        "{\n  \"checks\": {\n    \"lint\": \"passing\"\n  },\n  \"tests\": {\n    \"a\": \"pending\",\n    \"z\": \"passing\"\n  }\n}\n"
    );
}
