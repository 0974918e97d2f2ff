// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the command-line surface.

#[path = "report.rs"]
mod report;

use crate::prelude::*;

#[test]
fn help_exits_successfully() {
    ratchet_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("ratchet"))
        .stdout(predicates::str::contains("--init"));
}

#[test]
fn version_exits_successfully() {
    ratchet_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_usage_error() {
    ratchet_cmd().arg("--bogus").assert().code(2);
}

#[test]
fn init_cannot_combine_with_report() {
    ratchet_cmd().args(["--init", "report"]).assert().code(2);
}
