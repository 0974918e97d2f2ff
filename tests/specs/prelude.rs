// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the ratchet binary
pub fn ratchet_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ratchet"));
    cmd.env_remove("RATCHET_CONFIG").env_remove("RATCHET_LOG").env("NO_COLOR", "1");
    cmd
}

/// Config whose test runner prints `results.txt` and whose single check,
/// `lint`, passes while `lint.ok` exists.
pub const SCRIPTED_CONFIG: &str = r#"version = 1

[tests]
command = ["cat", "results.txt"]

[[checks]]
name = "lint"
command = ["sh", "-c", "test -f lint.ok"]
"#;

/// A temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty project with no config.
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// A project using [`SCRIPTED_CONFIG`], with no tests yet and a passing lint.
    pub fn scripted() -> Self {
        let project = Self::empty();
        project.config(SCRIPTED_CONFIG);
        project.results(&[]);
        project.lint(true);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    pub fn config(&self, content: &str) {
        self.file("ratchet.toml", content);
    }

    /// Set what the scripted test runner reports, as libtest text lines.
    pub fn results(&self, tests: &[(&str, bool)]) {
        let mut out = String::from("running tests\n");
        for (name, passed) in tests {
            let verdict = if *passed { "ok" } else { "FAILED" };
            out.push_str(&format!("test {name} ... {verdict}\n"));
        }
        self.file("results.txt", &out);
    }

    /// Make the scripted `lint` check pass or fail.
    pub fn lint(&self, passing: bool) {
        let marker = self.dir.path().join("lint.ok");
        if passing {
            std::fs::write(marker, "").unwrap();
        } else if marker.exists() {
            std::fs::remove_file(marker).unwrap();
        }
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    /// Parsed `.test-status.json`.
    pub fn status(&self) -> serde_json::Value {
        serde_json::from_str(&self.read(".test-status.json")).unwrap()
    }

    pub fn has_status(&self) -> bool {
        self.dir.path().join(".test-status.json").exists()
    }

    /// `ratchet` with the project as working directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = ratchet_cmd();
        cmd.current_dir(self.dir.path());
        cmd
    }
}

/// Parse stdout of a finished command as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
