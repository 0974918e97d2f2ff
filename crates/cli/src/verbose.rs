// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes diagnostic output to stderr when `--verbose` is given.

use std::time::Duration;

/// Verbose output logger. Writes to stderr when enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print a `label: 1.23s` timing line.
    pub fn timing(&self, label: &str, elapsed: Duration) {
        self.log(&format_timing(label, elapsed));
    }
}

fn format_timing(label: &str, elapsed: Duration) -> String {
    format!("{label}: {:.2}s", elapsed.as_secs_f64())
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
