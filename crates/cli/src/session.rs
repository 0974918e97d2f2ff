// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session controller.
//!
//! Owns the status file for the duration of one pass: reads it once,
//! collects observations from both sources, reconciles (or seeds a
//! baseline), and writes the replacement record once.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::{ExitCode, Result};
use crate::ratchet::{self, Observations, Transition, Violation};
use crate::source::{CheckCommandSource, ResultSource, SourceContext, TestCommandSource};
use crate::status::{Category, StatusRecord};

/// How a session treats observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Enforce the ratchet against the saved record.
    Run,
    /// Snapshot current observations as the new baseline.
    Init,
}

/// Outcome of a session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub mode: Mode,
    pub status_path: PathBuf,
    /// The record as written.
    pub record: StatusRecord,
    pub violations: Vec<Violation>,
    pub transitions: Vec<Transition>,
}

impl SessionReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.passed() { ExitCode::Success } else { ExitCode::RatchetFailed }
    }
}

/// One pass over both categories.
pub struct Session {
    root: PathBuf,
    status_path: PathBuf,
    tests: Box<dyn ResultSource>,
    checks: Box<dyn ResultSource>,
}

impl Session {
    pub fn new(
        root: impl Into<PathBuf>,
        status_path: impl Into<PathBuf>,
        tests: Box<dyn ResultSource>,
        checks: Box<dyn ResultSource>,
    ) -> Self {
        Self { root: root.into(), status_path: status_path.into(), tests, checks }
    }

    /// Build a session with the command sources described by `config`.
    pub fn from_config(config: &Config, root: &Path) -> Self {
        Self::new(
            root,
            config.status_path(root),
            Box::new(TestCommandSource::new(config.tests.clone())),
            Box::new(CheckCommandSource::new(config.checks.clone())),
        )
    }

    /// Use a different status file than the config names.
    pub fn with_status_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.status_path = path.into();
        self
    }

    pub fn status_path(&self) -> &Path {
        &self.status_path
    }

    /// Enforce the ratchet.
    ///
    /// The new record is saved even when violations are found, so the next
    /// run diffs against the best-known state.
    pub fn run(&self) -> Result<SessionReport> {
        let saved = StatusRecord::load_or_default(&self.status_path)?;
        tracing::debug!(
            "loaded {} ({} tests, {} checks)",
            self.status_path.display(),
            saved.tests.len(),
            saved.checks.len()
        );

        let mut record = StatusRecord::default();
        let mut violations = Vec::new();
        let mut transitions = Vec::new();

        for category in Category::ALL {
            let observed = self.collect(category)?;
            let result = ratchet::reconcile(&observed, saved.get(category), category);
            tracing::info!(
                "{}: {} observed, {} violations",
                category,
                observed.len(),
                result.violations.len()
            );
            record.set(category, result.status);
            violations.extend(result.violations);
            transitions.extend(result.transitions);
        }

        record.save(&self.status_path)?;
        Ok(SessionReport {
            mode: Mode::Run,
            status_path: self.status_path.clone(),
            record,
            violations,
            transitions,
        })
    }

    /// Seed the record from current observations. Never reports violations.
    ///
    /// The existing record is not read, so this also recovers from a
    /// corrupt status file.
    pub fn init(&self) -> Result<SessionReport> {
        let mut record = StatusRecord::default();
        for category in Category::ALL {
            let observed = self.collect(category)?;
            record.set(category, ratchet::baseline(&observed));
        }

        record.save(&self.status_path)?;
        Ok(SessionReport {
            mode: Mode::Init,
            status_path: self.status_path.clone(),
            record,
            violations: Vec::new(),
            transitions: Vec::new(),
        })
    }

    fn collect(&self, category: Category) -> Result<Observations> {
        let source = match category {
            Category::Tests => &self.tests,
            Category::Checks => &self.checks,
        };
        tracing::debug!("collecting {} from {}", category, source.name());
        source.collect(&SourceContext { root: &self.root })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
