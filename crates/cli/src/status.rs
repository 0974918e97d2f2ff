// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted status record.
//!
//! The record lives in a JSON file (`.test-status.json` by default) with
//! exactly two top-level keys, `checks` and `tests`, each mapping a name to
//! `"pending"` or `"passing"`. Keys are written sorted with a trailing
//! newline so the file diffs cleanly under version control.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ratchet status of a single name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Observed, not yet confirmed passing. Allowed to fail.
    Pending,
    /// Confirmed passing. Must keep passing.
    Passing,
}

impl Status {
    /// Baseline status for an observed outcome.
    pub fn from_outcome(passed: bool) -> Self {
        if passed { Status::Passing } else { Status::Pending }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Passing => "passing",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result category. Names are unique within a category, never across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tests,
    Checks,
}

impl Category {
    /// Categories in reconciliation and report order.
    pub const ALL: [Category; 2] = [Category::Tests, Category::Checks];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tests => "tests",
            Category::Checks => "checks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statuses for one category, ordered by name.
pub type StatusMap = BTreeMap<String, Status>;

/// Passing/pending tallies for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub passing: usize,
    pub pending: usize,
}

impl StatusCounts {
    pub fn of(map: &StatusMap) -> Self {
        let passing = map.values().filter(|s| **s == Status::Passing).count();
        Self { passing, pending: map.len() - passing }
    }
}

/// The persisted record: one status map per category.
///
/// Field order matters: serde writes fields in declaration order, and the
/// file format requires sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusRecord {
    #[serde(default)]
    pub checks: StatusMap,
    #[serde(default)]
    pub tests: StatusMap,
}

impl StatusRecord {
    pub fn get(&self, category: Category) -> &StatusMap {
        match category {
            Category::Tests => &self.tests,
            Category::Checks => &self.checks,
        }
    }

    /// Replace the map for a category wholesale.
    pub fn set(&mut self, category: Category, map: StatusMap) {
        match category {
            Category::Tests => self.tests = map,
            Category::Checks => self.checks = map,
        }
    }

    pub fn counts(&self, category: Category) -> StatusCounts {
        StatusCounts::of(self.get(category))
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty() && self.checks.is_empty()
    }

    /// Load the record, returning None if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::StatusRead { path: path.to_path_buf(), source });
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| Error::StatusParse { path: path.to_path_buf(), source })
    }

    /// Load the record, treating a missing file as an empty record.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        Ok(Self::load(path)?.unwrap_or_default())
    }

    /// Serialize to the canonical on-disk form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        Ok(content)
    }

    /// Overwrite the record on disk.
    ///
    /// Writes to a temp file in the same directory, then renames over the
    /// target, so a crash never leaves a half-written record behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err =
            |message: String| Error::StatusWrite { path: path.to_path_buf(), message };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| write_err(e.to_string()))?;

        let content = self.to_json().map_err(|e| write_err(e.to_string()))?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
        tmp.write_all(content.as_bytes()).map_err(|e| write_err(e.to_string()))?;
        tmp.persist(path).map_err(|e| write_err(e.error.to_string()))?;

        tracing::debug!(
            "saved {} ({} tests, {} checks)",
            path.display(),
            self.tests.len(),
            self.checks.len()
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
