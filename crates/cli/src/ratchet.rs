// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ratchet engine.
//!
//! Reconciles one category's observed results against its saved statuses.
//! Pure: no I/O, deterministic, total over its inputs.
//!
//! | saved    | passed                        | failed                     |
//! |----------|-------------------------------|----------------------------|
//! | (absent) | violation, becomes `passing`  | becomes `pending`          |
//! | pending  | promoted to `passing`         | stays `pending`            |
//! | passing  | stays `passing`               | violation, stays `passing` |
//!
//! Saved names missing from the observation are violations and are dropped
//! from the new map. Status never moves from `passing` to `pending` here;
//! only an edit of the status file can do that.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::status::{Category, Status, StatusMap};

/// Observed outcomes for one category: name to passed.
pub type Observations = BTreeMap<String, bool>;

/// Why an observation breaks the ratchet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A name with no saved status passed on first sight.
    NewTestPassed,
    /// A `passing` name failed.
    Regression,
    /// A saved name was not observed.
    MissingTest,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::NewTestPassed => "new test passed",
            ViolationKind::Regression => "regression",
            ViolationKind::MissingTest => "missing test",
        }
    }

    /// What to do about it.
    pub fn advice(self) -> &'static str {
        match self {
            ViolationKind::NewTestPassed => "new tests must fail first",
            ViolationKind::Regression => "this passed before and must keep passing",
            ViolationKind::MissingTest => "remove it from the status file if intentional",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ratchet violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub category: Category,
    pub name: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.name)
    }
}

/// Informational status changes worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// A new name failed and is now tracked as `pending`.
    NewPending,
    /// A `pending` name passed and is now `passing`.
    Promoted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub category: Category,
    pub name: String,
    pub kind: TransitionKind,
}

/// Outcome of a single name's step through the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Unchanged,
    Transition(TransitionKind),
    Violation(ViolationKind),
}

/// Apply the transition table to one observed name.
pub fn step(saved: Option<Status>, passed: bool) -> (Status, Step) {
    match (saved, passed) {
        (None, true) => (Status::Passing, Step::Violation(ViolationKind::NewTestPassed)),
        (None, false) => (Status::Pending, Step::Transition(TransitionKind::NewPending)),
        (Some(Status::Pending), true) => {
            (Status::Passing, Step::Transition(TransitionKind::Promoted))
        }
        (Some(Status::Pending), false) => (Status::Pending, Step::Unchanged),
        (Some(Status::Passing), true) => (Status::Passing, Step::Unchanged),
        // Kept at passing so every later run keeps flagging it until fixed.
        (Some(Status::Passing), false) => {
            (Status::Passing, Step::Violation(ViolationKind::Regression))
        }
    }
}

/// Result of reconciling one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Replacement status map for the category.
    pub status: StatusMap,
    pub violations: Vec<Violation>,
    pub transitions: Vec<Transition>,
}

impl Reconciliation {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Reconcile observed results against saved statuses.
///
/// Violations are ordered by name for observed entries, followed by
/// missing names in name order.
pub fn reconcile(current: &Observations, saved: &StatusMap, category: Category) -> Reconciliation {
    let mut out = Reconciliation::default();

    for (name, &passed) in current {
        let (status, step) = step(saved.get(name).copied(), passed);
        match step {
            Step::Unchanged => {}
            Step::Transition(kind) => {
                out.transitions.push(Transition { category, name: name.clone(), kind });
            }
            Step::Violation(kind) => {
                out.violations.push(Violation { category, name: name.clone(), kind });
            }
        }
        out.status.insert(name.clone(), status);
    }

    for name in saved.keys().filter(|name| !current.contains_key(*name)) {
        out.violations.push(Violation {
            category,
            name: name.clone(),
            kind: ViolationKind::MissingTest,
        });
    }

    out
}

/// Baseline statuses straight from observations, bypassing the table.
///
/// Used to seed the status file; cannot produce violations.
pub fn baseline(current: &Observations) -> StatusMap {
    current
        .iter()
        .map(|(name, &passed)| (name.clone(), Status::from_outcome(passed)))
        .collect()
}

#[cfg(test)]
#[path = "ratchet_tests.rs"]
mod tests;
