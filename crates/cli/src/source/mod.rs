// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result sources.
//!
//! A source runs something external and reduces it to `name -> passed`
//! for one category. The ratchet engine only ever sees that mapping, never
//! the runner's output format.

pub mod checks;
pub mod command;
pub mod fixed;
pub mod libtest;
pub mod test_command;

use std::path::Path;

use crate::error::Result;
use crate::ratchet::Observations;

pub use checks::CheckCommandSource;
pub use fixed::FixedSource;
pub use test_command::TestCommandSource;

/// Context passed to every source.
pub struct SourceContext<'a> {
    /// Project root; commands run here.
    pub root: &'a Path,
}

/// Produces observations for one category.
pub trait ResultSource: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Run the source and collect observations.
    ///
    /// Failing tests or checks are data, not errors. Errors mean the source
    /// itself could not produce a result (spawn failure, timeout).
    fn collect(&self, ctx: &SourceContext) -> Result<Observations>;
}

/// Raw outcome as reported by a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Ignored,
}

/// Reduce raw outcomes to observations.
///
/// Ignored entries are dropped. If a name is reported more than once, a
/// failure wins.
pub fn observe<I>(outcomes: I) -> Observations
where
    I: IntoIterator<Item = (String, Outcome)>,
{
    let mut observed = Observations::new();
    for (name, outcome) in outcomes {
        let passed = match outcome {
            Outcome::Passed => true,
            Outcome::Failed => false,
            Outcome::Ignored => continue,
        };
        observed.entry(name).and_modify(|p| *p &= passed).or_insert(passed);
    }
    observed
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
