// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint/format check source.
//!
//! Runs each configured check command in parallel using rayon. A check
//! passes iff its command exits successfully. Any check that cannot be
//! run at all fails the whole source.

use rayon::prelude::*;

use super::{ResultSource, SourceContext, command};
use crate::config::CheckConfig;
use crate::error::Result;
use crate::ratchet::Observations;

pub struct CheckCommandSource {
    checks: Vec<CheckConfig>,
}

impl CheckCommandSource {
    pub fn new(checks: Vec<CheckConfig>) -> Self {
        Self { checks }
    }
}

impl ResultSource for CheckCommandSource {
    fn name(&self) -> &str {
        "checks"
    }

    fn collect(&self, ctx: &SourceContext) -> Result<Observations> {
        let results: Vec<Result<(String, bool)>> = self
            .checks
            .par_iter()
            .map(|check| {
                let output = command::run(&check.command, ctx.root, check.timeout)?;
                let passed = output.success();
                tracing::debug!("check {}: {}", check.name, if passed { "ok" } else { "failed" });
                Ok((check.name.clone(), passed))
            })
            .collect();

        let mut observed = Observations::new();
        for result in results {
            let (name, passed) = result?;
            observed.insert(name, passed);
        }
        tracing::info!("collected {} check results", observed.len());
        Ok(observed)
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
