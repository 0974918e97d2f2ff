// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test runner source.
//!
//! Runs the configured test command and parses its combined output. The
//! command's exit status is ignored: failing tests exit non-zero, and
//! those failures are exactly what the parser reports.

use super::{ResultSource, SourceContext, command, libtest};
use crate::config::TestsConfig;
use crate::error::Result;
use crate::ratchet::Observations;

pub struct TestCommandSource {
    config: TestsConfig,
}

impl TestCommandSource {
    pub fn new(config: TestsConfig) -> Self {
        Self { config }
    }
}

impl ResultSource for TestCommandSource {
    fn name(&self) -> &str {
        self.config.command.first().map(String::as_str).unwrap_or("tests")
    }

    fn collect(&self, ctx: &SourceContext) -> Result<Observations> {
        let output = command::run(&self.config.command, ctx.root, self.config.timeout)?;
        let observed = libtest::parse(&output.combined(), self.config.format);

        if observed.is_empty() && !output.success() {
            tracing::warn!(
                "`{}` failed without reporting any tests; is it compiling?",
                command::display(&self.config.command)
            );
        }
        tracing::info!("collected {} test results", observed.len());
        Ok(observed)
    }
}

#[cfg(test)]
#[path = "test_command_tests.rs"]
mod tests;
