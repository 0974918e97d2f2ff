// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use super::{ReportFormatter, relative};
use crate::color::scheme;
use crate::ratchet::{TransitionKind, Violation};
use crate::session::{Mode, SessionReport};
use crate::status::{Category, StatusRecord};

/// Width of the `=====` banner lines.
pub const BANNER_WIDTH: usize = 60;

/// Text format formatter.
pub struct TextFormatter {
    root: PathBuf,
}

impl TextFormatter {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }
}

/// Write a `=====` banner line.
pub fn banner(out: &mut dyn WriteColor) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}

fn counts(out: &mut dyn WriteColor, record: &StatusRecord, indent: &str) -> io::Result<()> {
    for category in Category::ALL {
        let c = record.counts(category);
        // "Tests:  " and "Checks: " line up
        let label = match category {
            Category::Tests => "Tests: ",
            Category::Checks => "Checks:",
        };
        writeln!(out, "{indent}{label} {} passing, {} pending", c.passing, c.pending)?;
    }
    Ok(())
}

fn category_tag(out: &mut dyn WriteColor, category: Category) -> io::Result<()> {
    out.set_color(&scheme::category())?;
    write!(out, "[{category}]")?;
    out.reset()
}

fn violation(out: &mut dyn WriteColor, v: &Violation) -> io::Result<()> {
    write!(out, "  ")?;
    out.set_color(&scheme::fail())?;
    write!(out, "✗")?;
    out.reset()?;
    write!(out, " ")?;
    category_tag(out, v.category)?;
    write!(out, " {}: ", v.kind.as_str().to_uppercase())?;
    out.set_color(&scheme::name())?;
    write!(out, "{}", v.name)?;
    out.reset()?;
    out.set_color(&scheme::advice())?;
    write!(out, " ({})", v.kind.advice())?;
    out.reset()?;
    writeln!(out)
}

impl TextFormatter {
    fn run(&self, out: &mut dyn WriteColor, report: &SessionReport) -> io::Result<()> {
        for t in &report.transitions {
            category_tag(out, t.category)?;
            out.set_color(&scheme::transition())?;
            match t.kind {
                TransitionKind::NewPending => write!(out, " New pending test: ")?,
                TransitionKind::Promoted => write!(out, " PROMOTED to passing: ")?,
            }
            out.reset()?;
            out.set_color(&scheme::name())?;
            write!(out, "{}", t.name)?;
            out.reset()?;
            writeln!(out)?;
        }

        writeln!(out)?;
        banner(out)?;
        counts(out, &report.record, "")?;
        writeln!(out)?;

        if report.passed() {
            out.set_color(&scheme::pass())?;
            write!(out, "✓ Ratchet passed!")?;
            out.reset()?;
            writeln!(out)?;
        } else {
            out.set_color(&scheme::fail())?;
            write!(out, "RATCHET FAILED:")?;
            out.reset()?;
            writeln!(out)?;
            for v in &report.violations {
                violation(out, v)?;
            }
        }
        banner(out)
    }

    fn init(&self, out: &mut dyn WriteColor, report: &SessionReport) -> io::Result<()> {
        writeln!(out)?;
        banner(out)?;
        out.set_color(&scheme::heading())?;
        write!(out, "Initialized {}:", relative(&report.status_path, &self.root).display())?;
        out.reset()?;
        writeln!(out)?;
        counts(out, &report.record, "  ")?;
        banner(out)
    }
}

impl ReportFormatter for TextFormatter {
    fn session(&self, out: &mut dyn WriteColor, report: &SessionReport) -> io::Result<()> {
        match report.mode {
            Mode::Run => self.run(out, report),
            Mode::Init => self.init(out, report),
        }
    }

    fn record(
        &self,
        out: &mut dyn WriteColor,
        path: &Path,
        record: Option<&StatusRecord>,
    ) -> io::Result<()> {
        let Some(record) = record else {
            return writeln!(out, "No status record found.");
        };
        writeln!(out, "Status: {}", relative(path, &self.root).display())?;
        counts(out, record, "")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
