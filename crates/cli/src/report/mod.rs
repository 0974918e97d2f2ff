// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for sessions and stored records.

mod json;
mod text;

use std::io;
use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::session::SessionReport;
use crate::status::StatusRecord;

pub use json::JsonFormatter;
pub use text::{TextFormatter, banner};

/// Trait for writing session outcomes and stored records.
pub trait ReportFormatter {
    /// Write the result of a run or init session.
    fn session(&self, out: &mut dyn WriteColor, report: &SessionReport) -> io::Result<()>;

    /// Write a summary of the stored record, or a note that none exists.
    fn record(
        &self,
        out: &mut dyn WriteColor,
        path: &Path,
        record: Option<&StatusRecord>,
    ) -> io::Result<()>;
}

/// Pick the formatter for an output format.
///
/// Paths in output are shown relative to `root` when possible.
pub fn formatter(format: OutputFormat, root: &Path) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(root)),
        OutputFormat::Json => Box::new(JsonFormatter::new(root)),
    }
}

/// Display form of `path`, relative to `root` when it is inside it.
pub(crate) fn relative(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
