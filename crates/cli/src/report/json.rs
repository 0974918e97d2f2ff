// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::json;
use termcolor::WriteColor;

use super::{ReportFormatter, relative};
use crate::session::SessionReport;
use crate::status::{Category, StatusRecord};

/// JSON format formatter.
pub struct JsonFormatter {
    root: PathBuf,
}

impl JsonFormatter {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }
}

fn summary(record: &StatusRecord) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for category in Category::ALL {
        map.insert(category.to_string(), json!(record.counts(category)));
    }
    serde_json::Value::Object(map)
}

fn write_value(out: &mut dyn WriteColor, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

impl ReportFormatter for JsonFormatter {
    fn session(&self, out: &mut dyn WriteColor, report: &SessionReport) -> io::Result<()> {
        let violations: Vec<_> = report
            .violations
            .iter()
            .map(|v| {
                json!({
                    "category": v.category,
                    "name": v.name,
                    "kind": v.kind,
                    "message": v.to_string(),
                })
            })
            .collect();

        let value = json!({
            "mode": report.mode,
            "passed": report.passed(),
            "status_file": relative(&report.status_path, &self.root),
            "summary": summary(&report.record),
            "transitions": report.transitions,
            "violations": violations,
        });
        write_value(out, &value)
    }

    fn record(
        &self,
        out: &mut dyn WriteColor,
        path: &Path,
        record: Option<&StatusRecord>,
    ) -> io::Result<()> {
        let value = match record {
            Some(record) => json!({
                "status_file": relative(path, &self.root),
                "summary": summary(record),
                "record": record,
            }),
            None => json!({
                "status_file": relative(path, &self.root),
                "record": null,
            }),
        };
        write_value(out, &value)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
