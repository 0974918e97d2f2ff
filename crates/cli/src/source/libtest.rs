// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! libtest output parsers.
//!
//! Two formats are understood:
//! - text: the default `test path::name ... ok` lines;
//! - json: `--format json` events, one JSON object per line.
//!
//! Anything that is not a per-test result line is skipped, so build
//! output and panic messages interleaved with results are harmless.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{Outcome, observe};
use crate::config::OutputParser;
use crate::ratchet::Observations;

#[allow(clippy::expect_used)]
static TEST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^test\s+(\S+)\s+\.\.\.\s+(ok|FAILED|ignored)").expect("valid regex pattern")
});

/// Parse runner output with the configured parser.
pub fn parse(output: &str, parser: OutputParser) -> Observations {
    match parser {
        OutputParser::Text => parse_text(output),
        OutputParser::Json => parse_json(output),
    }
}

/// Parse libtest's human-readable output.
pub fn parse_text(output: &str) -> Observations {
    observe(TEST_LINE.captures_iter(output).map(|caps| {
        let outcome = match &caps[2] {
            "ok" => Outcome::Passed,
            "FAILED" => Outcome::Failed,
            _ => Outcome::Ignored,
        };
        (caps[1].to_string(), outcome)
    }))
}

#[derive(Deserialize)]
struct Event {
    #[serde(rename = "type")]
    kind: String,
    event: String,
    name: Option<String>,
}

/// Parse libtest's JSON event stream.
pub fn parse_json(output: &str) -> Observations {
    observe(output.lines().filter_map(|line| {
        let line = line.trim();
        if !line.starts_with('{') {
            return None;
        }
        let event: Event = serde_json::from_str(line).ok()?;
        if event.kind != "test" {
            return None;
        }
        let outcome = match event.event.as_str() {
            "ok" => Outcome::Passed,
            "failed" => Outcome::Failed,
            "ignored" => Outcome::Ignored,
            // "started", "timeout" (slow warning): not a result
            _ => return None,
        };
        Some((event.name?, outcome))
    }))
}

#[cfg(test)]
#[path = "libtest_tests.rs"]
mod tests;
