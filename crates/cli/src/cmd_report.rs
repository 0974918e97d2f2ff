// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::io::Write;

use anyhow::Context;
use termcolor::StandardStream;

use ratchet::ExitCode;
use ratchet::cli::{Cli, ReportArgs};
use ratchet::color::resolve_color;
use ratchet::discovery;
use ratchet::report;
use ratchet::status::StatusRecord;

use crate::cmd_run::load_config;

/// Print the stored status record.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let (config, config_path) = load_config(cli.config.as_deref(), &cwd)?;
    let root = discovery::project_root(config_path.as_deref(), &cwd);
    let status_path = match &args.status {
        Some(path) => cwd.join(path),
        None => config.status_path(&root),
    };

    let record = StatusRecord::load(&status_path)
        .with_context(|| format!("failed to read {}", status_path.display()))?;

    let mut stdout = StandardStream::stdout(resolve_color(args.output.color, args.output.no_color));
    let formatter = report::formatter(args.output.output, &root);
    formatter.record(&mut stdout, &status_path, record.as_ref())?;
    stdout.flush()?;

    Ok(ExitCode::Success)
}
