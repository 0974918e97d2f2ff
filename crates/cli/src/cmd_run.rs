// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: run sources and enforce (or seed) the ratchet.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use termcolor::{StandardStream, WriteColor};

use ratchet::ExitCode;
use ratchet::cli::{Cli, OutputFormat, RunArgs};
use ratchet::color::{resolve_color, scheme};
use ratchet::config::{self, Config};
use ratchet::discovery;
use ratchet::report;
use ratchet::session::Session;
use ratchet::source::command;
use ratchet::verbose::VerboseLogger;

/// Run the ratchet.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(args.verbose);

    let (config, config_path) = load_config(cli.config.as_deref(), &cwd)?;
    let root = discovery::project_root(config_path.as_deref(), &cwd);
    let mut session = Session::from_config(&config, &root);
    if let Some(path) = &args.status {
        session = session.with_status_path(cwd.join(path));
    }

    verbose.section("Configuration");
    match &config_path {
        Some(path) => verbose.log(&format!("Config: {}", path.display())),
        None => verbose.log("Config: (defaults)"),
    }
    verbose.log(&format!("Root: {}", root.display()));
    verbose.log(&format!("Status file: {}", session.status_path().display()));

    verbose.section("Sources");
    verbose.log(&format!("tests: {}", command::display(&config.tests.command)));
    for check in &config.checks {
        verbose.log(&format!("checks/{}: {}", check.name, command::display(&check.command)));
    }

    let choice = resolve_color(args.output.color, args.output.no_color);
    let mut stdout = StandardStream::stdout(choice);

    if args.output.output == OutputFormat::Text {
        running_header(&mut stdout)?;
    }

    let start = Instant::now();
    let report = if args.init { session.init()? } else { session.run()? };
    verbose.section("Timing");
    verbose.timing("session", start.elapsed());

    let formatter = report::formatter(args.output.output, &root);
    formatter.session(&mut stdout, &report)?;
    stdout.flush()?;

    Ok(report.exit_code())
}

/// Load the explicit config, the discovered one, or defaults.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => discovery::find_config(cwd),
    };
    let config = match &path {
        Some(path) => config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    Ok((config, path))
}

fn running_header(out: &mut dyn WriteColor) -> std::io::Result<()> {
    out.set_color(&scheme::heading())?;
    report::banner(out)?;
    writeln!(out, "Running tests...")?;
    report::banner(out)?;
    out.reset()?;
    out.flush()
}
