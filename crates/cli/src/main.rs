// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use ratchet::ExitCode;
use ratchet::cli::{Cli, Command};

mod cmd_report;
mod cmd_run;

fn init_logging() {
    let filter = EnvFilter::try_from_env("RATCHET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> std::process::ExitCode {
    init_logging();

    let cli = Cli::parse();
    let result = match &cli.command {
        Some(Command::Report(args)) => cmd_report::run(&cli, args),
        None => cmd_run::run(&cli, &cli.run),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::ToolingError.into()
        }
    }
}
