// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Test ratchet: new tests must fail first, passing tests must keep passing
#[derive(Parser)]
#[command(name = "ratchet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RATCHET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the stored status record without running anything
    Report(ReportArgs),
}

/// Arguments for the default (run) command.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Seed the status file from current results instead of enforcing
    #[arg(long)]
    pub init: bool,

    /// Status file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub status: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Output options shared by every command.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Status file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub status: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
