// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! Ratchet violations are not errors: they are returned as data by the
//! engine. Everything in [`Error`] is a tooling failure that aborts the run.

use std::path::PathBuf;
use std::time::Duration;

/// Tooling failures. Each variant aborts the run with [`ExitCode::ToolingError`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("failed to read status file {}: {source}", path.display())]
    StatusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt status file {}: {source}", path.display())]
    StatusParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write status file {}: {message}", path.display())]
    StatusWrite { path: PathBuf, message: String },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` timed out after {}s", timeout.as_secs_f64())]
    Timeout { command: String, timeout: Duration },

    #[error("failed waiting for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No violations, or baseline initialization.
    Success = 0,
    /// At least one ratchet violation was reported.
    RatchetFailed = 1,
    /// Config, status file, or external command failure.
    ToolingError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
