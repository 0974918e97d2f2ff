// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ratchet library.
//!
//! Observes test and check outcomes, reconciles them against a committed
//! status record, and reports violations of the ratchet rules.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod ratchet;
pub mod report;
pub mod session;
pub mod source;
pub mod status;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, ExitCode, Result};
