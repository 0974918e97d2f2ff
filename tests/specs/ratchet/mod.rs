// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the ratchet rules, end to end.

#[path = "init.rs"]
mod init;

#[path = "output.rs"]
mod output;
