// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these via their `default_*` methods.

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "ratchet.toml";

/// Default status file, relative to the project root.
pub const STATUS_FILE: &str = ".test-status.json";

/// Default test command (libtest text output, serial for stable output).
pub fn test_command() -> Vec<String> {
    argv(&["cargo", "test", "--no-fail-fast", "--", "--test-threads=1"])
}

/// Default checks: `(name, command)`.
pub fn checks() -> Vec<(String, Vec<String>)> {
    vec![
        ("cargo_fmt".to_string(), argv(&["cargo", "fmt", "--check"])),
        ("cargo_clippy".to_string(), argv(&["cargo", "clippy", "--", "-D", "warnings"])),
    ]
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
