// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! `ratchet.toml` is optional; every field has a default that reproduces
//! the stock cargo setup (`cargo test`, `cargo fmt --check`,
//! `cargo clippy -- -D warnings`, `.test-status.json`).

pub mod defaults;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// Only supported config schema version.
pub const CONFIG_VERSION: i64 = 1;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_version")]
    pub version: i64,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub tests: TestsConfig,

    /// Lint/format checks, each a named command that passes on exit 0.
    #[serde(default = "CheckConfig::defaults")]
    pub checks: Vec<CheckConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            status: StatusConfig::default(),
            tests: TestsConfig::default(),
            checks: CheckConfig::defaults(),
        }
    }
}

impl Config {
    fn default_version() -> i64 {
        CONFIG_VERSION
    }

    /// Resolve the status file against the project root.
    pub fn status_path(&self, root: &Path) -> PathBuf {
        if self.status.path.is_absolute() {
            self.status.path.clone()
        } else {
            root.join(&self.status.path)
        }
    }

    /// Reject configs that parse but cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(Error::ConfigInvalid(format!(
                "unsupported version {} (expected {})",
                self.version, CONFIG_VERSION
            )));
        }
        if self.tests.command.is_empty() {
            return Err(Error::ConfigInvalid("tests.command must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for check in &self.checks {
            if check.name.trim().is_empty() {
                return Err(Error::ConfigInvalid("check name must not be empty".to_string()));
            }
            if check.command.is_empty() {
                return Err(Error::ConfigInvalid(format!(
                    "check `{}` has an empty command",
                    check.name
                )));
            }
            if !seen.insert(check.name.as_str()) {
                return Err(Error::ConfigInvalid(format!("duplicate check `{}`", check.name)));
            }
        }
        Ok(())
    }
}

/// `[status]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusConfig {
    /// Status file, relative to the project root unless absolute.
    #[serde(default = "StatusConfig::default_path")]
    pub path: PathBuf,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self { path: Self::default_path() }
    }
}

impl StatusConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(defaults::STATUS_FILE)
    }
}

/// How to read the test command's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputParser {
    /// `test name ... ok|FAILED|ignored` lines.
    #[default]
    Text,
    /// libtest JSON events (`--format json`).
    Json,
}

/// `[tests]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestsConfig {
    /// Program and arguments, run in the project root.
    #[serde(default = "defaults::test_command")]
    pub command: Vec<String>,

    #[serde(default)]
    pub format: OutputParser,

    /// Kill the command after this long (e.g. "30s", "10m").
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub timeout: Option<Duration>,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self { command: defaults::test_command(), format: OutputParser::Text, timeout: None }
    }
}

/// `[[checks]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Name recorded in the status file.
    pub name: String,

    pub command: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_duration")]
    pub timeout: Option<Duration>,
}

impl CheckConfig {
    fn defaults() -> Vec<CheckConfig> {
        defaults::checks()
            .into_iter()
            .map(|(name, command)| CheckConfig { name, command, timeout: None })
            .collect()
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse and validate config content. `path` is used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })?;
    config.validate()?;
    Ok(config)
}

/// Parse a duration like "500ms", "30s", "10m", "1h". Bare numbers are seconds.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (digits, unit) = s.split_at(split);
    let value: u64 =
        digits.parse().map_err(|_| format!("invalid duration `{s}`: expected e.g. \"30s\""))?;

    match unit.trim() {
        "ms" => Ok(Duration::from_millis(value)),
        "" | "s" => Ok(Duration::from_secs(value)),
        "m" => scaled(value, 60, s),
        "h" => scaled(value, 3600, s),
        other => Err(format!("invalid duration unit `{other}` in `{s}`")),
    }
}

fn scaled(value: u64, secs_per_unit: u64, s: &str) -> std::result::Result<Duration, String> {
    value
        .checked_mul(secs_per_unit)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("invalid duration `{s}`: too large"))
}

fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.map(|s| parse_duration(&s).map_err(serde::de::Error::custom)).transpose()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
