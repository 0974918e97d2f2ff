// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed result source.

use super::{ResultSource, SourceContext};
use crate::error::Result;
use crate::ratchet::Observations;

/// Source that returns a preset set of observations.
///
/// Lets callers that already have results (from another tool, or a test)
/// drive a session without spawning anything.
pub struct FixedSource {
    observed: Observations,
}

impl FixedSource {
    pub fn new(observed: Observations) -> Self {
        Self { observed }
    }

    /// Build from `(name, passed)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        Self::new(pairs.into_iter().map(|(n, p)| (n.to_string(), p)).collect())
    }
}

impl ResultSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn collect(&self, _ctx: &SourceContext) -> Result<Observations> {
        Ok(self.observed.clone())
    }
}
