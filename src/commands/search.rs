//! Search command
//!
//! Builds a search specification from condition text and runs it.

use crate::WordEngine;
use crate::error::Result;
use crate::search::{SearchCondition, SearchSpec};
use std::time::{Duration, Instant};

/// Configuration for a search
pub struct SearchConfig {
    /// Condition text such as `pattern:C?T` or `!prefix:S`
    pub conditions: Vec<String>,
    /// Combine word lists with OR
    pub disjunctive: bool,
    pub limit: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(conditions: Vec<String>) -> Self {
        Self {
            conditions,
            disjunctive: false,
            limit: None,
        }
    }

    #[must_use]
    pub const fn disjunctive(mut self, disjunctive: bool) -> Self {
        self.disjunctive = disjunctive;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Result of a search
pub struct SearchResult {
    pub spec: SearchSpec,
    pub words: Vec<String>,
    /// Matches before the limit was applied
    pub total: usize,
    pub duration: Duration,
}

/// Parse the conditions of `config` into a specification
///
/// # Errors
///
/// Returns an error if any condition text fails to parse.
pub fn build_spec(config: &SearchConfig) -> Result<SearchSpec> {
    let conditions = config
        .conditions
        .iter()
        .map(|text| text.parse::<SearchCondition>())
        .collect::<Result<Vec<_>>>()?;
    Ok(SearchSpec {
        conditions,
        conjunction: !config.disjunctive,
    })
}

/// Run a search
///
/// # Errors
///
/// Returns an error if:
/// - A condition can't be parsed
/// - The engine is strict and rejects a condition
pub fn run_search(engine: &WordEngine, config: &SearchConfig) -> Result<SearchResult> {
    let spec = build_spec(config)?;

    let start = Instant::now();
    let mut words = engine.search(&spec, true)?;
    let duration = start.elapsed();

    let total = words.len();
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }

    Ok(SearchResult {
        spec,
        words,
        total,
        duration,
    })
}
