//! Graph-native condition evaluation
//!
//! A [`GraphQuery`] picks one condition to drive the trie walk (the first
//! positive pattern, anagram or subanagram) and checks the remaining
//! graph-native conditions on each word the walk produces.

use super::pattern::{LetterMask, Pattern, PatternError, letter_mask};
use super::rack::{Rack, RackMode};
use super::trie::{Everything, Traversal, Trie};
use super::MAX_WORD_LEN;
use crate::core::{LetterCounts, letter_counts};
use crate::error::{Error, Result};
use crate::search::{ConditionKind, SearchCondition, SearchSpec};
use tracing::warn;

#[derive(Debug, Clone)]
enum Driver {
    Pattern(Pattern),
    Rack(Rack),
}

#[derive(Debug, Clone)]
enum Filter {
    Pattern(Pattern),
    Rack(Rack),
    Length { min: usize, max: usize },
    /// Every listed letter, with multiplicity
    Include(LetterCounts),
    /// None of the listed letters
    Exclude(LetterMask),
    /// Share of letters from the set, in percent
    ConsistOf { set: LetterMask, min: i64, max: i64 },
}

impl Filter {
    fn matches(&self, word: &[u8]) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.matches_word(word),
            Self::Rack(rack) => rack.matches_word(word),
            Self::Length { min, max } => (*min..=*max).contains(&word.len()),
            Self::Include(required) => {
                let counts = letter_counts(word);
                required.iter().zip(counts.iter()).all(|(need, have)| have >= need)
            }
            Self::Exclude(set) => word
                .iter()
                .all(|&b| letter_mask(b).is_none_or(|bit| bit & set == 0)),
            Self::ConsistOf { set, min, max } => {
                let len = word.len() as i64;
                let inside = word
                    .iter()
                    .filter(|&&b| letter_mask(b).is_some_and(|bit| bit & set != 0))
                    .count() as i64;
                inside * 100 >= min * len && inside * 100 <= max * len
            }
        }
    }
}

/// Graph-native part of a search specification, ready to run
#[derive(Debug, Clone)]
pub struct GraphQuery {
    driver: Option<Driver>,
    filters: Vec<(Filter, bool)>,
    min_len: usize,
    max_len: usize,
}

fn clamp_len(value: i32) -> usize {
    usize::try_from(value).map_or(0, |v| v.min(MAX_WORD_LEN))
}

fn set_mask(letters: &str) -> LetterMask {
    letters
        .bytes()
        .filter_map(|b| letter_mask(b.to_ascii_uppercase()))
        .fold(0, |mask, bit| mask | bit)
}

impl GraphQuery {
    /// Compile the graph-native conditions of `spec`
    ///
    /// Conditions the graph does not evaluate are skipped. Unparsable
    /// patterns and racks are dropped with a warning, or rejected when
    /// `strict` is set.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCondition`] in strict mode.
    pub fn compile(spec: &SearchSpec, strict: bool) -> Result<Self> {
        let mut query = Self {
            driver: None,
            filters: Vec::new(),
            min_len: 1,
            max_len: MAX_WORD_LEN,
        };

        for condition in spec.conditions.iter().filter(|c| c.kind.is_graph_native()) {
            match query.add(condition) {
                Ok(()) => {}
                Err(err) if strict => {
                    return Err(Error::InvalidCondition(format!("{condition} ({err})")));
                }
                Err(err) => warn!(%condition, %err, "dropping search condition"),
            }
        }
        Ok(query)
    }

    fn add(&mut self, condition: &SearchCondition) -> std::result::Result<(), PatternError> {
        let negated = condition.negated;
        let text = condition.string_value.as_str();
        match condition.kind {
            ConditionKind::PatternMatch => {
                let pattern = Pattern::parse(text)?;
                if !negated && self.driver.is_none() {
                    self.narrow(pattern.min_len(), pattern.max_len());
                    self.driver = Some(Driver::Pattern(pattern));
                } else {
                    self.filters.push((Filter::Pattern(pattern), negated));
                }
            }
            ConditionKind::AnagramMatch | ConditionKind::SubanagramMatch => {
                let mode = if condition.kind == ConditionKind::AnagramMatch {
                    RackMode::Anagram
                } else {
                    RackMode::Subanagram
                };
                let rack = Rack::parse(text, mode)?;
                if !negated && self.driver.is_none() {
                    if mode == RackMode::Anagram {
                        self.narrow(rack.tile_count(), rack.max_len());
                    } else {
                        self.narrow(1, rack.max_len());
                    }
                    self.driver = Some(Driver::Rack(rack));
                } else {
                    self.filters.push((Filter::Rack(rack), negated));
                }
            }
            ConditionKind::Length => {
                let (min, max) = (clamp_len(condition.min_value), clamp_len(condition.max_value));
                if negated {
                    self.filters.push((Filter::Length { min, max }, true));
                } else {
                    self.narrow(min, Some(max));
                }
            }
            ConditionKind::IncludeLetters => {
                let letters = text.to_ascii_uppercase();
                self.filters
                    .push((Filter::Include(letter_counts(letters.as_bytes())), negated));
            }
            ConditionKind::ExcludeLetters => {
                self.filters.push((Filter::Exclude(set_mask(text)), negated));
            }
            ConditionKind::ConsistOf => {
                let filter = Filter::ConsistOf {
                    set: set_mask(text),
                    min: i64::from(condition.min_value),
                    max: i64::from(condition.max_value),
                };
                self.filters.push((filter, negated));
            }
            _ => {}
        }
        Ok(())
    }

    fn narrow(&mut self, min: usize, max: Option<usize>) {
        self.min_len = self.min_len.max(min);
        if let Some(max) = max {
            self.max_len = self.max_len.min(max);
        }
    }

    fn accepts(&self, word: &[u8]) -> bool {
        (self.min_len..=self.max_len).contains(&word.len())
            && self
                .filters
                .iter()
                .all(|(filter, negated)| filter.matches(word) != *negated)
    }

    /// Run against a forward trie and its reverse twin
    ///
    /// Results are sorted and unique.
    #[must_use]
    pub fn run(&self, forward: &Trie, reverse: &Trie) -> Vec<String> {
        if self.min_len > self.max_len {
            return Vec::new();
        }

        let candidates = match &self.driver {
            Some(Driver::Pattern(pattern)) if pattern.prefers_reverse() && !reverse.is_empty() => {
                let mut words: Vec<String> = reverse
                    .collect(&pattern.reversed(), self.max_len)
                    .into_iter()
                    .map(|w| w.chars().rev().collect::<String>())
                    .filter(|w| forward.contains(w.as_bytes()))
                    .collect();
                words.sort_unstable();
                words
            }
            Some(Driver::Pattern(pattern)) => forward.collect(pattern, self.max_len),
            Some(Driver::Rack(rack)) => forward.collect(rack, self.max_len),
            None => forward.collect(&Everything, self.max_len),
        };

        candidates
            .into_iter()
            .filter(|word| self.accepts(word.as_bytes()))
            .collect()
    }
}
