//! Stem lists used by the Type I and seven-letter-stem groups

use crate::core::alphagram;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default)]
struct StemList {
    words: Vec<String>,
    alphagrams: FxHashSet<String>,
}

/// Stems grouped by length
#[derive(Debug, Clone, Default)]
pub struct StemIndex {
    by_length: FxHashMap<usize, StemList>,
}

impl StemIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append stems of one length to that length's list
    pub fn extend(&mut self, length: usize, stems: Vec<String>) {
        let list = self.by_length.entry(length).or_default();
        list.alphagrams.extend(stems.iter().map(|s| alphagram(s)));
        list.words.extend(stems);
    }

    /// Stems of `length` in import order
    #[must_use]
    pub fn words(&self, length: usize) -> &[String] {
        self.by_length
            .get(&length)
            .map_or(&[], |list| list.words.as_slice())
    }

    #[must_use]
    pub fn contains_alphagram(&self, length: usize, alphagram: &str) -> bool {
        self.by_length
            .get(&length)
            .is_some_and(|list| list.alphagrams.contains(alphagram))
    }

    /// Alphagrams of every stem of `length`
    pub fn alphagrams(&self, length: usize) -> impl Iterator<Item = &str> {
        self.by_length
            .get(&length)
            .into_iter()
            .flat_map(|list| list.alphagrams.iter().map(String::as_str))
    }

    /// Stem lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}
