//! Word graph
//!
//! Stores a lexicon in two tries, one spelled forwards and one spelled
//! backwards, and answers structural queries (patterns, anagrams, lengths,
//! letter sets) by walking them.

pub mod dawg;
mod pattern;
mod query;
mod rack;
mod trie;

pub use pattern::{ALL_LETTERS, LetterMask, Pattern, PatternError, Token};
pub use query::GraphQuery;
pub use rack::{Rack, RackMode};
pub use trie::{Everything, Traversal};

use crate::error::{Error, Result};
use crate::search::SearchSpec;
use std::fs;
use std::path::Path;
use tracing::info;
use trie::Trie;

/// Longest word the graph accepts
pub const MAX_WORD_LEN: usize = 64;

#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    forward: Trie,
    reverse: Trie,
}

fn is_valid_word(word: &str) -> bool {
    (1..=MAX_WORD_LEN).contains(&word.len()) && word.bytes().all(|b| b.is_ascii_uppercase())
}

impl WordGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words in the forward graph
    #[must_use]
    pub const fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Edges allocated by the forward and reverse graphs
    #[must_use]
    pub fn edge_counts(&self) -> (usize, usize) {
        (self.forward.edge_count(), self.reverse.edge_count())
    }

    /// Exact membership; words are stored upper-case
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.forward.contains(word.as_bytes())
    }

    /// Insert a word in both orientations
    ///
    /// Returns whether the word was new. Empty words, words over
    /// [`MAX_WORD_LEN`] letters and words with anything but `A`-`Z` are
    /// refused.
    pub fn add_word(&mut self, word: &str) -> bool {
        if !is_valid_word(word) {
            return false;
        }
        let reversed: Vec<u8> = word.bytes().rev().collect();
        self.reverse.insert(&reversed);
        self.forward.insert(word.as_bytes())
    }

    /// Every word, ascending
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.forward.collect(&Everything, MAX_WORD_LEN)
    }

    /// Words satisfying every graph-native condition of `spec`, ascending
    ///
    /// Other condition kinds are ignored. Conditions that fail to parse are
    /// dropped with a warning; use [`Self::try_search`] to reject them.
    #[must_use]
    pub fn search(&self, spec: &SearchSpec) -> Vec<String> {
        GraphQuery::compile(spec, false)
            .map(|query| query.run(&self.forward, &self.reverse))
            .unwrap_or_default()
    }

    /// Like [`Self::search`] but fails on unparsable conditions
    ///
    /// # Errors
    /// Returns [`Error::InvalidCondition`] naming the bad condition.
    pub fn try_search(&self, spec: &SearchSpec) -> Result<Vec<String>> {
        Ok(GraphQuery::compile(spec, true)?.run(&self.forward, &self.reverse))
    }

    /// Load a DAWG file
    ///
    /// A forward file adds its words to both orientations. A reversed file
    /// (words spelled backwards) only fills the reverse graph, which then
    /// speeds up suffix-anchored patterns. Nothing is inserted unless the
    /// whole file validates. Returns the number of words in the file.
    ///
    /// # Errors
    /// Returns an error if the file can't be read or is malformed.
    pub fn import_dawg_file(&mut self, path: &Path, reverse: bool) -> Result<usize> {
        let bytes = fs::read(path).map_err(|e| Error::open(path, e))?;
        let words = dawg::decode(&bytes, path)?;

        for word in &words {
            if reverse {
                self.reverse.insert(word.as_bytes());
            } else {
                self.add_word(word);
            }
        }

        info!(
            path = %path.display(),
            words = words.len(),
            reverse,
            "imported DAWG"
        );
        Ok(words.len())
    }

    /// Encode one orientation as a minimized DAWG image
    ///
    /// # Errors
    /// Returns [`Error::DawgTooLarge`] if the graph can't be addressed.
    pub fn to_dawg_bytes(&self, reverse: bool) -> Result<Vec<u8>> {
        dawg::encode(if reverse { &self.reverse } else { &self.forward })
    }

    /// Write one orientation to a DAWG file
    ///
    /// # Errors
    /// Returns an error if encoding or writing fails.
    pub fn write_dawg_file(&self, path: &Path, reverse: bool) -> Result<()> {
        let bytes = self.to_dawg_bytes(reverse)?;
        fs::write(path, &bytes).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = bytes.len(), reverse, "wrote DAWG");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchCondition;
    use tempfile::TempDir;

    fn graph(words: &[&str]) -> WordGraph {
        let mut graph = WordGraph::new();
        for word in words {
            graph.add_word(word);
        }
        graph
    }

    #[test]
    fn add_word_is_idempotent() {
        let mut graph = WordGraph::new();
        assert!(graph.add_word("CAT"));
        assert!(!graph.add_word("CAT"));
        assert_eq!(graph.len(), 1);
        assert!(graph.contains_word("CAT"));
        assert!(!graph.contains_word("CA"));
        assert!(!graph.contains_word("CATS"));
    }

    #[test]
    fn add_word_rejects_bad_input() {
        let mut graph = WordGraph::new();
        assert!(!graph.add_word(""));
        assert!(!graph.add_word("C4T"));
        assert!(!graph.add_word("cat"));
        assert!(!graph.add_word(&"A".repeat(MAX_WORD_LEN + 1)));
        assert!(graph.add_word(&"A".repeat(MAX_WORD_LEN)));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn words_are_sorted() {
        let graph = graph(&["DOG", "CAT", "ANT", "CATS"]);
        assert_eq!(graph.words(), vec!["ANT", "CAT", "CATS", "DOG"]);
    }

    #[test]
    fn search_ignores_engine_conditions() {
        let graph = graph(&["CAT", "CATS", "SCAT"]);
        let spec = SearchSpec::new()
            .with(SearchCondition::pattern("*AT"))
            .with(SearchCondition::prefix("S"));
        assert_eq!(graph.search(&spec), vec!["CAT", "SCAT"]);
    }

    #[test]
    fn try_search_rejects_bad_pattern() {
        let graph = graph(&["CAT"]);
        let spec = SearchSpec::new().with(SearchCondition::pattern("C#T"));
        assert!(graph.try_search(&spec).is_err());
        assert_eq!(graph.search(&spec), vec!["CAT"]);
    }

    #[test]
    fn dawg_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.dawg");
        let original = graph(&["AT", "CAT", "CATS", "BAT", "BATS", "TAB"]);
        original.write_dawg_file(&path, false).unwrap();

        let mut loaded = WordGraph::new();
        assert_eq!(loaded.import_dawg_file(&path, false).unwrap(), 6);
        assert_eq!(loaded.words(), original.words());
        assert_eq!(
            loaded.search(&SearchSpec::new().with(SearchCondition::pattern("*S"))),
            vec!["BATS", "CATS"]
        );
    }

    #[test]
    fn reverse_dawg_only_confirms_forward_words() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reverse.dawg");
        graph(&["CATS", "DOGS", "HATS"]).write_dawg_file(&path, true).unwrap();

        let mut loaded = graph(&["CATS", "DOGS"]);
        assert_eq!(loaded.import_dawg_file(&path, true).unwrap(), 3);
        assert_eq!(loaded.len(), 2);
        assert_eq!(
            loaded.search(&SearchSpec::new().with(SearchCondition::pattern("*S"))),
            vec!["CATS", "DOGS"]
        );
    }

    #[test]
    fn malformed_dawg_leaves_graph_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.dawg");
        fs::write(&path, [0, 0, 0, 2, 0, 0, 0]).unwrap();

        let mut graph = graph(&["CAT"]);
        assert!(matches!(
            graph.import_dawg_file(&path, false),
            Err(Error::MalformedDawg { .. })
        ));
        assert_eq!(graph.words(), vec!["CAT"]);
    }

    #[test]
    fn missing_dawg_names_file() {
        let mut graph = WordGraph::new();
        let err = graph
            .import_dawg_file(Path::new("/no/such/words.dawg"), false)
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/words.dawg"));
    }
}
