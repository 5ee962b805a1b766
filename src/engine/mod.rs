//! Word engine
//!
//! Wraps a [`WordGraph`] with the side indices a word study tool needs:
//! anagram counts, definitions, stems and list-backed groups. Searches are
//! answered by the graph for structural conditions and finished here.

mod definitions;
mod filter;
mod loader;
mod stems;

pub use definitions::{Definitions, PartsOfSpeech};
pub use loader::PendingDefinitions;
pub use stems::StemIndex;

use crate::config::EngineConfig;
use crate::core::{LetterBag, alphagram, is_canonical};
use crate::error::{Error, Result};
use crate::graph::WordGraph;
use crate::search::{ConditionKind, SearchCondition, SearchSpec, WordGroup};
use crate::wordlists::{read_entries, words_from_list};
use filter::PostFilter;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Anagram-count bounds that mean "no constraint" on the word-list path
const MAX_ANAGRAMS: i32 = 65535;

#[derive(Debug, Default)]
pub struct WordEngine {
    config: EngineConfig,
    graph: WordGraph,
    lexicon_name: String,
    num_anagrams: FxHashMap<String, u32>,
    definitions: Arc<Definitions>,
    stems: StemIndex,
    list_groups: FxHashMap<WordGroup, String>,
    pending: Option<PendingDefinitions>,
}

impl WordEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn graph(&self) -> &WordGraph {
        &self.graph
    }

    #[must_use]
    pub fn lexicon_name(&self) -> &str {
        &self.lexicon_name
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.graph.len()
    }

    /// The definitions currently in effect
    #[must_use]
    pub fn definitions(&self) -> Arc<Definitions> {
        Arc::clone(&self.definitions)
    }

    #[must_use]
    pub fn stems(&self, length: usize) -> &[String] {
        self.stems.words(length)
    }

    #[must_use]
    pub fn stem_lengths(&self) -> Vec<usize> {
        self.stems.lengths()
    }

    // ---------------------------------------------------------------- imports

    /// Add one word, keeping its alphagram's anagram count in step
    pub fn add_word(&mut self, word: &str) -> bool {
        let added = self.graph.add_word(word);
        if added {
            *self.num_anagrams.entry(alphagram(word)).or_insert(0) += 1;
        }
        added
    }

    /// Import a word list, one word per line with an optional definition
    ///
    /// Words are upper-cased. Each newly added word bumps its alphagram's
    /// anagram count once, so re-importing a list changes nothing. Returns
    /// the number of word lines read and makes `lexicon_name` active.
    ///
    /// # Errors
    /// Returns an error if the file can't be read. In strict mode, lines
    /// that aren't words fail the import; words read before that stay in.
    pub fn import_text_file(
        &mut self,
        path: &Path,
        lexicon_name: &str,
        load_definitions: bool,
    ) -> Result<usize> {
        let mut imported = 0;
        for entry in read_entries(path)? {
            let entry = entry?;
            let word = entry.key().to_ascii_uppercase();
            if !self.add_word(&word) && !self.graph.contains_word(&word) {
                if self.config.strict {
                    return Err(Error::InvalidWord {
                        word,
                        line: entry.line,
                    });
                }
                debug!(line = entry.line, %word, "skipping invalid word");
                continue;
            }
            if load_definitions {
                Arc::make_mut(&mut self.definitions).add(&word, entry.rest());
            }
            imported += 1;
        }

        self.lexicon_name = lexicon_name.to_string();
        info!(
            path = %path.display(),
            lexicon = lexicon_name,
            imported,
            total = self.graph.len(),
            "imported word list"
        );
        Ok(imported)
    }

    /// Import a DAWG file
    ///
    /// A forward file makes `lexicon_name` active; a reversed one only
    /// feeds the reverse graph and leaves the lexicon alone. Anagram counts
    /// are untouched either way.
    ///
    /// # Errors
    /// Returns an error if the file can't be read or is malformed.
    pub fn import_dawg_file(
        &mut self,
        path: &Path,
        lexicon_name: &str,
        reverse: bool,
    ) -> Result<usize> {
        let imported = self.graph.import_dawg_file(path, reverse)?;
        if !reverse {
            self.lexicon_name = lexicon_name.to_string();
        }
        Ok(imported)
    }

    /// Start loading definitions in the background
    ///
    /// Queries keep seeing the previous definitions until the result is
    /// picked up with [`Self::poll_definitions`] or
    /// [`Self::wait_for_definitions`].
    ///
    /// # Errors
    /// Returns [`Error::DefinitionsLoadInProgress`] if a load is already
    /// running.
    pub fn import_definitions(&mut self, path: &Path) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::DefinitionsLoadInProgress);
        }
        self.pending = Some(PendingDefinitions::spawn(path)?);
        debug!(path = %path.display(), "started definitions load");
        Ok(())
    }

    #[must_use]
    pub const fn is_loading_definitions(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a finished background load, if there is one
    ///
    /// Returns `None` while the load is still running or when none was
    /// started, otherwise the number of defined words or the load error.
    pub fn poll_definitions(&mut self) -> Option<Result<usize>> {
        let result = self.pending.as_mut()?.try_take()?;
        self.pending = None;
        Some(result.map(|definitions| self.apply_definitions(definitions)))
    }

    /// Block until the background load finishes and apply it
    ///
    /// # Errors
    /// Returns [`Error::NoDefinitionsLoad`] if no load was started, or the
    /// load's own error.
    pub fn wait_for_definitions(&mut self) -> Result<usize> {
        let pending = self.pending.take().ok_or(Error::NoDefinitionsLoad)?;
        let definitions = pending.take()?;
        Ok(self.apply_definitions(definitions))
    }

    /// Replace the definitions in one step
    pub fn apply_definitions(&mut self, definitions: Definitions) -> usize {
        let defined = definitions.len();
        self.definitions = Arc::new(definitions);
        info!(defined, "definitions loaded");
        defined
    }

    /// Import a stem list
    ///
    /// The first stem fixes the length for the file. Stems are appended to
    /// any already loaded for that length. Returns the stems kept.
    ///
    /// # Errors
    /// Returns an error if the file can't be read. In strict mode, a stem of
    /// the wrong length is an error instead of being dropped.
    pub fn import_stems(&mut self, path: &Path) -> Result<usize> {
        let mut length = 0;
        let mut stems = Vec::new();
        for entry in read_entries(path)? {
            let entry = entry?;
            let stem = entry.key().to_ascii_uppercase();
            if length == 0 {
                length = stem.len();
            }
            if stem.len() != length {
                if self.config.strict {
                    return Err(Error::StemLengthMismatch {
                        found: stem.len(),
                        stem,
                        line: entry.line,
                        expected: length,
                    });
                }
                warn!(line = entry.line, %stem, expected = length, "dropping stem");
                continue;
            }
            stems.push(stem);
        }

        let imported = stems.len();
        if length > 0 {
            self.stems.extend(length, stems);
        }
        info!(path = %path.display(), length, imported, "imported stems");
        Ok(imported)
    }

    /// Import `ALPHAGRAM count` lines; later lines overwrite earlier ones
    ///
    /// # Errors
    /// Returns an error if the file can't be read. In strict mode an
    /// unreadable count is an error instead of being skipped.
    pub fn import_num_anagrams(&mut self, path: &Path) -> Result<usize> {
        let mut imported = 0;
        for entry in read_entries(path)? {
            let entry = entry?;
            let value = entry.rest();
            let Ok(count) = value.split(' ').next().unwrap_or_default().parse::<u32>() else {
                if self.config.strict {
                    return Err(Error::InvalidCount {
                        value: value.to_string(),
                        line: entry.line,
                    });
                }
                debug!(line = entry.line, value, "skipping anagram count");
                continue;
            };
            self.num_anagrams
                .insert(entry.key().to_ascii_uppercase(), count);
            imported += 1;
        }
        info!(path = %path.display(), imported, "imported anagram counts");
        Ok(imported)
    }

    /// Read a word-count side file: the first token of its first line
    ///
    /// An empty file counts as zero.
    ///
    /// # Errors
    /// Returns an error if the file can't be read or the token isn't a
    /// number.
    pub fn read_word_count(path: &Path) -> Result<usize> {
        let Some(entry) = read_entries(path)?.next() else {
            return Ok(0);
        };
        let entry = entry?;
        entry.key().parse().map_err(|_| Error::InvalidCount {
            value: entry.key().to_string(),
            line: entry.line,
        })
    }

    /// Load the word list behind a list-backed group such as New in OWL2
    ///
    /// # Errors
    /// Returns [`Error::NotListGroup`] for groups defined by a rule, or an
    /// error if the file can't be read.
    pub fn import_group_list(&mut self, group: WordGroup, path: &Path) -> Result<usize> {
        if !group.is_list_backed() {
            return Err(Error::NotListGroup(group.name().to_string()));
        }
        let mut words = Vec::new();
        for entry in read_entries(path)? {
            words.push(entry?.key().to_ascii_uppercase());
        }
        let imported = words.len();
        self.list_groups.insert(group, words.join(" "));
        info!(path = %path.display(), %group, imported, "imported group list");
        Ok(imported)
    }

    // ---------------------------------------------------------------- queries

    #[must_use]
    pub fn is_acceptable(&self, word: &str) -> bool {
        self.graph.contains_word(word)
    }

    /// Number of acceptable anagrams of `word`, itself included
    #[must_use]
    pub fn num_anagrams(&self, word: &str) -> u32 {
        self.num_anagrams
            .get(&alphagram(word))
            .copied()
            .unwrap_or(0)
    }

    /// Distinct alphagrams of `words`, ascending
    #[must_use]
    pub fn alphagrams<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .map(|w| alphagram(w.as_ref()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Definition of `word` with cross-references resolved
    #[must_use]
    pub fn get_definition(&self, word: &str) -> Option<String> {
        self.definitions.resolve(
            &word.to_ascii_uppercase(),
            self.config.max_definition_links,
        )
    }

    /// Letters that make a word when put in front, lower-case and sorted
    #[must_use]
    pub fn front_hook_letters(&self, word: &str) -> String {
        self.hook_letters(word, true)
    }

    /// Letters that make a word when put at the end, lower-case and sorted
    #[must_use]
    pub fn back_hook_letters(&self, word: &str) -> String {
        self.hook_letters(word, false)
    }

    fn hook_letters(&self, word: &str, front: bool) -> String {
        let word = word.to_ascii_uppercase();
        if !is_canonical(&word) {
            return String::new();
        }
        let pattern = if front {
            format!("?{word}")
        } else {
            format!("{word}?")
        };
        let spec = SearchSpec::new().with(SearchCondition::pattern(pattern));
        self.graph
            .search(&spec)
            .iter()
            .filter_map(|hooked| {
                let letter = if front {
                    hooked.bytes().next()
                } else {
                    hooked.bytes().last()
                };
                letter.map(|b| char::from(b.to_ascii_lowercase()))
            })
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect()
    }

    /// Words matching every condition of `spec`
    ///
    /// Results come back in ascending order, or in probability order when a
    /// Probability-Order range is given. Searches made only of word lists and
    /// anagram counts are answered without walking the graph and ignore
    /// probability order.
    ///
    /// # Errors
    /// Only in strict mode: unparsable patterns or racks and unknown group
    /// names are reported instead of being ignored.
    pub fn search(&self, spec: &SearchSpec, all_caps: bool) -> Result<Vec<String>> {
        let spec = self.prepare(spec);

        if uses_word_lists_only(&spec) {
            return Ok(self.non_graph_search(&spec));
        }

        let filters: Vec<PostFilter> = spec
            .conditions
            .iter()
            .map(|condition| PostFilter::compile(condition, self.config.strict))
            .filter_map(Result::transpose)
            .collect::<Result<_>>()?;

        let candidates = if self.config.strict {
            self.graph.try_search(&spec)?
        } else {
            self.graph.search(&spec)
        };
        let mut words: Vec<String> = candidates
            .into_par_iter()
            .filter(|word| self.passes(word, &filters))
            .collect();

        if let Some((min, max)) = spec.probability_range() {
            if max > 0 {
                words = probability_slice(words, min, max);
            }
        }

        if all_caps {
            for word in &mut words {
                word.make_ascii_uppercase();
            }
        }
        debug!(results = words.len(), "search finished");
        Ok(words)
    }

    /// Swap list-backed groups for their word lists, then optimize
    fn prepare(&self, spec: &SearchSpec) -> SearchSpec {
        let mut spec = spec.clone();
        for condition in &mut spec.conditions {
            if condition.kind != ConditionKind::BelongToGroup {
                continue;
            }
            if let Some(group) = WordGroup::from_name(&condition.string_value) {
                if group.is_list_backed() {
                    condition.kind = ConditionKind::InWordList;
                    condition.string_value =
                        self.list_groups.get(&group).cloned().unwrap_or_default();
                }
            }
        }
        spec.optimize();
        spec
    }

    fn non_graph_search(&self, spec: &SearchSpec) -> Vec<String> {
        let mut min_anagrams = 0;
        let mut max_anagrams = MAX_ANAGRAMS;
        let mut found: Option<BTreeSet<String>> = None;

        for condition in &spec.conditions {
            match condition.kind {
                ConditionKind::NumAnagrams => {
                    if condition.min_value > max_anagrams || condition.max_value < min_anagrams {
                        return Vec::new();
                    }
                    min_anagrams = condition.min_value;
                    max_anagrams = condition.max_value;
                }
                ConditionKind::InWordList => {
                    let listed: BTreeSet<String> = words_from_list(&condition.string_value)
                        .into_iter()
                        .filter(|w| self.is_acceptable(w))
                        .collect();
                    found = Some(match found {
                        None => listed,
                        Some(current) if spec.conjunction => {
                            let both: BTreeSet<String> =
                                current.intersection(&listed).cloned().collect();
                            if both.is_empty() {
                                return Vec::new();
                            }
                            both
                        }
                        Some(mut current) => {
                            current.extend(listed);
                            current
                        }
                    });
                }
                _ => {}
            }
        }

        let words = found.unwrap_or_default();
        if min_anagrams > 0 || max_anagrams < MAX_ANAGRAMS {
            let range = i64::from(min_anagrams)..=i64::from(max_anagrams);
            words
                .into_iter()
                .filter(|w| range.contains(&i64::from(self.num_anagrams(w))))
                .collect()
        } else {
            words.into_iter().collect()
        }
    }
}

/// Whether a search can be answered from its word lists alone
fn uses_word_lists_only(spec: &SearchSpec) -> bool {
    let mut has_list = false;
    for condition in &spec.conditions {
        match condition.kind {
            ConditionKind::InWordList if condition.negated => return false,
            ConditionKind::InWordList => has_list = true,
            ConditionKind::NumAnagrams | ConditionKind::ProbabilityOrder => {}
            _ => return false,
        }
    }
    has_list
}

/// Keep ranks `min..=max` of `words` in probability order
///
/// Rank 1 is the word with the most ways to be drawn from a full bag; ties
/// go to the alphabetically first word.
fn probability_slice(words: Vec<String>, min: i32, max: i32) -> Vec<String> {
    let Ok(min) = usize::try_from(min.max(1)) else {
        return Vec::new();
    };
    let Ok(max) = usize::try_from(max) else {
        return Vec::new();
    };
    if min > words.len() || min > max {
        return Vec::new();
    }

    let bag = LetterBag::default();
    let mut keyed: Vec<(u64, String, String)> = words
        .into_par_iter()
        .map(|word| {
            let upper = word.to_ascii_uppercase();
            (bag.num_combinations(&upper), upper, word)
        })
        .collect();
    keyed.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    keyed
        .into_iter()
        .skip(min - 1)
        .take(max - min + 1)
        .map(|(_, _, word)| word)
        .collect()
}
