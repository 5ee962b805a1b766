//! Word definitions and cross-reference resolution
//!
//! A definition line holds one or more definitions separated by `" / "`.
//! Each carries its part of speech in a bracketed tag such as `[n]` or
//! `[v FEEDS, FEEDING]`. Definitions may point at other words:
//!
//! - `{word=pos}` follows the link: `word (its pos definition)`
//! - `<word=pos>` replaces the marker: `WORD, its pos definition`

use crate::config::MAX_DEFINITION_LINKS;
use crate::error::Result;
use crate::wordlists::read_entries;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

static POS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\w+)").expect("valid regex"));
static FOLLOW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)=(\w+)\}").expect("valid regex"));
static REPLACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(\w+)=(\w+)>").expect("valid regex"));

/// Definitions of one word, keyed by part of speech
pub type PartsOfSpeech = BTreeMap<String, Vec<String>>;

/// Definitions for every defined word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definitions {
    words: FxHashMap<String, PartsOfSpeech>,
}

impl Definitions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a definitions file: `WORD definition text` per line
    ///
    /// # Errors
    /// Returns an error if the file can't be opened or read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut definitions = Self::new();
        for entry in read_entries(path)? {
            let entry = entry?;
            let word = entry.key().to_ascii_uppercase();
            if !definitions.add(&word, entry.rest()) {
                debug!(line = entry.line, %word, "skipping definition");
            }
        }
        Ok(definitions)
    }

    /// Number of defined words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Record the definition line for `word`
    ///
    /// The first line recorded for a word wins. Returns whether anything
    /// was stored.
    pub fn add(&mut self, word: &str, definition: &str) -> bool {
        if word.is_empty() || definition.is_empty() || self.words.contains_key(word) {
            return false;
        }

        let mut parts = PartsOfSpeech::new();
        for def in definition.split(" / ") {
            let pos = POS_RE
                .captures(def)
                .map(|caps| caps[1].to_string())
                .unwrap_or_default();
            parts.entry(pos).or_default().push(def.to_string());
        }
        self.words.insert(word.to_string(), parts);
        true
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&PartsOfSpeech> {
        self.words.get(word)
    }

    /// First definition of `word` for `pos`, cut before its bracketed tag
    #[must_use]
    pub fn sub_definition(&self, word: &str, pos: &str) -> Option<&str> {
        let first = self.words.get(word)?.get(pos)?.first()?;
        Some(first.find(" [").map_or(first.as_str(), |end| &first[..end]))
    }

    /// Full definition of `word` with links resolved up to `max_links` deep
    ///
    /// Parts of speech appear in tag order, joined by `" / "`.
    #[must_use]
    pub fn resolve(&self, word: &str, max_links: usize) -> Option<String> {
        let parts = self.words.get(word)?;
        let resolved: Vec<String> = parts
            .values()
            .flatten()
            .map(|def| self.replace_links(def, max_links.min(MAX_DEFINITION_LINKS)))
            .collect();
        Some(resolved.join(" / "))
    }

    fn replace_links(&self, definition: &str, max_links: usize) -> String {
        let mut text = definition.to_string();
        let mut depth = max_links;
        let mut follow = false;
        loop {
            text = {
                let (caps, is_follow): (Captures<'_>, bool) =
                    if let Some(caps) = FOLLOW_RE.captures(&text) {
                        (caps, true)
                    } else if let Some(caps) = REPLACE_RE.captures(&text) {
                        (caps, false)
                    } else {
                        return text;
                    };
                // Once a follow marker shows up, stay in follow mode
                follow = follow || is_follow;

                let word = &caps[1];
                let pos = &caps[2];
                let replacement = if depth == 0 {
                    word.to_string()
                } else {
                    let upper = word.to_ascii_uppercase();
                    let sub = self.sub_definition(&upper, pos).unwrap_or_default();
                    match (follow, is_follow) {
                        (true, true) => format!("{word} ({sub})"),
                        (true, false) => sub.to_string(),
                        (false, _) => format!("{upper}, {sub}"),
                    }
                };

                let range = caps.get(0).map_or(0..0, |m| m.range());
                let mut modified = String::with_capacity(text.len() + replacement.len());
                modified.push_str(&text[..range.start]);
                modified.push_str(&replacement);
                modified.push_str(&text[range.end..]);
                modified
            };

            if depth == 0 {
                return text;
            }
            depth -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample() -> Definitions {
        let mut defs = Definitions::new();
        defs.add("FEED", "to give food to [v FED, FEEDING, FEEDS] / a meal [n FEEDS]");
        defs.add("FEEDS", "<feed=v> [v] / <feed=n> [n]");
        defs.add("FED", "{feed=v} [v]");
        defs
    }

    #[test]
    fn parts_of_speech_are_ordered() {
        let defs = sample();
        let parts = defs.get("FEED").unwrap();
        assert_eq!(parts.keys().collect::<Vec<_>>(), vec!["n", "v"]);
        assert_eq!(
            defs.resolve("FEED", 3).unwrap(),
            "a meal [n FEEDS] / to give food to [v FED, FEEDING, FEEDS]"
        );
    }

    #[test]
    fn first_definition_wins() {
        let mut defs = sample();
        assert!(!defs.add("FEED", "something else [n]"));
        assert_eq!(defs.sub_definition("FEED", "n"), Some("a meal"));
    }

    #[test]
    fn untagged_definitions_use_empty_pos() {
        let mut defs = Definitions::new();
        defs.add("ZA", "pizza");
        assert_eq!(defs.sub_definition("ZA", ""), Some("pizza"));
    }

    #[test]
    fn replace_links() {
        let defs = sample();
        assert_eq!(
            defs.resolve("FEEDS", 3).unwrap(),
            "FEED, a meal [n] / FEED, to give food to [v]"
        );
    }

    #[test]
    fn follow_links() {
        let defs = sample();
        assert_eq!(defs.resolve("FED", 3).unwrap(), "feed (to give food to) [v]");
    }

    #[test]
    fn zero_depth_keeps_bare_word() {
        let defs = sample();
        assert_eq!(defs.resolve("FED", 0).unwrap(), "feed [v]");
        assert_eq!(defs.resolve("FEEDS", 0).unwrap(), "feed [n] / feed [v]");
    }

    #[test]
    fn missing_target_gives_empty_sub_definition() {
        let mut defs = Definitions::new();
        defs.add("GLOP", "<glob=n> [n]");
        assert_eq!(defs.resolve("GLOP", 3).unwrap(), "GLOB,  [n]");
    }

    #[test]
    fn follow_mode_sticks_through_recursion() {
        let mut defs = Definitions::new();
        defs.add("A", "{b=n} [n]");
        defs.add("B", "<c=n> [n]");
        defs.add("C", "sea [n]");
        assert_eq!(defs.resolve("A", 3).unwrap(), "b (sea) [n]");
    }

    #[test]
    fn self_reference_stops_at_depth_cap() {
        let mut defs = Definitions::new();
        defs.add("A", "{a=n} [n]");
        let capped = defs.resolve("A", MAX_DEFINITION_LINKS).unwrap();
        assert_eq!(defs.resolve("A", 1_000_000).unwrap(), capped);
        assert!(capped.starts_with("a (a ("));
        assert!(capped.ends_with(") [n]"));
    }

    #[test]
    fn undefined_word() {
        assert_eq!(sample().resolve("CAT", 3), None);
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# definitions").unwrap();
        writeln!(file, "cat   a small   feline [n CATS]").unwrap();
        writeln!(file, "DOG").unwrap();
        writeln!(file, "CAT a second line [n]").unwrap();

        let defs = Definitions::from_file(file.path()).unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs.resolve("CAT", 3).unwrap(), "a small feline [n CATS]");
    }
}
