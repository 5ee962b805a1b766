//! Anagram and alphagram commands

use crate::WordEngine;
use crate::error::Result;
use crate::search::{SearchCondition, SearchSpec};

/// Words formed from a rack
pub struct AnagramResult {
    pub rack: String,
    pub subanagrams: bool,
    pub words: Vec<String>,
}

/// Find every anagram (or subanagram) of `rack`
///
/// # Errors
///
/// Returns an error if the engine is strict and the rack doesn't parse.
pub fn find_anagrams(engine: &WordEngine, rack: &str, subanagrams: bool) -> Result<AnagramResult> {
    let condition = if subanagrams {
        SearchCondition::subanagram(rack)
    } else {
        SearchCondition::anagram(rack)
    };
    let words = engine.search(&SearchSpec::new().with(condition), true)?;
    Ok(AnagramResult {
        rack: rack.to_ascii_uppercase(),
        subanagrams,
        words,
    })
}

/// An alphagram with the acceptable words that share it
pub struct AlphagramGroup {
    pub alphagram: String,
    pub words: Vec<String>,
}

/// Group `words` by alphagram, listing each alphagram's acceptable anagrams
///
/// # Errors
///
/// Returns an error if the engine is strict and a word doesn't parse as a
/// rack.
pub fn group_alphagrams<S: AsRef<str>>(
    engine: &WordEngine,
    words: &[S],
) -> Result<Vec<AlphagramGroup>> {
    engine
        .alphagrams(words)
        .into_iter()
        .map(|alphagram| {
            let spec = SearchSpec::new().with(SearchCondition::anagram(alphagram.clone()));
            Ok(AlphagramGroup {
                words: engine.search(&spec, true)?,
                alphagram,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> WordEngine {
        let mut engine = WordEngine::default();
        for word in ["ACT", "CAT", "TAC", "AT", "TA", "DOG", "GOD"] {
            engine.add_word(word);
        }
        engine
    }

    #[test]
    fn anagrams_and_subanagrams() {
        let engine = engine();
        let exact = find_anagrams(&engine, "tca", false).unwrap();
        assert_eq!(exact.rack, "TCA");
        assert_eq!(exact.words, vec!["ACT", "CAT", "TAC"]);

        let sub = find_anagrams(&engine, "TCA", true).unwrap();
        assert_eq!(sub.words, vec!["ACT", "AT", "CAT", "TA", "TAC"]);
    }

    #[test]
    fn blank_in_rack() {
        let found = find_anagrams(&engine(), "DO?", false).unwrap();
        assert_eq!(found.words, vec!["DOG", "GOD"]);
    }

    #[test]
    fn alphagram_groups() {
        let groups = group_alphagrams(&engine(), &["cat", "GOD", "TAC"]).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].alphagram, "ACT");
        assert_eq!(groups[0].words, vec!["ACT", "CAT", "TAC"]);
        assert_eq!(groups[1].alphagram, "DGO");
        assert_eq!(groups[1].words, vec!["DOG", "GOD"]);
    }
}
