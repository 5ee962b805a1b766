//! Word check command
//!
//! Looks words up in the lexicon, the way a word judge would.

use crate::WordEngine;

/// Verdict for one word
pub struct WordVerdict {
    pub word: String,
    pub acceptable: bool,
}

/// Result of checking a play
pub struct CheckResult {
    pub lexicon: String,
    pub verdicts: Vec<WordVerdict>,
}

impl CheckResult {
    /// A play is good only if every word in it is
    #[must_use]
    pub fn all_acceptable(&self) -> bool {
        self.verdicts.iter().all(|v| v.acceptable)
    }
}

/// Check each word against the loaded lexicon
#[must_use]
pub fn check_words<S: AsRef<str>>(engine: &WordEngine, words: &[S]) -> CheckResult {
    let verdicts = words
        .iter()
        .map(|word| {
            let word = word.as_ref().to_ascii_uppercase();
            WordVerdict {
                acceptable: engine.is_acceptable(&word),
                word,
            }
        })
        .collect();

    CheckResult {
        lexicon: engine.lexicon_name().to_string(),
        verdicts,
    }
}
