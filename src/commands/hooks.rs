//! Hooks command
//!
//! Shows the letters that extend a word at either end.

use crate::WordEngine;

/// Hooks of one word
pub struct HookResult {
    pub word: String,
    pub acceptable: bool,
    /// Front hook letters, lower case
    pub front: String,
    /// Back hook letters, lower case
    pub back: String,
    pub num_anagrams: u32,
}

/// Collect the hooks of `word`
#[must_use]
pub fn word_hooks(engine: &WordEngine, word: &str) -> HookResult {
    let word = word.to_ascii_uppercase();
    HookResult {
        acceptable: engine.is_acceptable(&word),
        front: engine.front_hook_letters(&word),
        back: engine.back_hook_letters(&word),
        num_anagrams: engine.num_anagrams(&word),
        word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_of_at() {
        let mut engine = WordEngine::default();
        for word in ["AT", "BAT", "CAT", "ATE", "TA"] {
            engine.add_word(word);
        }
        let result = word_hooks(&engine, "at");
        assert_eq!(result.word, "AT");
        assert!(result.acceptable);
        assert_eq!(result.front, "bc");
        assert_eq!(result.back, "e");
        assert_eq!(result.num_anagrams, 2);
    }
}
