//! Define command

use crate::WordEngine;

/// Definition lookup for one word
pub struct DefineResult {
    pub word: String,
    pub acceptable: bool,
    pub definition: Option<String>,
}

/// Look up the definition of `word`
#[must_use]
pub fn define_word(engine: &WordEngine, word: &str) -> DefineResult {
    let word = word.to_ascii_uppercase();
    DefineResult {
        acceptable: engine.is_acceptable(&word),
        definition: engine.get_definition(&word),
        word,
    }
}
