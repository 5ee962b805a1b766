//! Lexicon summary command

use crate::WordEngine;

/// What is loaded into the engine
pub struct LexiconInfo {
    pub lexicon: String,
    pub words: usize,
    pub forward_edges: usize,
    pub reverse_edges: usize,
    pub defined_words: usize,
    /// `(length, count)` for each stem list
    pub stems: Vec<(usize, usize)>,
    /// Words per length, index = length
    pub length_histogram: Vec<usize>,
}

/// Summarize the engine's contents
#[must_use]
pub fn lexicon_info(engine: &WordEngine) -> LexiconInfo {
    let (forward_edges, reverse_edges) = engine.graph().edge_counts();

    let mut length_histogram = Vec::new();
    for word in engine.graph().words() {
        if length_histogram.len() <= word.len() {
            length_histogram.resize(word.len() + 1, 0);
        }
        length_histogram[word.len()] += 1;
    }

    LexiconInfo {
        lexicon: engine.lexicon_name().to_string(),
        words: engine.word_count(),
        forward_edges,
        reverse_edges,
        defined_words: engine.definitions().len(),
        stems: engine
            .stem_lengths()
            .into_iter()
            .map(|len| (len, engine.stems(len).len()))
            .collect(),
        length_histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts() {
        let mut engine = WordEngine::default();
        for word in ["A", "AT", "CAT", "DOG"] {
            engine.add_word(word);
        }
        let info = lexicon_info(&engine);
        assert_eq!(info.words, 4);
        assert_eq!(info.length_histogram, vec![0, 1, 1, 2]);
        assert_eq!(info.defined_words, 0);
        assert!(info.stems.is_empty());
        assert!(info.forward_edges > 4);
    }
}
