//! Alphagrams and letter arithmetic
//!
//! An alphagram is the letters of a word sorted into ascending order. Words
//! sharing an alphagram are anagrams of one another.

/// Number of letters in the alphabet handled by the engine
pub const ALPHABET_SIZE: usize = 26;

/// Per-letter counts, indexed `A` = 0 .. `Z` = 25
pub type LetterCounts = [u8; ALPHABET_SIZE];

/// Compute the alphagram of a word
///
/// The word is upper-cased first, so `alphagram("cat") == alphagram("ACT")`.
///
/// # Examples
/// ```
/// use word_engine::core::alphagram;
///
/// assert_eq!(alphagram("CAT"), "ACT");
/// assert_eq!(alphagram("dog"), "DGO");
/// ```
#[must_use]
pub fn alphagram(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().flat_map(char::to_uppercase).collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Map an upper-case ASCII letter to its alphabet index
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// Map an alphabet index back to its upper-case letter
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_SIZE);
    b'A' + index as u8
}

/// Count the letters of an upper-case word
///
/// Bytes outside `A`-`Z` are ignored.
#[must_use]
pub fn letter_counts(word: &[u8]) -> LetterCounts {
    let mut counts = [0u8; ALPHABET_SIZE];
    for &b in word {
        if let Some(i) = letter_index(b) {
            counts[i] = counts[i].saturating_add(1);
        }
    }
    counts
}

/// Check whether a word is in canonical form: non-empty, `A`-`Z` only
#[must_use]
pub fn is_canonical(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase())
}
