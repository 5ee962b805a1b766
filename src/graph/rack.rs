//! Tile racks for anagram and subanagram matching
//!
//! A rack is written like `AEINST?`: letters are tiles, `?` is a blank that
//! stands for any letter, `[ABC]` is a blank limited to those letters, and
//! `*` allows any number of extra letters.

use super::pattern::{ALL_LETTERS, LetterMask, PatternError, parse_class};
use super::trie::Traversal;
use crate::core::{ALPHABET_SIZE, LetterCounts, letter_index};

/// How a word must relate to the rack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackMode {
    /// Every tile used exactly once
    Anagram,
    /// Some of the tiles, each at most once
    Subanagram,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    mode: RackMode,
    letters: LetterCounts,
    blanks: Vec<LetterMask>,
    wildcard: bool,
}

/// Walk state: tiles left plus the word letters that had to come from blanks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RackState {
    remaining: LetterCounts,
    extras: Vec<u8>,
    length: usize,
}

impl Rack {
    /// Parse rack text
    ///
    /// # Errors
    /// Returns a [`PatternError`] for characters that are not tiles.
    ///
    /// # Examples
    /// ```
    /// use word_engine::graph::{Rack, RackMode};
    ///
    /// let rack = Rack::parse("TAC", RackMode::Anagram).unwrap();
    /// assert!(rack.is_match("CAT"));
    /// assert!(rack.is_match("ACT"));
    /// assert!(!rack.is_match("CATS"));
    /// ```
    pub fn parse(text: &str, mode: RackMode) -> Result<Self, PatternError> {
        let bytes = text.as_bytes();
        let mut letters = [0u8; ALPHABET_SIZE];
        let mut blanks = Vec::new();
        let mut wildcard = false;

        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'?' | b'.' => blanks.push(ALL_LETTERS),
                b'*' => wildcard = true,
                b'[' => {
                    let (mask, consumed) = parse_class(&bytes[i + 1..])?;
                    blanks.push(mask);
                    i += consumed;
                }
                b => match letter_index(b.to_ascii_uppercase()) {
                    Some(index) => letters[index] = letters[index].saturating_add(1),
                    None => {
                        let c = text[i..].chars().next().unwrap_or('?');
                        return Err(PatternError::UnexpectedChar(c));
                    }
                },
            }
            i += 1;
        }

        Ok(Self {
            mode,
            letters,
            blanks,
            wildcard,
        })
    }

    #[must_use]
    pub const fn mode(&self) -> RackMode {
        self.mode
    }

    /// Number of tiles, blanks included
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.letters.iter().map(|&n| usize::from(n)).sum::<usize>() + self.blanks.len()
    }

    /// Longest word the rack can form, `None` with a `*`
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        (!self.wildcard).then(|| self.tile_count())
    }

    /// Match a whole word
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        self.matches_word(word.to_ascii_uppercase().as_bytes())
    }

    /// Largest number of extra letters that can be assigned distinct blanks
    fn max_matching(&self, extras: &[u8]) -> usize {
        if self.blanks.iter().all(|&mask| mask == ALL_LETTERS) {
            return extras.len().min(self.blanks.len());
        }

        let mut owner = vec![usize::MAX; self.blanks.len()];
        let mut matched = 0;
        for i in 0..extras.len() {
            let mut seen = vec![false; self.blanks.len()];
            if self.augment(i, extras, &mut owner, &mut seen) {
                matched += 1;
            }
        }
        matched
    }

    fn augment(&self, i: usize, extras: &[u8], owner: &mut [usize], seen: &mut [bool]) -> bool {
        let bit = 1 << extras[i];
        for (j, &mask) in self.blanks.iter().enumerate() {
            if mask & bit == 0 || seen[j] {
                continue;
            }
            seen[j] = true;
            if owner[j] == usize::MAX || self.augment(owner[j], extras, owner, seen) {
                owner[j] = i;
                return true;
            }
        }
        false
    }
}

impl Traversal for Rack {
    type State = RackState;

    fn start(&self) -> Self::State {
        RackState {
            remaining: self.letters,
            extras: Vec::new(),
            length: 0,
        }
    }

    fn step(&self, state: &Self::State, letter: u8) -> Option<Self::State> {
        let index = letter_index(letter)?;

        let mut next = state.clone();
        next.length += 1;
        if next.remaining[index] > 0 {
            next.remaining[index] -= 1;
        } else {
            next.extras.push(index as u8);
        }

        // Without a wildcard every extra letter needs a blank of its own
        if !self.wildcard && self.max_matching(&next.extras) < next.extras.len() {
            return None;
        }
        Some(next)
    }

    fn accepts(&self, state: &Self::State) -> bool {
        match (self.mode, self.wildcard) {
            (RackMode::Anagram, false) => {
                state.length == self.tile_count() && state.remaining.iter().all(|&n| n == 0)
            }
            (RackMode::Anagram, true) => {
                state.remaining.iter().all(|&n| n == 0)
                    && self.max_matching(&state.extras) == self.blanks.len()
            }
            (RackMode::Subanagram, _) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anagram(text: &str) -> Rack {
        Rack::parse(text, RackMode::Anagram).unwrap()
    }

    fn subanagram(text: &str) -> Rack {
        Rack::parse(text, RackMode::Subanagram).unwrap()
    }

    #[test]
    fn exact_anagram() {
        let rack = anagram("ACT");
        assert!(rack.is_match("CAT"));
        assert!(rack.is_match("ACT"));
        assert!(!rack.is_match("CA"));
        assert!(!rack.is_match("CATS"));
        assert!(!rack.is_match("TACT"));
    }

    #[test]
    fn anagram_with_blank() {
        let rack = anagram("CA?");
        assert!(rack.is_match("CAT"));
        assert!(rack.is_match("CAB"));
        assert!(!rack.is_match("CA"));
        assert!(!rack.is_match("COT"));
    }

    #[test]
    fn anagram_with_restricted_blanks() {
        // Blanks [AB] and [A]: AB only works with B on the [AB] blank
        let rack = anagram("[AB][A]");
        assert!(rack.is_match("AB"));
        assert!(rack.is_match("AA"));
        assert!(!rack.is_match("BB"));
    }

    #[test]
    fn anagram_with_wildcard() {
        let rack = anagram("CT*");
        assert!(rack.is_match("CAT"));
        assert!(rack.is_match("ACTS"));
        assert!(rack.is_match("CT"));
        assert!(!rack.is_match("CAR"));
    }

    #[test]
    fn wildcard_still_needs_blanks_filled() {
        let rack = anagram("A?*");
        assert!(!rack.is_match("A"));
        assert!(rack.is_match("AB"));
        assert!(rack.is_match("BAT"));
    }

    #[test]
    fn subanagram_uses_some_tiles() {
        let rack = subanagram("TACS");
        assert!(rack.is_match("CAT"));
        assert!(rack.is_match("AT"));
        assert!(rack.is_match("CATS"));
        assert!(!rack.is_match("TACT"));
        assert!(!rack.is_match("DOG"));
    }

    #[test]
    fn subanagram_with_blank() {
        let rack = subanagram("AT?");
        assert!(rack.is_match("OAT"));
        assert!(!rack.is_match("OATS"));
    }

    #[test]
    fn tile_counts() {
        assert_eq!(anagram("AB?[CD]").tile_count(), 4);
        assert_eq!(anagram("AB?").max_len(), Some(3));
        assert_eq!(anagram("AB*").max_len(), None);
    }

    #[test]
    fn parse_rejects_digits() {
        assert_eq!(
            Rack::parse("AB1", RackMode::Anagram),
            Err(PatternError::UnexpectedChar('1'))
        );
    }
}
