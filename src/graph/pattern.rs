//! Positional word patterns
//!
//! Syntax:
//! - a letter matches itself (case-insensitive)
//! - `?` or `.` matches any single letter
//! - `*` matches any run of zero or more letters
//! - `[ABC]` matches one of the listed letters, `[^ABC]` any other letter
//!
//! Matching simulates the pattern as a set of live positions, so a trie walk
//! visits each prefix once no matter how many `*` the pattern holds.

use super::trie::Traversal;
use crate::core::letter_index;
use std::fmt;

/// Bit mask over the alphabet, bit 0 = `A`
pub type LetterMask = u32;

/// Mask with every letter set
pub const ALL_LETTERS: LetterMask = (1 << 26) - 1;

/// Longest pattern (in tokens) that can be simulated
pub const MAX_PATTERN_TOKENS: usize = 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// One letter drawn from the mask
    Letter(LetterMask),
    /// Zero or more letters
    Star,
}

/// Error for text that is not a valid pattern or rack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    UnexpectedChar(char),
    UnclosedClass,
    EmptyClass,
    TooLong(usize),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar(c) => write!(f, "unexpected character '{c}'"),
            Self::UnclosedClass => write!(f, "unclosed letter class"),
            Self::EmptyClass => write!(f, "letter class matches no letter"),
            Self::TooLong(n) => write!(f, "pattern has {n} tokens, limit is {MAX_PATTERN_TOKENS}"),
        }
    }
}

impl std::error::Error for PatternError {}

/// Mask for a single letter, if it is one
#[inline]
#[must_use]
pub fn letter_mask(letter: u8) -> Option<LetterMask> {
    letter_index(letter.to_ascii_uppercase()).map(|i| 1 << i)
}

/// Parse the body of a `[...]` class starting after the opening bracket
///
/// Returns the mask and the number of bytes consumed including `]`.
pub(crate) fn parse_class(bytes: &[u8]) -> Result<(LetterMask, usize), PatternError> {
    let negated = bytes.first() == Some(&b'^');
    let start = usize::from(negated);

    let mut mask = 0;
    for (offset, &b) in bytes[start..].iter().enumerate() {
        if b == b']' {
            let mask = if negated { ALL_LETTERS & !mask } else { mask };
            if mask == 0 {
                return Err(PatternError::EmptyClass);
            }
            return Ok((mask, start + offset + 1));
        }
        mask |= letter_mask(b).ok_or(PatternError::UnexpectedChar(char::from(b)))?;
    }
    Err(PatternError::UnclosedClass)
}

/// A compiled positional pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Parse pattern text
    ///
    /// # Errors
    /// Returns a [`PatternError`] for unknown characters, malformed classes
    /// or patterns too long to simulate.
    ///
    /// # Examples
    /// ```
    /// use word_engine::graph::Pattern;
    ///
    /// let pattern = Pattern::parse("c?t*").unwrap();
    /// assert!(pattern.is_match("CAT"));
    /// assert!(pattern.is_match("CUTTER"));
    /// assert!(!pattern.is_match("COAT"));
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let bytes = text.as_bytes();
        let mut tokens = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            match b {
                b'?' | b'.' => tokens.push(Token::Letter(ALL_LETTERS)),
                // Consecutive stars are equivalent to one
                b'*' => {
                    if tokens.last() != Some(&Token::Star) {
                        tokens.push(Token::Star);
                    }
                }
                b'[' => {
                    let (mask, consumed) = parse_class(&bytes[i + 1..])?;
                    tokens.push(Token::Letter(mask));
                    i += consumed;
                }
                _ => {
                    let mask = letter_mask(b).ok_or_else(|| {
                        PatternError::UnexpectedChar(text[i..].chars().next().unwrap_or('?'))
                    })?;
                    tokens.push(Token::Letter(mask));
                }
            }
            i += 1;
        }

        if tokens.len() > MAX_PATTERN_TOKENS {
            return Err(PatternError::TooLong(tokens.len()));
        }
        Ok(Self { tokens })
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether the pattern matches every word
    #[must_use]
    pub fn matches_everything(&self) -> bool {
        self.tokens == [Token::Star]
    }

    /// Fewest letters a matching word can have
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Letter(_)))
            .count()
    }

    /// Most letters a matching word can have, `None` if unbounded
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        if self.tokens.contains(&Token::Star) {
            None
        } else {
            Some(self.tokens.len())
        }
    }

    /// Whether walking the reverse graph prunes better than the forward one
    ///
    /// True when the pattern opens with `*` but ends on a committed letter.
    #[must_use]
    pub fn prefers_reverse(&self) -> bool {
        matches!(self.tokens.first(), Some(Token::Star))
            && matches!(self.tokens.last(), Some(Token::Letter(mask)) if mask.count_ones() == 1)
    }

    /// The same pattern read right to left
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            tokens: self.tokens.iter().rev().copied().collect(),
        }
    }

    /// Match a whole word
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        self.matches_word(word.to_ascii_uppercase().as_bytes())
    }

    fn closure(&self, mut set: u128) -> u128 {
        for (i, token) in self.tokens.iter().enumerate() {
            if *token == Token::Star && set & (1u128 << i) != 0 {
                set |= 1u128 << (i + 1);
            }
        }
        set
    }
}

impl Traversal for Pattern {
    /// Live pattern positions; bit `tokens.len()` means "complete"
    type State = u128;

    fn start(&self) -> Self::State {
        self.closure(1)
    }

    fn step(&self, state: &Self::State, letter: u8) -> Option<Self::State> {
        let bit = letter_mask(letter)?;
        let mut next = 0u128;
        for (i, token) in self.tokens.iter().enumerate() {
            if state & (1u128 << i) == 0 {
                continue;
            }
            match token {
                Token::Letter(mask) if mask & bit != 0 => next |= 1u128 << (i + 1),
                Token::Letter(_) => {}
                Token::Star => next |= 1u128 << i,
            }
        }
        let next = self.closure(next);
        (next != 0).then_some(next)
    }

    fn accepts(&self, state: &Self::State) -> bool {
        state & (1u128 << self.tokens.len()) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    #[test]
    fn literal_pattern() {
        let p = pattern("CAT");
        assert!(p.is_match("CAT"));
        assert!(p.is_match("cat"));
        assert!(!p.is_match("CATS"));
        assert!(!p.is_match("CA"));
    }

    #[test]
    fn single_wildcards() {
        let p = pattern("?A.");
        assert!(p.is_match("CAT"));
        assert!(p.is_match("BAD"));
        assert!(!p.is_match("CUT"));
        assert!(!p.is_match("CATS"));
    }

    #[test]
    fn star_matches_zero_or_more() {
        let p = pattern("CAT*");
        assert!(p.is_match("CAT"));
        assert!(p.is_match("CATS"));
        assert!(p.is_match("CATERPILLAR"));
        assert!(!p.is_match("SCAT"));

        let p = pattern("*AT*S");
        assert!(p.is_match("ATS"));
        assert!(p.is_match("CATS"));
        assert!(p.is_match("BATTERS"));
        assert!(!p.is_match("BATTER"));
    }

    #[test]
    fn classes() {
        let p = pattern("[BC]AT");
        assert!(p.is_match("BAT"));
        assert!(p.is_match("CAT"));
        assert!(!p.is_match("HAT"));

        let p = pattern("[^BC]AT");
        assert!(p.is_match("HAT"));
        assert!(!p.is_match("BAT"));
    }

    #[test]
    fn consecutive_stars_collapse() {
        assert_eq!(pattern("A**B").tokens().len(), 3);
        assert!(pattern("**").matches_everything());
    }

    #[test]
    fn length_bounds() {
        assert_eq!(pattern("C?T").min_len(), 3);
        assert_eq!(pattern("C?T").max_len(), Some(3));
        assert_eq!(pattern("C*T").min_len(), 2);
        assert_eq!(pattern("C*T").max_len(), None);
    }

    #[test]
    fn reverse_preference() {
        assert!(pattern("*ING").prefers_reverse());
        assert!(!pattern("*IN?").prefers_reverse());
        assert!(!pattern("RE*").prefers_reverse());
    }

    #[test]
    fn reversed_pattern_matches_reversed_words() {
        let p = pattern("*ING").reversed();
        assert!(p.is_match("GNIRTS"));
        assert!(!p.is_match("STRING"));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Pattern::parse("C#T"), Err(PatternError::UnexpectedChar('#')));
        assert_eq!(Pattern::parse("[AB"), Err(PatternError::UnclosedClass));
        assert_eq!(Pattern::parse("[]"), Err(PatternError::EmptyClass));
        assert!(matches!(
            Pattern::parse(&"?".repeat(200)),
            Err(PatternError::TooLong(200))
        ));
    }

    #[test]
    fn empty_pattern_matches_nothing_nonempty() {
        let p = pattern("");
        assert!(!p.is_match("A"));
    }
}
