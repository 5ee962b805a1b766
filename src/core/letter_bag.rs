//! Letter bag combinatorics
//!
//! Counts the distinct ways a word's letters can be drawn from a bag of
//! tiles. The count is the rarity score behind probability ordering: the more
//! combinations, the more likely the word is to turn up on a rack.

use super::alphagram::{ALPHABET_SIZE, LetterCounts, letter_counts};

/// Standard English tile distribution, `A` through `Z` (blanks excluded)
pub const STANDARD_DISTRIBUTION: LetterCounts = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// A bag of letter tiles with a fixed per-letter supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBag {
    supply: LetterCounts,
}

impl Default for LetterBag {
    fn default() -> Self {
        Self {
            supply: STANDARD_DISTRIBUTION,
        }
    }
}

impl LetterBag {
    /// Create a bag with a custom per-letter supply
    #[must_use]
    pub const fn with_distribution(supply: LetterCounts) -> Self {
        Self { supply }
    }

    /// Number of tiles of a letter in the bag
    #[must_use]
    pub fn supply_of(&self, letter: u8) -> u8 {
        super::letter_index(letter.to_ascii_uppercase()).map_or(0, |i| self.supply[i])
    }

    /// Total number of tiles in the bag
    #[must_use]
    pub fn total(&self) -> u32 {
        self.supply.iter().map(|&n| u32::from(n)).sum()
    }

    /// Count the distinct combinations of tiles that spell the word
    ///
    /// This is the product over each distinct letter of `C(supply, needed)`.
    /// Words needing more of a letter than the bag holds, or letters the bag
    /// does not carry, have zero combinations. Saturates at `u64::MAX`.
    ///
    /// # Examples
    /// ```
    /// use word_engine::core::LetterBag;
    ///
    /// let bag = LetterBag::default();
    /// // C(9,1) * C(2,1) * C(6,1) for A, C, T
    /// assert_eq!(bag.num_combinations("CAT"), 108);
    /// assert_eq!(bag.num_combinations("ZZ"), 0);
    /// ```
    #[must_use]
    pub fn num_combinations(&self, word: &str) -> u64 {
        let upper = word.to_ascii_uppercase();
        if !upper.bytes().all(|b| b.is_ascii_uppercase()) {
            return 0;
        }

        let needed = letter_counts(upper.as_bytes());
        let mut combinations: u64 = 1;
        for i in 0..ALPHABET_SIZE {
            if needed[i] == 0 {
                continue;
            }
            let ways = n_choose_k(u64::from(self.supply[i]), u64::from(needed[i]));
            if ways == 0 {
                return 0;
            }
            combinations = combinations.saturating_mul(ways);
        }
        combinations
    }
}

/// Binomial coefficient, zero when `k > n`
#[must_use]
pub fn n_choose_k(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by (i + 1)
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_values() {
        assert_eq!(n_choose_k(9, 0), 1);
        assert_eq!(n_choose_k(9, 1), 9);
        assert_eq!(n_choose_k(9, 2), 36);
        assert_eq!(n_choose_k(12, 3), 220);
        assert_eq!(n_choose_k(2, 3), 0);
        assert_eq!(n_choose_k(6, 6), 1);
    }

    #[test]
    fn standard_bag_has_98_letters() {
        assert_eq!(LetterBag::default().total(), 98);
        assert_eq!(LetterBag::default().supply_of(b'e'), 12);
        assert_eq!(LetterBag::default().supply_of(b'?'), 0);
    }

    #[test]
    fn combinations_single_letters() {
        let bag = LetterBag::default();
        assert_eq!(bag.num_combinations("A"), 9);
        assert_eq!(bag.num_combinations("Q"), 1);
    }

    #[test]
    fn combinations_repeated_letters() {
        let bag = LetterBag::default();
        // C(9,2) * C(9,1) for AA + I
        assert_eq!(bag.num_combinations("AIA"), 36 * 9);
        // Only one Z in the bag
        assert_eq!(bag.num_combinations("ZZZ"), 0);
    }

    #[test]
    fn combinations_case_insensitive() {
        let bag = LetterBag::default();
        assert_eq!(bag.num_combinations("cat"), bag.num_combinations("CAT"));
    }

    #[test]
    fn combinations_reject_non_letters() {
        let bag = LetterBag::default();
        assert_eq!(bag.num_combinations("C?T"), 0);
    }

    #[test]
    fn rarer_words_have_fewer_combinations() {
        let bag = LetterBag::default();
        assert!(bag.num_combinations("JINX") < bag.num_combinations("RAIN"));
    }

    #[test]
    fn custom_distribution() {
        let mut supply = [0u8; ALPHABET_SIZE];
        supply[0] = 3;
        let bag = LetterBag::with_distribution(supply);
        assert_eq!(bag.num_combinations("AA"), 3);
        assert_eq!(bag.num_combinations("B"), 0);
    }
}
