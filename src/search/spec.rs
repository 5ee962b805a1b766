//! Search specifications and their optimizer

use super::condition::{ConditionKind, SearchCondition};

/// An ordered set of conditions plus how word lists combine
///
/// `conjunction` only governs how several In-Word-List conditions combine
/// when a search is answered from the lists alone; every other condition is
/// always applied with AND semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpec {
    pub conditions: Vec<SearchCondition>,
    pub conjunction: bool,
}

impl Default for SearchSpec {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            conjunction: true,
        }
    }
}

impl SearchSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition
    #[must_use]
    pub fn with(mut self, condition: SearchCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Combine word lists with OR instead of AND
    #[must_use]
    pub fn disjunctive(mut self) -> Self {
        self.conjunction = false;
        self
    }

    /// The probability-order rank range, if one was requested
    #[must_use]
    pub fn probability_range(&self) -> Option<(i32, i32)> {
        self.conditions
            .iter()
            .rev()
            .find(|c| c.kind == ConditionKind::ProbabilityOrder)
            .map(|c| (c.min_value, c.max_value))
    }

    /// Simplify the conditions without changing the result set
    ///
    /// - exact duplicate conditions are dropped
    /// - patterns made only of `*` are dropped (they match every word)
    /// - Number-Of-Anagrams ranges merge into their intersection
    /// - non-negated Length ranges merge into their intersection
    /// - only the last Probability-Order range is kept
    pub fn optimize(&mut self) {
        let mut kept: Vec<SearchCondition> = Vec::with_capacity(self.conditions.len());
        let mut anagram_range: Option<(i32, i32)> = None;
        let mut length_range: Option<(i32, i32)> = None;
        let mut probability: Option<SearchCondition> = None;

        for condition in self.conditions.drain(..) {
            match condition.kind {
                // Negation has no meaning for anagram counts
                ConditionKind::NumAnagrams => {
                    anagram_range = Some(intersect(
                        anagram_range,
                        condition.min_value,
                        condition.max_value,
                    ));
                }
                ConditionKind::Length if !condition.negated => {
                    length_range = Some(intersect(
                        length_range,
                        condition.min_value,
                        condition.max_value,
                    ));
                }
                ConditionKind::ProbabilityOrder => probability = Some(condition),
                ConditionKind::PatternMatch
                    if !condition.negated && is_match_all(&condition.string_value) => {}
                _ => {
                    if !kept.contains(&condition) {
                        kept.push(condition);
                    }
                }
            }
        }

        if let Some((min, max)) = length_range {
            kept.push(SearchCondition::length(min, max));
        }
        if let Some((min, max)) = anagram_range {
            kept.push(SearchCondition::num_anagrams(min, max));
        }
        kept.extend(probability);
        self.conditions = kept;
    }
}

fn intersect(current: Option<(i32, i32)>, min: i32, max: i32) -> (i32, i32) {
    match current {
        Some((lo, hi)) => (lo.max(min), hi.min(max)),
        None => (min, max),
    }
}

fn is_match_all(pattern: &str) -> bool {
    !pattern.is_empty() && pattern.bytes().all(|b| b == b'*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::WordGroup;

    #[test]
    fn default_is_conjunctive() {
        assert!(SearchSpec::new().conjunction);
        assert!(!SearchSpec::new().disjunctive().conjunction);
    }

    #[test]
    fn optimize_drops_duplicates() {
        let mut spec = SearchSpec::new()
            .with(SearchCondition::pattern("C?T"))
            .with(SearchCondition::group(WordGroup::HookWords))
            .with(SearchCondition::pattern("C?T"));
        spec.optimize();
        assert_eq!(
            spec.conditions,
            vec![
                SearchCondition::pattern("C?T"),
                SearchCondition::group(WordGroup::HookWords)
            ]
        );
    }

    #[test]
    fn optimize_keeps_negated_twin() {
        let mut spec = SearchSpec::new()
            .with(SearchCondition::prefix("S"))
            .with(SearchCondition::prefix("S").negate());
        spec.optimize();
        assert_eq!(spec.conditions.len(), 2);
    }

    #[test]
    fn optimize_drops_match_all_pattern() {
        let mut spec = SearchSpec::new()
            .with(SearchCondition::pattern("**"))
            .with(SearchCondition::in_word_list("CAT"));
        spec.optimize();
        assert_eq!(spec.conditions, vec![SearchCondition::in_word_list("CAT")]);
    }

    #[test]
    fn optimize_keeps_negated_match_all_pattern() {
        let mut spec = SearchSpec::new().with(SearchCondition::pattern("*").negate());
        spec.optimize();
        assert_eq!(spec.conditions.len(), 1);
    }

    #[test]
    fn optimize_merges_ranges() {
        let mut spec = SearchSpec::new()
            .with(SearchCondition::num_anagrams(1, 5))
            .with(SearchCondition::length(2, 8))
            .with(SearchCondition::num_anagrams(2, 9))
            .with(SearchCondition::length(4, 15));
        spec.optimize();
        assert_eq!(
            spec.conditions,
            vec![
                SearchCondition::length(4, 8),
                SearchCondition::num_anagrams(2, 5)
            ]
        );
    }

    #[test]
    fn optimize_keeps_last_probability_range() {
        let mut spec = SearchSpec::new()
            .with(SearchCondition::probability_order(1, 10))
            .with(SearchCondition::probability_order(5, 6));
        spec.optimize();
        assert_eq!(
            spec.conditions,
            vec![SearchCondition::probability_order(5, 6)]
        );
        assert_eq!(spec.probability_range(), Some((5, 6)));
    }

    #[test]
    fn probability_range_absent() {
        let spec = SearchSpec::new().with(SearchCondition::pattern("A*"));
        assert_eq!(spec.probability_range(), None);
    }
}
