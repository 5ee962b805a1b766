//! Search conditions
//!
//! A condition is plain data: a kind, a negation flag and a string or
//! numeric-range payload. Interpretation happens in the graph (structural
//! kinds) and the engine (everything else).

use super::group::WordGroup;
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    PatternMatch,
    AnagramMatch,
    SubanagramMatch,
    /// Word length in `min_value..=max_value`
    Length,
    IncludeLetters,
    ExcludeLetters,
    /// Percentage of the word's letters drawn from `string_value`
    ConsistOf,
    /// `string_value` + word is acceptable
    Prefix,
    /// word + `string_value` is acceptable
    Suffix,
    BelongToGroup,
    /// Word appears in the space-separated `string_value`
    InWordList,
    NumAnagrams,
    /// 1-based rank range in probability order
    ProbabilityOrder,
}

impl ConditionKind {
    pub const ALL: [Self; 13] = [
        Self::PatternMatch,
        Self::AnagramMatch,
        Self::SubanagramMatch,
        Self::Length,
        Self::IncludeLetters,
        Self::ExcludeLetters,
        Self::ConsistOf,
        Self::Prefix,
        Self::Suffix,
        Self::BelongToGroup,
        Self::InWordList,
        Self::NumAnagrams,
        Self::ProbabilityOrder,
    ];

    /// Short name used in condition text
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::PatternMatch => "pattern",
            Self::AnagramMatch => "anagram",
            Self::SubanagramMatch => "subanagram",
            Self::Length => "length",
            Self::IncludeLetters => "include",
            Self::ExcludeLetters => "exclude",
            Self::ConsistOf => "consist",
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::BelongToGroup => "group",
            Self::InWordList => "list",
            Self::NumAnagrams => "anagrams",
            Self::ProbabilityOrder => "prob",
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Whether the word graph evaluates this kind natively
    #[must_use]
    pub const fn is_graph_native(self) -> bool {
        matches!(
            self,
            Self::PatternMatch
                | Self::AnagramMatch
                | Self::SubanagramMatch
                | Self::Length
                | Self::IncludeLetters
                | Self::ExcludeLetters
                | Self::ConsistOf
        )
    }

    const fn takes_range(self) -> bool {
        matches!(
            self,
            Self::Length | Self::NumAnagrams | Self::ProbabilityOrder
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchCondition {
    pub kind: ConditionKind,
    pub negated: bool,
    pub string_value: String,
    pub min_value: i32,
    pub max_value: i32,
}

impl SearchCondition {
    #[must_use]
    pub fn with_string(kind: ConditionKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            negated: false,
            string_value: value.into(),
            min_value: 0,
            max_value: 0,
        }
    }

    #[must_use]
    pub const fn with_range(kind: ConditionKind, min_value: i32, max_value: i32) -> Self {
        Self {
            kind,
            negated: false,
            string_value: String::new(),
            min_value,
            max_value,
        }
    }

    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::with_string(ConditionKind::PatternMatch, pattern)
    }

    #[must_use]
    pub fn anagram(rack: impl Into<String>) -> Self {
        Self::with_string(ConditionKind::AnagramMatch, rack)
    }

    #[must_use]
    pub fn subanagram(rack: impl Into<String>) -> Self {
        Self::with_string(ConditionKind::SubanagramMatch, rack)
    }

    #[must_use]
    pub const fn length(min: i32, max: i32) -> Self {
        Self::with_range(ConditionKind::Length, min, max)
    }

    #[must_use]
    pub fn include_letters(letters: impl Into<String>) -> Self {
        Self::with_string(ConditionKind::IncludeLetters, letters)
    }

    #[must_use]
    pub fn exclude_letters(letters: impl Into<String>) -> Self {
        Self::with_string(ConditionKind::ExcludeLetters, letters)
    }

    #[must_use]
    pub fn consist_of(letters: impl Into<String>, min_percent: i32, max_percent: i32) -> Self {
        Self {
            min_value: min_percent,
            max_value: max_percent,
            ..Self::with_string(ConditionKind::ConsistOf, letters)
        }
    }

    #[must_use]
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::with_string(ConditionKind::Prefix, prefix)
    }

    #[must_use]
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::with_string(ConditionKind::Suffix, suffix)
    }

    #[must_use]
    pub fn group(group: WordGroup) -> Self {
        Self::with_string(ConditionKind::BelongToGroup, group.name())
    }

    #[must_use]
    pub fn in_word_list(words: impl Into<String>) -> Self {
        Self::with_string(ConditionKind::InWordList, words)
    }

    #[must_use]
    pub const fn num_anagrams(min: i32, max: i32) -> Self {
        Self::with_range(ConditionKind::NumAnagrams, min, max)
    }

    #[must_use]
    pub const fn probability_order(min: i32, max: i32) -> Self {
        Self::with_range(ConditionKind::ProbabilityOrder, min, max)
    }

    /// Flip the negation flag
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

fn parse_range(text: &str) -> Option<(i32, i32)> {
    let text = text.trim();
    match text.split_once('-') {
        Some((min, max)) => {
            let min = if min.trim().is_empty() {
                0
            } else {
                min.trim().parse().ok()?
            };
            let max = if max.trim().is_empty() {
                i32::MAX
            } else {
                max.trim().parse().ok()?
            };
            Some((min, max))
        }
        None => {
            let value = text.parse().ok()?;
            Some((value, value))
        }
    }
}

impl FromStr for SearchCondition {
    type Err = Error;

    /// Parse `[!]kind:value`, for example `pattern:C?T`, `!prefix:S`,
    /// `anagrams:2-`, `consist:AEIOU:50-100` or `group:Hook Words`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCondition(text.to_string());

        let trimmed = text.trim();
        let (negated, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (keyword, value) = body.split_once(':').ok_or_else(invalid)?;
        let kind = ConditionKind::from_keyword(keyword.trim()).ok_or_else(invalid)?;

        let mut condition = if kind == ConditionKind::ConsistOf {
            let (letters, range) = value.rsplit_once(':').ok_or_else(invalid)?;
            let (min, max) = parse_range(range).ok_or_else(invalid)?;
            Self::consist_of(letters.trim(), min, max)
        } else if kind.takes_range() {
            let (min, max) = parse_range(value).ok_or_else(invalid)?;
            Self::with_range(kind, min, max)
        } else {
            Self::with_string(kind, value.trim())
        };
        condition.negated = negated;
        Ok(condition)
    }
}

impl fmt::Display for SearchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        write!(f, "{}:", self.kind.keyword())?;
        match self.kind {
            ConditionKind::ConsistOf => write!(
                f,
                "{}:{}-{}",
                self.string_value, self.min_value, self.max_value
            ),
            kind if kind.takes_range() => write!(f, "{}-{}", self.min_value, self.max_value),
            _ => f.write_str(&self.string_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> SearchCondition {
        text.parse().unwrap()
    }

    #[test]
    fn parse_string_conditions() {
        assert_eq!(parse("pattern:C?T"), SearchCondition::pattern("C?T"));
        assert_eq!(parse("anagram:AET?"), SearchCondition::anagram("AET?"));
        assert_eq!(parse("list:CAT DOG"), SearchCondition::in_word_list("CAT DOG"));
        assert_eq!(
            parse("group:Hook Words"),
            SearchCondition::group(WordGroup::HookWords)
        );
    }

    #[test]
    fn parse_negation() {
        let condition = parse("!prefix:S");
        assert!(condition.negated);
        assert_eq!(condition.kind, ConditionKind::Prefix);
        assert_eq!(condition.string_value, "S");
    }

    #[test]
    fn parse_ranges() {
        assert_eq!(parse("length:5"), SearchCondition::length(5, 5));
        assert_eq!(parse("anagrams:2-4"), SearchCondition::num_anagrams(2, 4));
        assert_eq!(parse("anagrams:2-"), SearchCondition::num_anagrams(2, i32::MAX));
        assert_eq!(parse("prob:-10"), SearchCondition::probability_order(0, 10));
    }

    #[test]
    fn parse_consist_of() {
        assert_eq!(
            parse("consist:AEIOU:50-100"),
            SearchCondition::consist_of("AEIOU", 50, 100)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("pattern".parse::<SearchCondition>().is_err());
        assert!("colour:RED".parse::<SearchCondition>().is_err());
        assert!("length:five".parse::<SearchCondition>().is_err());
        assert!("consist:AEIOU".parse::<SearchCondition>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for text in ["!pattern:C?T", "length:2-7", "consist:AEIOU:50-100", "list:CAT DOG"] {
            assert_eq!(parse(text).to_string(), text);
        }
    }

    #[test]
    fn graph_native_kinds() {
        assert!(ConditionKind::PatternMatch.is_graph_native());
        assert!(ConditionKind::ConsistOf.is_graph_native());
        assert!(!ConditionKind::Prefix.is_graph_native());
        assert!(!ConditionKind::InWordList.is_graph_native());
        assert!(!ConditionKind::ProbabilityOrder.is_graph_native());
    }
}
