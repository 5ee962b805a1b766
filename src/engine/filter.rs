//! Per-word checks the graph can't do: hooks, groups, lists, anagram counts

use super::WordEngine;
use crate::core::{alphagram, letter_counts};
use crate::error::{Error, Result};
use crate::search::{ConditionKind, SearchCondition, WordGroup};
use crate::wordlists::words_from_list;
use rustc_hash::FxHashSet;
use tracing::warn;

#[derive(Debug, Clone)]
enum Check {
    /// `prefix` + word is acceptable
    Prefix(String),
    /// word + `suffix` is acceptable
    Suffix(String),
    Group(WordGroup),
    InList(FxHashSet<String>),
    /// Negation never applies to anagram counts
    NumAnagrams { min: i64, max: i64 },
}

/// A compiled engine-side condition
#[derive(Debug, Clone)]
pub(super) struct PostFilter {
    check: Check,
    negated: bool,
}

impl PostFilter {
    /// Compile one condition; `None` for kinds handled elsewhere
    pub(super) fn compile(condition: &SearchCondition, strict: bool) -> Result<Option<Self>> {
        let check = match condition.kind {
            ConditionKind::Prefix => Check::Prefix(condition.string_value.to_ascii_uppercase()),
            ConditionKind::Suffix => Check::Suffix(condition.string_value.to_ascii_uppercase()),
            ConditionKind::BelongToGroup => match WordGroup::from_name(&condition.string_value) {
                Some(group) => Check::Group(group),
                None if strict => {
                    return Err(Error::UnknownGroup(condition.string_value.clone()));
                }
                None => {
                    warn!(group = %condition.string_value, "ignoring unknown word group");
                    return Ok(None);
                }
            },
            ConditionKind::InWordList => {
                Check::InList(words_from_list(&condition.string_value).into_iter().collect())
            }
            ConditionKind::NumAnagrams => Check::NumAnagrams {
                min: i64::from(condition.min_value),
                max: i64::from(condition.max_value),
            },
            _ => return Ok(None),
        };
        Ok(Some(Self {
            check,
            negated: condition.negated,
        }))
    }
}

impl WordEngine {
    pub(super) fn passes(&self, word: &str, filters: &[PostFilter]) -> bool {
        filters.iter().all(|filter| {
            let hit = match &filter.check {
                Check::Prefix(prefix) => self.is_acceptable(&format!("{prefix}{word}")),
                Check::Suffix(suffix) => self.is_acceptable(&format!("{word}{suffix}")),
                Check::Group(group) => self.is_group_member(word, *group),
                Check::InList(words) => words.contains(word),
                Check::NumAnagrams { min, max } => {
                    let count = i64::from(self.num_anagrams(word));
                    return (*min..=*max).contains(&count);
                }
            };
            hit != filter.negated
        })
    }

    /// Whether an acceptable, upper-case word belongs to `group`
    #[must_use]
    pub fn is_group_member(&self, word: &str, group: WordGroup) -> bool {
        if !word.is_ascii() {
            return false;
        }
        let len = word.len();
        match group {
            WordGroup::HookWords => {
                len > 1 && (self.is_acceptable(&word[1..]) || self.is_acceptable(&word[..len - 1]))
            }
            WordGroup::FrontHooks => len > 1 && self.is_acceptable(&word[1..]),
            WordGroup::BackHooks => len > 1 && self.is_acceptable(&word[..len - 1]),
            WordGroup::TypeOneSevens => len == 7 && self.drops_to_stem(word, 6),
            WordGroup::EightsFromSevenLetterStems => len == 8 && self.drops_to_stem(word, 7),
            WordGroup::TypeOneEights => {
                if len != 8 {
                    return false;
                }
                let have = letter_counts(word.as_bytes());
                self.stems.alphagrams(6).any(|stem| {
                    let need = letter_counts(stem.as_bytes());
                    need.iter().zip(have.iter()).all(|(n, h)| n <= h)
                })
            }
            WordGroup::NewInOwl2 => self
                .list_groups
                .get(&group)
                .is_some_and(|list| list.split_whitespace().any(|w| w.eq_ignore_ascii_case(word))),
        }
    }

    /// Removing one letter of `word` leaves the alphagram of a `stem_len` stem
    fn drops_to_stem(&self, word: &str, stem_len: usize) -> bool {
        let agram = alphagram(word);
        (0..agram.len()).any(|i| {
            let shorter = format!("{}{}", &agram[..i], &agram[i + 1..]);
            self.stems.contains_alphagram(stem_len, &shorter)
        })
    }
}
