//! Named word groups for Belong-To-Group conditions

use std::fmt;

/// A built-in class of words a search can test membership in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordGroup {
    /// Words that stay valid with their first or last letter removed
    HookWords,
    /// Words that stay valid with their first letter removed
    FrontHooks,
    /// Words that stay valid with their last letter removed
    BackHooks,
    /// Seven-letter words formed by adding one letter to a six-letter stem
    TypeOneSevens,
    /// Eight-letter words formed by adding two letters to a six-letter stem
    TypeOneEights,
    /// Eight-letter words formed by adding one letter to a seven-letter stem
    EightsFromSevenLetterStems,
    /// Words new to the OWL2 lexicon, backed by a flat word list
    NewInOwl2,
}

impl WordGroup {
    pub const ALL: [Self; 7] = [
        Self::HookWords,
        Self::FrontHooks,
        Self::BackHooks,
        Self::TypeOneSevens,
        Self::TypeOneEights,
        Self::EightsFromSevenLetterStems,
        Self::NewInOwl2,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HookWords => "Hook Words",
            Self::FrontHooks => "Front Hooks",
            Self::BackHooks => "Back Hooks",
            Self::TypeOneSevens => "Type I Sevens",
            Self::TypeOneEights => "Type I Eights",
            Self::EightsFromSevenLetterStems => "Eights From Seven-Letter Stems",
            Self::NewInOwl2 => "New in OWL2",
        }
    }

    /// Look a group up by display name, ignoring case and surrounding space
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.name().eq_ignore_ascii_case(name))
    }

    /// Whether membership is defined by an imported word list rather than
    /// by a rule over the lexicon
    #[must_use]
    pub const fn is_list_backed(self) -> bool {
        matches!(self, Self::NewInOwl2)
    }
}

impl fmt::Display for WordGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for group in WordGroup::ALL {
            assert_eq!(WordGroup::from_name(group.name()), Some(group));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(
            WordGroup::from_name("  type i sevens "),
            Some(WordGroup::TypeOneSevens)
        );
        assert_eq!(WordGroup::from_name("Palindromes"), None);
    }

    #[test]
    fn only_owl2_is_list_backed() {
        let backed: Vec<_> = WordGroup::ALL
            .into_iter()
            .filter(|g| g.is_list_backed())
            .collect();
        assert_eq!(backed, vec![WordGroup::NewInOwl2]);
    }
}
