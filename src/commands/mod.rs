//! Command implementations

pub mod anagrams;
pub mod check;
pub mod compile;
pub mod define;
pub mod hooks;
pub mod info;
pub mod search;

pub use anagrams::{AlphagramGroup, AnagramResult, find_anagrams, group_alphagrams};
pub use check::{CheckResult, WordVerdict, check_words};
pub use compile::{CompileResult, CompiledFile, compile_lexicon};
pub use define::{DefineResult, define_word};
pub use hooks::{HookResult, word_hooks};
pub use info::{LexiconInfo, lexicon_info};
pub use search::{SearchConfig, SearchResult, build_spec, run_search};
