//! Word Engine
//!
//! A lexicon engine for word games: loads word lists into a compact graph,
//! answers membership and hook queries, and runs multi-condition searches
//! (patterns, anagrams, word groups, anagram counts, probability order).
//!
//! # Quick Start
//!
//! ```rust
//! use word_engine::search::{SearchCondition, SearchSpec};
//! use word_engine::{EngineConfig, WordEngine};
//!
//! let mut engine = WordEngine::new(EngineConfig::new());
//! for word in ["AT", "CAT", "BAT", "ATE"] {
//!     engine.add_word(word);
//! }
//!
//! assert!(engine.is_acceptable("CAT"));
//! assert_eq!(engine.front_hook_letters("AT"), "bc");
//!
//! let spec = SearchSpec::new().with(SearchCondition::pattern("?AT"));
//! assert_eq!(engine.search(&spec, true).unwrap(), vec!["BAT", "CAT"]);
//! ```

// Letters, alphagrams and tile-bag combinatorics
pub mod core;

// Word graph and DAWG files
pub mod graph;

// Search specifications
pub mod search;

// Lexicon engine with side indices
pub mod engine;

// Word list file reading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;

pub use config::EngineConfig;
pub use engine::WordEngine;
pub use error::{Error, Result};
