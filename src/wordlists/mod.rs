//! Word list files
//!
//! Shared reading rules for word lists, stem lists, anagram-count files and
//! definition files.

pub mod loader;

pub use loader::{Entries, Entry, read_entries, simplify, words_from_list};
