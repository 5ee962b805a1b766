//! Core domain types for word games
//!
//! This module contains the letter arithmetic shared by the graph, the search
//! model and the engine. Everything here is pure and dependency-free.

mod alphagram;
mod letter_bag;

pub use alphagram::{
    ALPHABET_SIZE, LetterCounts, alphagram, index_letter, is_canonical, letter_counts,
    letter_index,
};
pub use letter_bag::{LetterBag, STANDARD_DISTRIBUTION, n_choose_k};
