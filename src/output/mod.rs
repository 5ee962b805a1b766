//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_alphagram_groups, print_anagram_result, print_check_result, print_compile_result,
    print_define_result, print_hook_result, print_lexicon_info, print_search_result,
};
