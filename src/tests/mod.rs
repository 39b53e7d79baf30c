//! Test modules for the Lanai Trie library.
//!
//! This module contains internal testing infrastructure, including:
//! - Component tests for the counting trie
//! - Test fixtures and proptest strategies
//!
//! The test philosophy follows the project standards:
//! - Testing all error paths and edge cases
//! - Property-based testing for input validation
//! - Concrete scenario tests pinned to hand-computed expectations


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{dna_word_strategy, word_strategy, words_strategy};
