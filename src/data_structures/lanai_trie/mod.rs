// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lanai Counting Trie for symbol-frequency aggregation.
//!
//! A trie variant whose nodes carry occurrence counts rather than arbitrary
//! payloads. Built from a multiset of words, it answers one aggregate query:
//! of all the individual symbol occurrences used to build the trie, what
//! fraction are drawn from a caller-supplied target set?
//!
//! # Features
//!
//! - Per-node-per-insertion counting: every node a word visits is
//!   incremented once, so shared prefixes accumulate naturally.
//! - Symbol-agnostic: any `Hash + Eq + Copy` symbol type works as an edge
//!   label (`char`, `u8` DNA bases, token ids, ...).
//! - Whole-word multiplicity tracking alongside the per-symbol counts.
//! - Simple single-threaded ownership tree; no locks, no unsafe code.
//!
//! # Example
//!
//! ```
//! use lanai_trie_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let trie = LanaiTrie::from_words(["cat".chars(), "car".chars()]).unwrap();
//!
//! // c=2, a=2, t=1 of 6 total letter occurrences
//! let fraction = trie.fraction_in_set(['c', 'a', 't']).unwrap();
//! assert!((fraction - 5.0 / 6.0).abs() < f64::EPSILON);
//! ```

// Module declarations
mod config;
mod error;
mod node;
mod trie;

#[cfg(test)]
mod tests;

// Re-exports
pub use config::LanaiTrieConfig;
pub use error::LanaiTrieError;
pub use trie::LanaiTrie;

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;
