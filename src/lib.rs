//! Lanai Trie Library
//!
//! This library implements a counting trie: a trie whose nodes carry
//! occurrence counts, built from a multiset of words, together with a
//! query that reports the fraction of all inserted symbol occurrences
//! belonging to a caller-supplied target set.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries
//! - Single-threaded ownership trees, no locks and no unsafe code
//! - Comprehensive error handling and propagation
//! - Symbol-agnostic generic API

// Re-export public modules
pub mod data_structures;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai Trie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export the primary types at the crate root for convenience
pub use data_structures::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};
