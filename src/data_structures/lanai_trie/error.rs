// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the Lanai Counting Trie.
//!
//! This module defines the error types that can occur during Lanai Trie operations.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LanaiTrieError {
    /// Error when a fraction query is made against a trie that holds no
    /// symbol occurrences. The ratio would be a division by zero.
    #[error("Cannot compute a fraction over an empty trie (no symbols inserted)")]
    EmptyTrie,

    /// Error when a word exceeds the configured maximum trie depth.
    #[error("Word of length {length} exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// The length of the rejected word.
        length: usize,
        /// The configured depth limit.
        max_depth: usize,
    },
}

// Display implementation is automatically provided by thiserror
