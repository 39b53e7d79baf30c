// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Configuration for the Lanai Counting Trie.

/// Configuration for the Lanai Counting Trie.
///
/// The defaults impose no limits: every well-formed word is accepted and
/// `insert` cannot fail. A depth cap can be configured for embeddings that
/// must bound trie depth (and therefore traversal recursion) against
/// adversarial input lengths.
#[derive(Debug, Clone)]
pub struct LanaiTrieConfig {
    /// Optional maximum word length accepted by `insert`.
    /// `None` means unbounded.
    max_depth: Option<usize>,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_depth: None (unbounded)
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// Set the maximum word length (trie depth) accepted by `insert`.
    ///
    /// Words longer than this are rejected with `WordTooLong` and leave the
    /// trie untouched.
    ///
    /// # Panics
    ///
    /// Panics if `max_depth` is zero; a trie that cannot hold a single
    /// symbol is a configuration mistake.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        if max_depth == 0 {
            panic!("Maximum depth must be greater than 0");
        }
        self.max_depth = Some(max_depth);
        self
    }

    /// Get the configured depth limit, if any.
    pub fn get_max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
