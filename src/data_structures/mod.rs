//! Data structures for the Lanai Trie library.
//!
//! This module contains the counting-trie data structure family.
//! All implementations adhere to the strict project requirements:
//! - No unsafe code
//! - No hidden global state
//! - Straightforward ownership trees with linear-time traversals

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};
