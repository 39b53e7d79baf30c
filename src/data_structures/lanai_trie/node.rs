// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the Lanai Counting Trie.
//!
//! This module provides the TrieNode structure used in the Lanai Trie
//! implementation. Each node owns its children outright, so the trie forms
//! a simple rooted ownership tree with no sharing and no interior locking.

use std::hash::Hash;

use hashbrown::HashMap;

/// A node in the Lanai Counting Trie.
///
/// Every node except the root corresponds to exactly one incoming symbol
/// edge. `count` records how many insertions traversed that edge, which is
/// the same as the frequency of the edge symbol at this depth along this
/// prefix. `word_count` records how many insertions terminated exactly here.
///
/// # Type Parameters
///
/// * `S` - Edge symbol type. Any hashable, copyable discrete symbol works;
///   the trie itself is symbol-agnostic.
#[derive(Debug)]
pub(crate) struct TrieNode<S: Hash + Eq + Copy> {
    /// Map of symbols to exclusively owned child nodes
    pub(crate) children: HashMap<S, TrieNode<S>>,

    /// Number of insertions whose path passed through this node
    pub(crate) count: u64,

    /// Number of insertions that ended exactly at this node
    pub(crate) word_count: u64,
}

impl<S: Hash + Eq + Copy> TrieNode<S> {
    /// Creates a new empty trie node with both counters at zero.
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            count: 0,
            word_count: 0,
        }
    }

    /// Returns the child for `symbol`, creating and registering an empty
    /// node first if no such child exists yet.
    ///
    /// Children are created lazily; this is the only place nodes are born
    /// during insertion.
    pub(crate) fn get_or_create_child(&mut self, symbol: S) -> &mut TrieNode<S> {
        self.children.entry(symbol).or_insert_with(TrieNode::new)
    }

    /// Read-only child lookup.
    pub(crate) fn child(&self, symbol: &S) -> Option<&TrieNode<S>> {
        self.children.get(symbol)
    }

    /// Increases this node's visit count by one.
    pub(crate) fn increment(&mut self) {
        self.count += 1;
    }
}

impl<S: Hash + Eq + Copy> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}
