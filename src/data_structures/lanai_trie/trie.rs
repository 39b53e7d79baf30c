// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Main implementation of the Lanai Counting Trie.

use std::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::data_structures::lanai_trie::config::LanaiTrieConfig;
use crate::data_structures::lanai_trie::error::LanaiTrieError;
use crate::data_structures::lanai_trie::node::TrieNode;
use crate::data_structures::lanai_trie::LanaiTrieResult;

/// A counting trie with target-set fraction queries.
///
/// The Lanai Trie stores a multiset of words (ordered sequences of discrete
/// symbols) and tracks, for every node, how many insertions passed through
/// it. Since every non-root node has exactly one incoming symbol edge, the
/// per-node counts double as per-symbol frequencies, which is what the
/// `fraction_in_set` query aggregates over.
///
/// Counting rule: each insertion increments the count of every node it
/// visits, once per node. Inserting `"cat"` then `"car"` yields counts
/// c=2, a=2, t=1, r=1. Inserting the same word twice doubles every count
/// along its path.
///
/// The trie is a plain single-threaded ownership tree. Embeddings that need
/// concurrent access must wrap the whole trie in one exclusive lock, since
/// the fraction query is a full-tree read.
///
/// # Type Parameters
///
/// * `S` - Edge symbol type. Must implement `Hash + Eq + Copy`; `char` and
///   `u8` are the typical choices, but any discrete symbol works.
///
/// # Examples
///
/// ```
/// use lanai_trie_lib::data_structures::lanai_trie::LanaiTrie;
///
/// let mut trie = LanaiTrie::new();
/// trie.insert("cat".chars()).unwrap();
/// trie.insert("car".chars()).unwrap();
///
/// // 5 of the 6 letter occurrences are drawn from {c, a, t}
/// let fraction = trie.fraction_in_set(['c', 'a', 't']).unwrap();
/// assert!((fraction - 5.0 / 6.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug)]
pub struct LanaiTrie<S: Hash + Eq + Copy> {
    /// Configuration for the trie
    config: LanaiTrieConfig,

    /// The root node; holds no incoming edge, so its `count` stays zero.
    /// Its `word_count` tracks empty-word insertions.
    root: TrieNode<S>,

    /// Total number of successful insert calls, empty words included
    insertions: u64,
}

impl<S: Hash + Eq + Copy> LanaiTrie<S> {
    /// Creates a new empty trie with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty trie with the specified configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            config,
            root: TrieNode::new(),
            insertions: 0,
        }
    }

    /// Builds a trie from a collection of words, inserting them in order.
    ///
    /// # Errors
    ///
    /// Returns `WordTooLong` if any word exceeds a configured depth limit.
    /// Words inserted before the offending one remain in the trie.
    pub fn from_words<W, I>(words: I) -> LanaiTrieResult<Self>
    where
        W: IntoIterator<Item = S>,
        I: IntoIterator<Item = W>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word)?;
        }
        Ok(trie)
    }

    /// Inserts a word into the trie, counting it with multiplicity.
    ///
    /// Starting at the root, each symbol descends one edge (creating the
    /// child lazily if needed) and increments the visited node's count.
    /// The final node's word count and the trie's insertion counter are
    /// then bumped.
    ///
    /// An empty word creates no nodes and contributes no symbol counts; it
    /// is still recorded as an insertion, terminating at the root.
    ///
    /// # Errors
    ///
    /// Returns `WordTooLong` if the word exceeds a configured depth limit.
    /// A rejected word leaves the trie completely untouched.
    pub fn insert<W>(&mut self, word: W) -> LanaiTrieResult<()>
    where
        W: IntoIterator<Item = S>,
    {
        let symbols: Vec<S> = word.into_iter().collect();

        // Depth check happens before any mutation so a rejected word
        // cannot leave partial counts behind.
        if let Some(max_depth) = self.config.get_max_depth() {
            if symbols.len() > max_depth {
                return Err(LanaiTrieError::WordTooLong {
                    length: symbols.len(),
                    max_depth,
                });
            }
        }

        let mut node = &mut self.root;
        for symbol in symbols.iter().copied() {
            node = node.get_or_create_child(symbol);
            node.increment();
        }
        node.word_count += 1;
        self.insertions += 1;

        tracing::trace!(length = symbols.len(), "inserted word into trie");
        Ok(())
    }

    /// Computes the fraction of all inserted symbol occurrences that belong
    /// to the target set.
    ///
    /// This walks the entire trie, summing every node's count into a grand
    /// total and, for nodes whose incoming edge symbol is in `targets`,
    /// into a matched total. The result is `matched / total`, always in
    /// `[0.0, 1.0]`. Symbols are counted with repetition: `"aa"` counts the
    /// symbol `a` twice.
    ///
    /// The query is a pure read and never mutates the trie. Duplicate
    /// symbols in `targets` are harmless; only membership matters.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTrie` if the trie holds no symbol occurrences (no
    /// insertions yet, or only empty words), since the ratio would divide
    /// by zero.
    pub fn fraction_in_set<I>(&self, targets: I) -> LanaiTrieResult<f64>
    where
        I: IntoIterator<Item = S>,
    {
        let targets: HashSet<S> = targets.into_iter().collect();

        let mut total: u64 = 0;
        let mut matched: u64 = 0;
        Self::accumulate(&self.root, &targets, &mut total, &mut matched);

        if total == 0 {
            return Err(LanaiTrieError::EmptyTrie);
        }

        tracing::debug!(matched, total, "computed target-set fraction");
        Ok(matched as f64 / total as f64)
    }

    /// Returns the aggregate occurrence count of every symbol in the trie.
    ///
    /// A symbol that appears at several positions or along several prefixes
    /// contributes all of its per-node counts to a single entry. The values
    /// sum to `total_symbols`.
    pub fn symbol_frequencies(&self) -> HashMap<S, u64> {
        let mut frequencies = HashMap::new();
        Self::fold_frequencies(&self.root, &mut frequencies);
        frequencies
    }

    /// Returns how many times the exact word was inserted.
    ///
    /// Returns 0 for words never inserted, including words that only exist
    /// as prefixes of inserted words. The empty word reports the number of
    /// empty-word insertions.
    pub fn word_count<W>(&self, word: W) -> u64
    where
        W: IntoIterator<Item = S>,
    {
        let mut node = &self.root;
        for symbol in word {
            match node.child(&symbol) {
                Some(child) => node = child,
                None => return 0,
            }
        }
        node.word_count
    }

    /// Checks whether the exact word was inserted at least once.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        self.word_count(word) > 0
    }

    /// Returns the total number of symbol occurrences in the trie, counted
    /// with repetition across all insertions.
    pub fn total_symbols(&self) -> u64 {
        let mut total = 0;
        let mut matched = 0;
        Self::accumulate(&self.root, &HashSet::new(), &mut total, &mut matched);
        total
    }

    /// Returns the total number of insertions, empty words included.
    ///
    /// Useful for normalizing by word count rather than symbol count.
    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    /// Returns the number of distinct complete words in the trie.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        Self::count_words(&self.root)
    }

    /// Checks whether the trie has seen no insertions at all.
    pub fn is_empty(&self) -> bool {
        self.insertions == 0
    }

    /// Removes every word from the trie, resetting it to its initial state.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.insertions = 0;
    }

    /// Get the configuration of this trie.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Depth-first walk summing child counts into `total` and, for edges
    /// labeled with a target symbol, into `matched`. The root contributes
    /// nothing; it has no incoming edge.
    fn accumulate(node: &TrieNode<S>, targets: &HashSet<S>, total: &mut u64, matched: &mut u64) {
        for (symbol, child) in &node.children {
            *total += child.count;
            if targets.contains(symbol) {
                *matched += child.count;
            }
            Self::accumulate(child, targets, total, matched);
        }
    }

    /// Depth-first walk folding per-node counts into per-symbol totals.
    fn fold_frequencies(node: &TrieNode<S>, frequencies: &mut HashMap<S, u64>) {
        for (symbol, child) in &node.children {
            *frequencies.entry(*symbol).or_insert(0) += child.count;
            Self::fold_frequencies(child, frequencies);
        }
    }

    /// Counts nodes holding at least one complete word, the root included
    /// (empty-word insertions terminate there).
    fn count_words(node: &TrieNode<S>) -> usize {
        let mut count = usize::from(node.word_count > 0);
        for child in node.children.values() {
            count += Self::count_words(child);
        }
        count
    }
}

impl LanaiTrie<char> {
    /// Inserts the characters of a string slice as one word.
    ///
    /// Convenience for the common `S = char` case.
    ///
    /// # Errors
    ///
    /// Returns `WordTooLong` if the word exceeds a configured depth limit.
    pub fn insert_str(&mut self, word: &str) -> LanaiTrieResult<()> {
        self.insert(word.chars())
    }
}

impl<S: Hash + Eq + Copy> Default for LanaiTrie<S> {
    fn default() -> Self {
        Self::new()
    }
}
