// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Property-based tests for the Lanai Counting Trie.

use hashbrown::HashSet;
use proptest::prelude::*;

use crate::data_structures::lanai_trie::LanaiTrie;

// Strategy for generating words over a small alphabet so prefixes collide
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcde]{0,12}").unwrap()
}

// Strategy for generating non-empty word collections
fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..20)
}

// Strategy for generating target sets over the same alphabet
fn targets_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'e'), 0..5)
}

fn build_trie(words: &[String]) -> LanaiTrie<char> {
    let mut trie = LanaiTrie::new();
    for word in words {
        trie.insert_str(word).unwrap();
    }
    trie
}

proptest! {
    // Property: the fraction is always a valid ratio in [0, 1]
    #[test]
    fn prop_fraction_in_unit_interval(words in words_strategy(), targets in targets_strategy()) {
        let trie = build_trie(&words);

        if let Ok(fraction) = trie.fraction_in_set(targets) {
            prop_assert!((0.0..=1.0).contains(&fraction));
        } else {
            // The query only fails when no symbols were ever inserted
            prop_assert_eq!(trie.total_symbols(), 0);
        }
    }

    // Property: targeting every symbol actually used yields exactly 1.0
    #[test]
    fn prop_full_alphabet_gives_one(words in words_strategy()) {
        let trie = build_trie(&words);
        let alphabet: HashSet<char> = words.iter().flat_map(|w| w.chars()).collect();

        if trie.total_symbols() > 0 {
            prop_assert_eq!(trie.fraction_in_set(alphabet).unwrap(), 1.0);
        }
    }

    // Property: an empty target set yields exactly 0.0
    #[test]
    fn prop_empty_target_gives_zero(words in words_strategy()) {
        let trie = build_trie(&words);

        if trie.total_symbols() > 0 {
            prop_assert_eq!(trie.fraction_in_set([]).unwrap(), 0.0);
        }
    }

    // Property: the query depends on the multiset of words, not their order
    #[test]
    fn prop_insertion_order_invariance(words in words_strategy(), targets in targets_strategy()) {
        let forward = build_trie(&words);
        let mut reversed_words = words.clone();
        reversed_words.reverse();
        let backward = build_trie(&reversed_words);

        prop_assert_eq!(forward.symbol_frequencies(), backward.symbol_frequencies());
        prop_assert_eq!(
            forward.fraction_in_set(targets.iter().copied()).ok(),
            backward.fraction_in_set(targets.iter().copied()).ok()
        );
    }

    // Property: inserting every word twice doubles every aggregate but
    // leaves the fraction unchanged
    #[test]
    fn prop_double_insert_doubles_counts(words in words_strategy(), targets in targets_strategy()) {
        let once = build_trie(&words);
        let mut doubled_words = words.clone();
        doubled_words.extend(words.iter().cloned());
        let twice = build_trie(&doubled_words);

        prop_assert_eq!(twice.total_symbols(), once.total_symbols() * 2);
        prop_assert_eq!(twice.insertions(), once.insertions() * 2);
        for (symbol, count) in once.symbol_frequencies() {
            prop_assert_eq!(twice.symbol_frequencies()[&symbol], count * 2);
        }
        prop_assert_eq!(
            once.fraction_in_set(targets.iter().copied()).ok(),
            twice.fraction_in_set(targets.iter().copied()).ok()
        );
    }

    // Property: total symbol count equals the summed length of all words
    #[test]
    fn prop_total_symbols_matches_input_length(words in words_strategy()) {
        let trie = build_trie(&words);
        let expected: u64 = words.iter().map(|w| w.chars().count() as u64).sum();

        prop_assert_eq!(trie.total_symbols(), expected);
        let frequency_sum: u64 = trie.symbol_frequencies().values().sum();
        prop_assert_eq!(frequency_sum, expected);
    }

    // Property: every inserted word is found with at least its multiplicity
    #[test]
    fn prop_inserted_words_are_found(words in words_strategy()) {
        let trie = build_trie(&words);

        for word in &words {
            let multiplicity = words.iter().filter(|w| *w == word).count() as u64;
            prop_assert_eq!(trie.word_count(word.chars()), multiplicity);
            prop_assert!(trie.contains(word.chars()));
        }
    }
}
