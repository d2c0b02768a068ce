//! Property tests over random word sets.

use ctrie::Tree;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Words over a small alphabet so that prefixes are shared often.
fn word() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', 0u8, 0xFF]), 0..8)
}

fn word_set() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(word(), 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prefix_query_matches_filter(words in word_set(), prefix in word()) {
        let tree: Tree = words.iter().collect();
        let unique: BTreeSet<Vec<u8>> = words.iter().cloned().collect();

        let expected: Vec<Vec<u8>> = unique
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect();

        prop_assert_eq!(tree.find_words_with_prefix(&prefix), expected);
    }

    #[test]
    fn contains_matches_membership(words in word_set(), candidate in word()) {
        let tree: Tree = words.iter().collect();
        prop_assert_eq!(tree.contains(&candidate), words.contains(&candidate));
    }

    #[test]
    fn roundtrip_preserves_word_set(words in word_set()) {
        let tree: Tree = words.iter().collect();
        let decoded = Tree::from_bytes(&tree.to_bytes().unwrap()).unwrap();

        prop_assert_eq!(decoded.words(), tree.words());
        prop_assert_eq!(decoded.node_count(), tree.node_count());
    }

    #[test]
    fn insert_is_idempotent(words in word_set()) {
        let mut tree: Tree = words.iter().collect();
        let nodes = tree.node_count();
        let before = tree.words();

        for w in &words {
            tree.insert(w);
        }

        prop_assert_eq!(tree.node_count(), nodes);
        prop_assert_eq!(tree.words(), before);
    }

    #[test]
    fn node_count_is_bounded(words in word_set()) {
        let tree: Tree = words.iter().collect();
        let n = words.len();

        prop_assert!(tree.node_count() >= 1);
        prop_assert!(tree.node_count() <= 2 * n.max(1));
    }

    #[test]
    fn node_count_matches_structure(words in word_set()) {
        let tree: Tree = words.iter().collect();

        let mut counted = 0;
        let mut stack = vec![tree.root()];
        while let Some(node) = stack.pop() {
            counted += 1;
            for (key, child) in node.children() {
                prop_assert!(!child.label().is_empty());
                prop_assert_eq!(child.label()[0], key);
                stack.push(child);
            }
        }
        prop_assert_eq!(counted, tree.node_count());
    }
}
