//! Property tests: red-black invariants, ordering, size and height bound
//! across random insertion sequences.

use proptest::prelude::*;
use rb_tree::data_gen::{generate_descending, generate_distinct_shuffled, generate_uniform_seeded};
use rb_tree::utils::max_height;
use rb_tree::{Color, DuplicatePolicy, Key, NodeRef, RedBlackTree, TreeConfig};
use std::collections::BTreeSet;

fn leaf_depths(node: Option<NodeRef<'_>>, blacks: usize, out: &mut Vec<usize>) {
    match node {
        None => out.push(blacks),
        Some(n) => {
            let blacks = blacks + usize::from(n.color() == Color::Black);
            leaf_depths(n.left(), blacks, out);
            leaf_depths(n.right(), blacks, out);
        }
    }
}

fn has_red_red(node: Option<NodeRef<'_>>) -> bool {
    let Some(n) = node else { return false };
    let red_child = [n.left(), n.right()].into_iter().flatten().any(|c| c.is_red());
    (n.is_red() && red_child) || has_red_red(n.left()) || has_red_red(n.right())
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn single_key_is_black_leaf_root() {
    let tree = RedBlackTree::new_with_keys(&[10]);
    let root = tree.root().unwrap();
    assert_eq!((root.value(), root.color()), (10, Color::Black));
    assert!(root.left().is_none() && root.right().is_none());
}

#[test]
fn ascending_three_rotates_left_at_root() {
    let tree = RedBlackTree::new_with_keys(&[10, 20, 30]);
    assert_eq!(format!("{:?}", tree.root().unwrap()), "20B(10R, 30R)");
}

#[test]
fn zig_zag_rotates_twice() {
    let tree = RedBlackTree::new_with_keys(&[10, 20, 15]);
    assert_eq!(format!("{:?}", tree.root().unwrap()), "15B(10R, 20R)");
}

#[test]
fn ascending_five_stays_balanced() {
    let tree = RedBlackTree::new_with_keys(&[10, 20, 30, 40, 50]);
    tree.validate().unwrap();
    assert_eq!(tree.values(), vec![10, 20, 30, 40, 50]);
}

#[test]
fn descending_fifty_respects_height_bound() {
    let tree = RedBlackTree::new_with_keys(&generate_descending(50, 50));
    tree.validate().unwrap();
    assert!(tree.height() <= 11, "height {} exceeds 11", tree.height());
}

#[test]
fn large_shuffled_workload() {
    let keys = generate_distinct_shuffled(10_000, -5_000, 1234);
    let tree = RedBlackTree::new_with_keys(&keys);
    tree.validate().unwrap();
    assert_eq!(tree.len(), 10_000);
    assert!(tree.height() <= max_height(tree.len()));
    assert_eq!(tree.min(), Some(-5_000));
    assert_eq!(tree.max(), Some(4_999));
}

#[test]
fn heavy_duplicates_keep_colors_valid() {
    // narrow range forces many ties
    let keys = generate_uniform_seeded(2_000, 0, 9, 99);
    let tree = RedBlackTree::new_with_keys(&keys);
    tree.validate().unwrap();
    assert_eq!(tree.len(), 2_000);
    assert!(tree.height() <= max_height(tree.len()));

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(tree.values(), sorted);
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #[test]
    fn invariants_hold_after_every_insert(keys in prop::collection::vec(any::<Key>(), 0..200)) {
        let mut tree = RedBlackTree::new();
        for &key in &keys {
            tree.insert(key);
            prop_assert!(tree.validate().is_ok(), "{:?}", tree.validate());
            prop_assert!(tree.root().is_none_or(|r| r.is_black()));
            prop_assert!(!has_red_red(tree.root()));

            let mut depths = Vec::new();
            leaf_depths(tree.root(), 0, &mut depths);
            prop_assert!(depths.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn in_order_matches_inserted_multiset(keys in prop::collection::vec(-1000i64..1000, 0..300)) {
        let tree: RedBlackTree = keys.iter().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(tree.values(), sorted);
        prop_assert_eq!(tree.len(), keys.len());
    }

    #[test]
    fn distinct_keys_preserve_set(keys in prop::collection::btree_set(any::<Key>(), 0..300)) {
        let mut shuffled: Vec<Key> = keys.iter().copied().collect();
        shuffled.reverse();
        let tree = RedBlackTree::new_with_keys(&shuffled);
        prop_assert!(tree.values().into_iter().eq(keys.iter().copied()));
        for key in &keys {
            prop_assert!(tree.contains(*key));
        }
    }

    #[test]
    fn height_is_logarithmic(keys in prop::collection::vec(any::<Key>(), 1..500)) {
        let tree = RedBlackTree::new_with_keys(&keys);
        prop_assert!(tree.height() <= max_height(tree.len()));
    }

    #[test]
    fn ignore_policy_behaves_as_set(keys in prop::collection::vec(-50i64..50, 0..300)) {
        let mut tree = RedBlackTree::with_config(TreeConfig::new().duplicates(DuplicatePolicy::Ignore));
        tree.extend(keys.iter().copied());
        tree.validate().unwrap();

        let expected: BTreeSet<Key> = keys.iter().copied().collect();
        prop_assert!(tree.values().into_iter().eq(expected.into_iter()));
    }

    #[test]
    fn root_query_is_stable(keys in prop::collection::vec(any::<Key>(), 0..100)) {
        let tree = RedBlackTree::new_with_keys(&keys);
        prop_assert_eq!(format!("{:?}", tree.root()), format!("{:?}", tree.root()));
    }

    #[test]
    fn predecessor_matches_btree(keys in prop::collection::btree_set(-500i64..500, 1..100), probe in -600i64..600) {
        let tree = RedBlackTree::new_with_keys(&keys.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.predecessor(probe), keys.range(..=probe).next_back().copied());
        prop_assert_eq!(tree.successor(probe), keys.range(probe..).next().copied());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_inserts(
        first in prop::collection::vec(any::<Key>(), 0..50),
        later in prop::collection::vec(any::<Key>(), 1..50),
    ) {
        let mut tree = RedBlackTree::new_with_keys(&first);
        let snapshot = tree.clone();
        let before = format!("{:?}", snapshot.root());
        tree.extend(later.iter().copied());

        prop_assert_eq!(format!("{:?}", snapshot.root()), before);
        prop_assert_eq!(snapshot.len(), first.len());
        prop_assert!(tree.validate().is_ok());
    }
}
