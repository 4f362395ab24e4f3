use plain_bst::{Order, Tree};
use quickcheck_macros::quickcheck;

use crate::SmallKey;

fn build<K: Ord + Clone>(xs: &[K]) -> Tree<K> {
    xs.iter().cloned().collect()
}

fn sorted<K: Ord + Clone>(xs: &[K]) -> Vec<K> {
    let mut xs = xs.to_vec();
    xs.sort();
    xs
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.in_order().copied().eq(sorted(&xs))
}

#[quickcheck]
fn count_matches_inserts(xs: Vec<SmallKey>) -> bool {
    build(&xs).count() == xs.len()
}

#[quickcheck]
fn min_is_smallest_key(xs: Vec<i32>) -> bool {
    build(&xs).min() == xs.iter().min()
}

#[quickcheck]
fn every_order_is_a_permutation(xs: Vec<SmallKey>) -> bool {
    let tree = build(&xs);
    let expected = sorted(&xs);

    Order::ALL.into_iter().all(|order| {
        let mut keys: Vec<_> = tree.traverse(order).copied().collect();
        keys.sort();
        keys == expected
    })
}

#[quickcheck]
fn traversals_are_repeatable(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    Order::ALL
        .into_iter()
        .all(|order| tree.traverse(order).eq(tree.traverse(order)))
}

#[quickcheck]
fn pre_order_rebuilds_same_tree(xs: Vec<SmallKey>) -> bool {
    let tree = build(&xs);
    let rebuilt: Tree<_> = tree.pre_order().copied().collect();

    rebuilt.pre_order().eq(tree.pre_order()) && rebuilt.post_order().eq(tree.post_order())
}

#[quickcheck]
fn root_is_first_in_pre_order_and_last_in_post_order(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.pre_order().next() == xs.first() && tree.post_order().last() == xs.first()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn height_of_distinct_sorted_input_is_count(xs: Vec<i16>) -> bool {
    let mut xs = sorted(&xs);
    xs.dedup();
    let tree = build(&xs);

    tree.height() == tree.count()
}

#[quickcheck]
fn height_of_repeated_key_is_count(key: SmallKey, times: u8) -> bool {
    let tree: Tree<_> = std::iter::repeat(key).take(times as usize).collect();

    tree.height() == times as usize && tree.count() == times as usize
}

#[test]
fn sorted_input_with_duplicates_is_shorter() {
    // The second 4 goes left of the root, 7 goes right.
    let tree = build(&[4, 4, 7]);
    assert_eq!(tree.count(), 3);
    assert_eq!(tree.height(), 2);

    let tree = build(&[5, 5, 5]);
    assert_eq!(tree.height(), 3);
}
