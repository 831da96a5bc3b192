use linked_bst::error::Error;
use linked_bst::linked::Tree;

use std::collections::{BTreeMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and to a map counting how many copies of each item
/// should be stored. This way we can ensure that after a random smattering of adds and removes
/// we have the same multiset of items.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, counts: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(*x);
                *counts.entry(*x).or_default() += 1;
            }
            Op::Remove(x) => match counts.get_mut(x) {
                Some(count) => {
                    assert_eq!(tree.remove(x), Ok(*x));
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(x);
                    }
                }
                None => assert_eq!(tree.remove(x), Err(Error::NotFound)),
            },
        }
    }
}

fn expected_items(counts: &BTreeMap<i8, usize>) -> Vec<i8> {
    counts
        .iter()
        .flat_map(|(item, count)| std::iter::repeat(*item).take(*count))
        .collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let expected = expected_items(&counts);

    tree.inorder().copied().collect::<Vec<_>>() == expected
        && tree.len() == expected.len()
        && tree.iter().count() == tree.len()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let inorder: Vec<_> = tree.inorder().collect();

    inorder.windows(2).all(|pair| pair[0] <= pair[1]) && inorder.len() == xs.len()
}

fn sorted_copy<'a>(items: impl Iterator<Item = &'a i8>) -> Vec<i8> {
    let mut items: Vec<i8> = items.copied().collect();
    items.sort();
    items
}

#[quickcheck]
fn traversals_visit_everything(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let sorted = sorted_copy(xs.iter());

    sorted_copy(tree.preorder()) == sorted
        && sorted_copy(tree.postorder()) == sorted
        && sorted_copy(tree.levelorder()) == sorted
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(delete).is_ok() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected: Vec<_> = xs.into_iter().filter(|x| low <= *x && *x <= high).collect();
    expected.sort();

    tree.range_find(&low, &high).into_iter().copied().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn rebalance_ascending_reduces_height(n: u8) -> bool {
    let n = i32::from(n);
    let mut tree: Tree<_> = (0..n).collect();
    let height_before = tree.height();

    tree.rebalance();

    let same_items = tree.inorder().copied().eq(0..n);
    let lower = if n > 2 {
        tree.height() < height_before
    } else {
        tree.height() <= height_before
    };

    same_items && lower && tree.is_balanced()
}

#[quickcheck]
fn clone_is_equal(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let clone = tree.clone();

    clone == tree && clone.to_string() == tree.to_string()
}
