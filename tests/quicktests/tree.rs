use bst_rebalance::Tree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes, and rebalances we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                assert_eq!(tree.delete(x).is_some(), set.remove(x));
            }
            Op::Rebalance => {
                tree.rebalance();
                assert!(tree.is_balanced());
            }
        }
    }
}

fn is_strictly_ascending<T: Ord>(xs: &[&T]) -> bool {
    xs.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(start: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::from_values(start.clone());
    let mut set: BTreeSet<_> = start.into_iter().collect();

    do_ops(&ops, &mut tree, &mut set);

    let inorder = tree.inorder();
    is_strictly_ascending(&inorder) && inorder.into_iter().eq(set.iter())
}

#[quickcheck]
fn build_dedups(xs: Vec<i8>) -> bool {
    let mut unique = xs.clone();
    unique.sort();
    unique.dedup();

    Tree::from_values(xs) == Tree::from_values(unique)
}

#[quickcheck]
fn build_is_balanced(xs: Vec<i16>) -> bool {
    Tree::from_values(xs).is_balanced()
}

#[quickcheck]
fn inorder_after_inserts_is_ascending(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    is_strictly_ascending(&tree.inorder()) && xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::from_values(xs);
    tree.insert(x);
    let before = tree.clone();

    tree.insert(x).value() == &x && tree == before
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn delete_then_find(xs: Vec<i8>, inserts: Vec<i8>, delete: usize) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    for x in &inserts {
        tree.insert(*x);
    }
    let mut present: Vec<i8> = tree.inorder().into_iter().copied().collect();
    if present.is_empty() {
        return true;
    }
    let target = present.remove(delete % present.len());

    let deleted = tree.delete(&target);
    let remaining: Vec<i8> = tree.inorder().into_iter().copied().collect();

    deleted == Some(target) && tree.find(&target).is_none() && remaining == present
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && is_strictly_ascending(&tree.inorder())
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>, skew: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs);
    for x in &skew {
        tree.insert(*x);
    }
    let before: Vec<i8> = tree.inorder().into_iter().copied().collect();

    tree.rebalance();
    let after: Vec<i8> = tree.inorder().into_iter().copied().collect();

    tree.is_balanced() && before == after && tree == Tree::from_values(after)
}

#[test]
fn rebalance_restores_balance() {
    let mut tree = Tree::from_values(1..=10);
    assert!(tree.is_balanced());

    for x in [110, 115, 120, 125, 130] {
        tree.insert(x);
    }
    assert!(!tree.is_balanced());
    let before: Vec<i32> = tree.inorder().into_iter().copied().collect();

    tree.rebalance();

    assert!(tree.is_balanced());
    assert_eq!(tree.inorder().into_iter().copied().collect::<Vec<_>>(), before);
}

#[test]
fn depth_examples() {
    assert_eq!(Tree::<i32>::new().depth(), -1);
    assert_eq!(Tree::from_values([1]).depth(), 0);
    assert!(Tree::<i32>::new().is_balanced());
}
