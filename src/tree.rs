//! A Binary Search Tree that only balances when asked to. Inserts and deletes never move
//! existing nodes around beyond what is needed to unlink the deleted node, so a run of sorted
//! inserts leaves a long spine. [`Tree::is_balanced`] detects that and [`Tree::rebalance`]
//! rebuilds the whole tree from its values.
//!
//! # Examples
//!
//! ```
//! use bst_rebalance::Tree;
//!
//! let mut tree = Tree::from_values([3, 1, 2, 3, 1]);
//! assert_eq!(tree.inorder(), vec![&1, &2, &3]);
//!
//! // Skew the tree to the right.
//! for value in 4..10 {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&4), Some(4));
//! assert!(tree.find(&4).is_none());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{clone_subtree, Link, Node};

/// A Binary Search Tree over a set of distinct, totally ordered values.
///
/// Two trees compare equal when they have the same shape and the same values in the same
/// places. Cloning, comparing, formatting and dropping all walk the tree with an explicit stack,
/// so a long spine left behind by sorted inserts is safe to handle.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: clone_subtree(self.root()),
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl<T: Eq> Eq for Tree<T> {}

/// Lists every node breadth first, each with the values of its children.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.root().map_or_else(Vec::new, Node::level_order_nodes);
        f.debug_list().entries(nodes).finish()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink children before each node drops so a degenerate tree doesn't recurse once per
        // level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> Tree<T> {
    /// Builds a balanced tree from `values`. Duplicates are dropped and the input may be in any
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let tree = Tree::from_values(vec![7, 6, 5, 4, 3, 2, 1]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(4));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            root: Self::build_tree(values),
        }
    }

    /// Inserts `value` and returns the node holding it. If the value is already present the
    /// existing node is returned and the tree is left untouched. This never rebalances.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1).value(), &1);
    /// assert_eq!(tree.insert(1).value(), &1);
    /// assert_eq!(tree.inorder(), vec![&1]);
    /// ```
    pub fn insert(&mut self, value: T) -> &Node<T> {
        let link = Self::link_mut(&mut self.root, &value);
        if link.is_some() {
            trace!("value already present, skipping insert");
        }
        link.get_or_insert_with(|| Box::new(Node::new(value)))
    }

    /// Potentially finds the node holding `value`. If no node has the value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let tree = Tree::from_values([1, 2]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| n.value()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Deletes the node holding `value` and returns the value. If the tree does not contain it,
    /// nothing happens.
    ///
    /// The deleted node is replaced by its in-order successor (the leftmost node of its right
    /// subtree) or, when it has no right subtree, by its left child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let mut tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.inorder(), vec![&1, &3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let link = Self::link_mut(&mut self.root, value);
        let mut target = link.take()?;

        *link = match target.right.take() {
            None => {
                trace!("deleted node has no right subtree, promoting left child");
                target.left.take()
            }
            Some(mut right) => match Self::take_leftmost(&mut right) {
                None => {
                    trace!("successor is the right child");
                    right.left = target.left.take();
                    Some(right)
                }
                Some(mut successor) => {
                    trace!("successor is deeper in the right subtree");
                    successor.left = target.left.take();
                    successor.right = Some(right);
                    Some(successor)
                }
            },
        };

        Some(target.value)
    }

    /// Rebuilds the tree so that it is balanced again. Values are collected breadth first and fed
    /// back through the same construction [`Tree::from_values`] uses.
    pub fn rebalance(&mut self) {
        let depth_before = self.depth();
        let values = self.drain_level_order();
        let len = values.len();
        self.root = Self::build_tree(values);
        debug!(
            len,
            depth_before,
            depth_after = self.depth(),
            "rebalanced tree"
        );
    }

    /// Sorts and dedups `values`, then builds a balanced subtree from them.
    fn build_tree<I>(values: I) -> Link<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self::build_sorted(values)
    }

    /// Picks the element at `len / 2` as the subtree root and recurses on either side. The
    /// recursion depth is logarithmic in the number of values.
    fn build_sorted(mut values: Vec<T>) -> Link<T> {
        if values.is_empty() {
            return None;
        }
        let middle = values.len() / 2;
        let right = values.split_off(middle + 1);
        let value = values.pop()?;

        Some(Box::new(Node {
            value,
            left: Self::build_sorted(values),
            right: Self::build_sorted(right),
        }))
    }

    /// Returns the link that owns the node holding `value`, or the empty link where that node
    /// would be inserted.
    fn link_mut<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return link,
            };
            if ordering == Ordering::Equal {
                return link;
            }
            link = match link {
                Some(node) => match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                },
                None => return link,
            };
        }
    }

    /// Unlinks and returns the leftmost node strictly below `subtree`. Its right subtree takes
    /// its place under its parent. Returns `None` when `subtree` has no left child, in which
    /// case `subtree` itself is the leftmost node.
    fn take_leftmost(subtree: &mut Node<T>) -> Link<T> {
        let mut link = &mut subtree.left;
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            link = &mut link.as_mut()?.left;
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }

    /// Empties the tree, moving its values out in level order.
    fn drain_level_order(&mut self) -> Vec<T> {
        let mut values = Vec::new();
        let mut queue: VecDeque<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = queue.pop_front() {
            queue.extend(node.left.take());
            queue.extend(node.right.take());
            values.push(node.value);
        }
        values
    }
}
