//! Traversals and depth queries. Everything here walks with an explicit queue or stack so a
//! tree that was skewed by a long run of sorted inserts can't blow the call stack.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Node<T> {
    /// Values of this subtree in breadth-first order, children visited left then right.
    pub fn level_order(&self) -> Vec<&T> {
        self.level_order_nodes()
            .into_iter()
            .map(|node| &node.value)
            .collect()
    }

    /// The nodes of this subtree in breadth-first order.
    pub(crate) fn level_order_nodes(&self) -> Vec<&Node<T>> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            order.push(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        order
    }

    /// Values of this subtree in root-left-right order.
    pub fn preorder(&self) -> Vec<&T> {
        let mut order = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            order.push(&node.value);
            stack.extend(node.right());
            stack.extend(node.left());
        }
        order
    }

    /// Values of this subtree in left-root-right order. For a valid BST this is ascending.
    pub fn inorder(&self) -> Vec<&T> {
        let mut order = Vec::new();
        let mut stack = Vec::new();
        let mut current = Some(self);
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            order.push(&node.value);
            current = node.right();
        }
        order
    }

    /// Values of this subtree in left-right-root order.
    pub fn postorder(&self) -> Vec<&T> {
        self.postorder_nodes()
            .into_iter()
            .map(|node| &node.value)
            .collect()
    }

    /// The nodes of this subtree in left-right-root order.
    pub(crate) fn postorder_nodes(&self) -> Vec<&Node<T>> {
        // Root-right-left, reversed.
        let mut order = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        order.reverse();
        order
    }

    /// Number of edges on the longest path from this node down to a leaf. A leaf has depth 0.
    pub fn depth(&self) -> isize {
        let mut depth = 0;
        let mut level = next_level(&[self]);
        while !level.is_empty() {
            depth += 1;
            level = next_level(&level);
        }
        depth
    }

    /// Like [`Node::depth`] but following the shortest path instead: the depth of the shallowest
    /// node below (or at) this one that is missing a child.
    pub fn shortest_depth(&self) -> isize {
        let mut depth = 0;
        let mut level = vec![self];
        while level.iter().all(|n| n.left.is_some() && n.right.is_some()) {
            depth += 1;
            level = next_level(&level);
        }
        depth
    }
}

/// The children of every node in `level`, left to right.
fn next_level<'a, T>(level: &[&'a Node<T>]) -> Vec<&'a Node<T>> {
    level
        .iter()
        .flat_map(|node| node.left().into_iter().chain(node.right()))
        .collect()
}

impl<T> Tree<T> {
    /// Values in breadth-first order. Empty for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let tree = Tree::from_values(1..=7);
    /// assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);
    /// ```
    pub fn level_order(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, Node::level_order)
    }

    /// Values in root-left-right order. Empty for an empty tree.
    pub fn preorder(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, Node::preorder)
    }

    /// Values in ascending order. Empty for an empty tree.
    pub fn inorder(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, Node::inorder)
    }

    /// Values in left-right-root order. Empty for an empty tree.
    pub fn postorder(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, Node::postorder)
    }

    /// Height of the tree: `-1` when empty, `0` for a single node.
    pub fn depth(&self) -> isize {
        self.root().map_or(-1, Node::depth)
    }

    /// Depth of the shallowest node that is missing a child, `-1` when empty.
    pub fn shortest_depth(&self) -> isize {
        self.root().map_or(-1, Node::shortest_depth)
    }

    /// Whether the deepest leaf is at most one level below the shallowest gap in the tree. This
    /// is a global check, not the per-node AVL condition. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let mut tree = Tree::from_values([1, 2, 3]);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.depth() - self.shortest_depth() <= 1
    }
}
