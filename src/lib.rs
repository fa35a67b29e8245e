//! A Binary Search Tree that stays exactly as unbalanced as its inserts and deletes make it,
//! until it is asked to [`rebalance`][Tree::rebalance].
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. Building from a sorted, deduplicated sequence by always
//! picking the middle element as the subtree root keeps the height at `O(lg N)`, but plain
//! inserts don't: inserting ascending values grows a single right spine. This tree doesn't
//! fix that on every mutation. Instead [`Tree::is_balanced`] compares the deepest leaf with the
//! shallowest gap and [`Tree::rebalance`] rebuilds the tree from scratch.
//!
//! # Examples
//!
//! ```
//! use bst_rebalance::Tree;
//!
//! let mut tree = Tree::from_values([4, 2, 6, 1, 3, 5, 7]);
//!
//! assert_eq!(tree.inorder(), vec![&1, &2, &3, &4, &5, &6, &7]);
//! assert_eq!(tree.preorder(), vec![&4, &2, &1, &3, &6, &5, &7]);
//! assert_eq!(tree.depth(), 2);
//!
//! for value in [110, 115, 120] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod demo;
pub mod error;
mod node;
mod print;
mod traverse;
mod tree;

pub use node::Node;
pub use tree::Tree;
