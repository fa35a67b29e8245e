//! A single vertex of a [`Tree`][crate::Tree].

use std::fmt;

/// An owning link to a child. `None` marks the empty slot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a value and owns at most two children. Every value in the left subtree is
/// less than this node's value and every value in the right subtree is greater.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Shows the children by value only so formatting doesn't recurse through the subtree.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// Two subtrees are equal when they have the same shape and the same values in the same places.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T> Node<T> {
    /// Construct a new leaf `Node` with the given `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }
}

/// Deep copy of the subtree under `root`. Nodes are rebuilt in postorder on an explicit stack:
/// by the time a node is copied, the copies of its children sit on top of the stack.
pub(crate) fn clone_subtree<T: Clone>(root: Option<&Node<T>>) -> Link<T> {
    let mut built: Vec<Box<Node<T>>> = Vec::new();
    for node in root?.postorder_nodes() {
        let right = if node.right.is_some() { built.pop() } else { None };
        let left = if node.left.is_some() { built.pop() } else { None };
        built.push(Box::new(Node {
            value: node.value.clone(),
            left,
            right,
        }));
    }
    built.pop()
}
