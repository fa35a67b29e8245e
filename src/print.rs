//! Sideways rendering of a tree. The right subtree is drawn above its parent and the left
//! subtree below, so reading top to bottom gives the values in descending order.
//!
//! ```text
//! │       ┌── 7
//! │   ┌── 6
//! │   │   └── 5
//! └── 4
//!     │   ┌── 3
//!     └── 2
//!         └── 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<T: fmt::Display> Tree<T> {
    /// Renders the structure of the tree, one node per line. An empty tree renders as an empty
    /// string.
    pub fn pretty_print(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Step<'_, T>> = self
            .root()
            .map(|root| Step::Branch(root, String::new(), true))
            .into_iter()
            .collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Line(node, prefix, is_left) => {
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{prefix}{connector}{}", node.value)?;
                }
                Step::Branch(node, prefix, is_left) => {
                    // Pushed bottom-up: the right subtree pops first and is drawn above.
                    let left = node.left().map(|left| {
                        let bar = if is_left { "    " } else { "│   " };
                        Step::Branch(left, format!("{prefix}{bar}"), true)
                    });
                    let right = node.right().map(|right| {
                        let bar = if is_left { "│   " } else { "    " };
                        Step::Branch(right, format!("{prefix}{bar}"), false)
                    });
                    stack.extend(left);
                    stack.push(Step::Line(node, prefix, is_left));
                    stack.extend(right);
                }
            }
        }
        Ok(())
    }
}

/// Pending work while printing. `Branch` expands a subtree, `Line` writes a single node. Both
/// carry the prefix drawn in front of the node and whether it hangs off its parent's left side.
enum Step<'a, T> {
    Branch(&'a Node<T>, String, bool),
    Line(&'a Node<T>, String, bool),
}
