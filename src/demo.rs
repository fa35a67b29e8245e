//! The scripted walk-through `bst-demo` runs: build, report, skew, report, rebalance, report.

use std::fmt::Debug;
use std::io::Write;

use tracing::info;

use crate::cli::DemoConfig;
use crate::error::DemoResult;
use crate::Tree;

/// Runs the demo described by `config`, writing the report to `out`. Returns the final,
/// rebalanced tree.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<Tree<i32>> {
    let values = config.sample();
    info!(count = values.len(), seed = ?config.seed, "building tree");
    run_with_values(values, &config.skew, out)
}

/// Same as [`run`] but with the initial values supplied by the caller.
pub fn run_with_values<W: Write>(
    values: Vec<i32>,
    skew: &[i32],
    out: &mut W,
) -> DemoResult<Tree<i32>> {
    let mut tree = Tree::from_values(values);

    writeln!(out, "Balanced: {}", tree.is_balanced())?;
    write_traversals(&tree, out)?;

    for value in skew {
        writeln!(out, "Insert {value}")?;
        tree.insert(*value);
    }

    writeln!(out, "Balanced: {}", tree.is_balanced())?;
    writeln!(out, "Rebalancing...")?;
    tree.rebalance();
    writeln!(out, "Balanced: {}", tree.is_balanced())?;

    write_traversals(&tree, out)?;
    write!(out, "{tree}")?;

    Ok(tree)
}

fn write_traversals<T: Debug, W: Write>(tree: &Tree<T>, out: &mut W) -> DemoResult<()> {
    writeln!(out, "Level order:")?;
    writeln!(out, "{:?}", tree.level_order())?;
    writeln!(out, "Preorder:")?;
    writeln!(out, "{:?}", tree.preorder())?;
    writeln!(out, "Postorder:")?;
    writeln!(out, "{:?}", tree.postorder())?;
    writeln!(out, "Inorder:")?;
    writeln!(out, "{:?}", tree.inorder())?;
    Ok(())
}
