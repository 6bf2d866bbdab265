//! Diagnostic rendering of trees as indented branch drawings.
//!
//! ```text
//! 1
//! ├── 2
//! │   ├── 4
//! │   └── (null)
//! └── 3
//! ```
//!
//! Holes are shown as `(null)`. Rendering recurses on the tree depth and is
//! meant for inspection, not for huge trees.

use crate::model::{StoragePolicy, Tree};
use std::fmt::{self, Display, Write};

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const INDENT: &str = "│   ";
const LAST_INDENT: &str = "    ";
const HOLE: &str = "(null)";

/// Writes `tree` (or `(null)` for `None`) and all its descendants to `out`,
/// one node per line.
///
/// # Example
/// ```
/// use policy_tree::model::UniqueTree;
/// use policy_tree::printer::write_tree;
///
/// let root = UniqueTree::new(1, [Some(UniqueTree::leaf(2)), Some(UniqueTree::leaf(3))]);
/// let mut out = String::new();
/// write_tree(&mut out, Some(&root)).unwrap();
/// assert_eq!(out, "1\n├── 2\n└── 3\n");
/// ```
pub fn write_tree<T, P, W>(out: &mut W, tree: Option<&Tree<T, P>>) -> fmt::Result
where
    T: Display,
    P: StoragePolicy,
    W: Write + ?Sized,
{
    write_subtree(out, tree, "")
}

/// Renders `tree` into a new string.
pub fn tree_to_string<T: Display, P: StoragePolicy>(tree: Option<&Tree<T, P>>) -> String {
    match tree {
        Some(node) => node.to_string(),
        None => format!("{HOLE}\n"),
    }
}

/// Prints a rendering of `tree` to the console.
pub fn print_tree<T: Display, P: StoragePolicy>(tree: Option<&Tree<T, P>>) {
    print!("{}", tree_to_string(tree));
}

fn write_subtree<T, P, W>(out: &mut W, tree: Option<&Tree<T, P>>, prefix: &str) -> fmt::Result
where
    T: Display,
    P: StoragePolicy,
    W: Write + ?Sized,
{
    let Some(node) = tree else {
        return writeln!(out, "{HOLE}");
    };
    writeln!(out, "{}", node.value())?;

    let last_index = node.child_count().saturating_sub(1);
    for (index, child) in node.iter().enumerate() {
        let is_last = index == last_index;
        let (branch, indent) = if is_last {
            (LAST_BRANCH, LAST_INDENT)
        } else {
            (BRANCH, INDENT)
        };
        write!(out, "{prefix}{branch} ")?;
        write_subtree(out, child.as_deref(), &format!("{prefix}{indent}"))?;
    }

    Ok(())
}

impl<T: Display, P: StoragePolicy> Display for Tree<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, Some(self))
    }
}
