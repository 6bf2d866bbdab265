//! Policy-tree is a generic n-ary tree container whose ownership
//! discipline is chosen at compile time.
//!
//! Core functionality provided:
//! - Tree model: [Tree] nodes storing a value and ordered child slots,
//!   where slots may be holes.
//! - Ownership policies: [Unique] (move-only, `Box`) or [Shared]
//!   (reference counted, `Arc`), selected by a mandatory type parameter.
//! - Traversals: lazy [breadth-first](traversal::BreadthFirst),
//!   [depth-first](traversal::DepthFirst) and
//!   [in-order](traversal::InOrder) iterators that never recurse.
//! - Destruction: [`Tree::remove_children`] drains arbitrarily deep trees
//!   with constant stack use; the legacy rotation-based
//!   [RotatingDestroy] is kept for compatibility.
//! - Printer: [printer] renders trees as branch drawings for diagnostics.
//!
//! # Example
//! ```
//! use policy_tree::model::UniqueTree;
//!
//! let mut root = UniqueTree::new(1, [
//!     Some(UniqueTree::create(2, [Some(UniqueTree::leaf(4)), Some(UniqueTree::leaf(5))])),
//!     Some(UniqueTree::create(3, [Some(UniqueTree::leaf(6)), Some(UniqueTree::leaf(7))])),
//! ]);
//!
//! let level_order: Vec<_> = root.breadth_first().map(|node| *node.value()).collect();
//! assert_eq!(level_order, vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! let in_order: Vec<_> = root.in_order().map(|node| *node.value()).collect();
//! assert_eq!(in_order, vec![4, 2, 5, 1, 6, 3, 7]);
//!
//! root.remove_children();
//! assert_eq!(root.child_count(), 0);
//! ```

pub mod model;
pub mod printer;
pub mod traversal;

pub use crate::model::{
    Child, RotatingDestroy, Shared, SharedTree, StoragePolicy, Tree, TreeError, TreePtr, Unique,
    UniqueTree,
};
pub use crate::printer::print_tree;

// ============================================================================
// Quick construction API
// ============================================================================
/// Creates a node without children under policy `P` and returns its handle.
///
/// ```
/// use policy_tree::{Shared, create_tree};
///
/// let leaf = create_tree::<Shared, _>("leaf");
/// assert!(!leaf.has_child());
/// ```
pub fn create_tree<P: StoragePolicy, T>(value: T) -> TreePtr<T, P> {
    Tree::<T, P>::leaf(value)
}

/// Creates a node with the given child slots under policy `P` and returns
/// its handle.
pub fn create_tree_with<P, T, I>(value: T, children: I) -> TreePtr<T, P>
where
    P: StoragePolicy,
    I: IntoIterator<Item = Child<T, P>>,
{
    Tree::<T, P>::create(value, children)
}
