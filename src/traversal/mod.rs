//! Lazy traversals over a [Tree].
//!
//! Three forward-only iterators yield `&Tree` references to the nodes of a
//! subtree, skipping holes:
//! * [BreadthFirst] - level by level, left to right
//! * [DepthFirst] - pre-order, a node before its children
//! * [InOrder] - leftmost subtree, then the node, then the remaining
//!   subtrees; on binary trees this is the usual in-order
//!
//! None of them recurse, so arbitrarily deep trees can be traversed.
//! A traversal is single-pass; to restart, obtain a fresh one from the root.
//!
//! Iterators compare equal when they are both exhausted or both positioned
//! on the same node; a live iterator never equals an exhausted one.
//!
//! # Mutation
//! Iterators borrow the tree for their whole lifetime, so changing its
//! structure while one is alive is rejected by the compiler:
//! ```compile_fail,E0502
//! use policy_tree::model::UniqueTree;
//!
//! let mut root = UniqueTree::new(1, [Some(UniqueTree::leaf(2))]);
//! for _node in root.breadth_first() {
//!     root.push_back(None);
//! }
//! ```

pub mod breadth_first;
pub mod depth_first;
pub mod in_order;

pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use in_order::InOrder;

use crate::model::{StoragePolicy, Tree};
use std::ptr;

/// Common interface of the traversal iterators.
pub trait Traversal<'a, T: 'a, P: StoragePolicy>: Iterator<Item = &'a Tree<T, P>> {
    /// Starts a traversal at `root`.
    fn from_root(root: &'a Tree<T, P>) -> Self;

    /// Node the next call to `next` yields, or `None` once exhausted.
    fn current(&self) -> Option<&'a Tree<T, P>>;

    /// Returns whether the traversal has yielded all nodes.
    fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }
}

/// Starts a traversal of kind `I` at `root`.
///
/// # Example
/// ```
/// use policy_tree::model::SharedTree;
/// use policy_tree::traversal::{traverse, InOrder};
///
/// let root = SharedTree::new(2, [Some(SharedTree::leaf(1)), Some(SharedTree::leaf(3))]);
/// let values: Vec<i32> = traverse::<InOrder<'_, _, _>, _, _>(&root)
///     .map(|node| *node.value())
///     .collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn traverse<'a, I, T, P>(root: &'a Tree<T, P>) -> I
where
    I: Traversal<'a, T, P>,
    T: 'a,
    P: StoragePolicy,
{
    I::from_root(root)
}

/// Equality of two traversal positions by node identity.
fn same_position<T, P: StoragePolicy>(lhs: Option<&Tree<T, P>>, rhs: Option<&Tree<T, P>>) -> bool {
    match (lhs, rhs) {
        (None, None) => true,
        (Some(lhs), Some(rhs)) => ptr::eq(lhs, rhs),
        _ => false,
    }
}
