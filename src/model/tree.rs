//! Generic n-ary tree node.
//!
//! Provides [`Tree<T, P>`], a node holding one value and an ordered
//! sequence of child slots. Each slot is a [Child]: either a handle to a
//! child node (as chosen by the [StoragePolicy] `P`) or `None`, a hole.
//! Holes are meaningful: they take part in the child count and in the
//! `is_last` decision of the [printer](crate::printer), but traversals skip
//! them.
//!
//! Roots are owned by whoever receives the handle from [`Tree::create`];
//! a node never refers back to its parent.

use crate::model::storage_policy::{Shared, StoragePolicy, Unique};
use crate::model::tree_error::TreeError;
use crate::traversal::{BreadthFirst, DepthFirst, InOrder};
use std::fmt;
use std::slice;
use tracing::{debug, trace};

/// Handle to a tree node under policy `P`.
pub type TreePtr<T, P> = <P as StoragePolicy>::Ptr<Tree<T, P>>;

/// One child slot: a handle, or `None` for a hole.
pub type Child<T, P> = Option<TreePtr<T, P>>;

/// Ordered child slots of a node.
pub type Children<T, P> = Vec<Child<T, P>>;

/// Tree whose children are exclusively owned.
pub type UniqueTree<T> = Tree<T, Unique>;

/// Tree whose children are reference counted.
pub type SharedTree<T> = Tree<T, Shared>;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A tree node owning a value and its child slots.
///
/// The ownership policy `P` is a mandatory type parameter; use the
/// [UniqueTree] and [SharedTree] aliases for the two built-in policies.
///
/// # Example
/// ```
/// use policy_tree::model::UniqueTree;
///
/// let root = UniqueTree::create(1, [
///     Some(UniqueTree::create(2, [Some(UniqueTree::leaf(4)), Some(UniqueTree::leaf(5))])),
///     Some(UniqueTree::leaf(3)),
/// ]);
///
/// let values: Vec<_> = root.depth_first().map(|node| *node.value()).collect();
/// assert_eq!(values, vec![1, 2, 4, 5, 3]);
/// ```
pub struct Tree<T, P: StoragePolicy> {
    value: T,
    pub(crate) children: Children<T, P>,
}

// ============================================================================
// Construction
// ============================================================================
impl<T, P: StoragePolicy> Tree<T, P> {
    /// Creates a node (not wrapped in a handle) from a value and its children.
    pub fn new(value: T, children: impl IntoIterator<Item = Child<T, P>>) -> Self {
        Tree {
            value,
            children: children.into_iter().collect(),
        }
    }

    /// Creates a node and returns an owning handle to it.
    ///
    /// # Arguments
    /// * `value` - Value stored in the node
    /// * `children` - Child slots, in order; `None` entries become holes
    pub fn create(value: T, children: impl IntoIterator<Item = Child<T, P>>) -> TreePtr<T, P> {
        P::new_ptr(Self::new(value, children))
    }

    /// Creates a node without children and returns an owning handle to it.
    pub fn leaf(value: T) -> TreePtr<T, P> {
        P::new_ptr(Self::new(value, []))
    }

    /// Collects child slots into a [Children] sequence.
    pub fn make_children(children: impl IntoIterator<Item = Child<T, P>>) -> Children<T, P> {
        children.into_iter().collect()
    }
}

impl<T: Default, P: StoragePolicy> Default for Tree<T, P> {
    fn default() -> Self {
        Tree {
            value: T::default(),
            children: Vec::new(),
        }
    }
}

// ============================================================================
// Getters / Accessors
// ============================================================================
impl<T, P: StoragePolicy> Tree<T, P> {
    /// Returns a reference to the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the stored value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node and returns its value; children are released.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the child slot at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`Tree::child_count`].
    /// See [`Tree::get_child`] for a checked variant.
    pub fn child(&self, index: usize) -> &Child<T, P> {
        &self.children[index]
    }

    /// Returns the child slot at `index` mutably, e.g. to replace or take it.
    ///
    /// # Panics
    /// Panics if `index` is not below [`Tree::child_count`].
    pub fn child_mut(&mut self, index: usize) -> &mut Child<T, P> {
        &mut self.children[index]
    }

    /// Returns the child slot at `index`, or an error if out of range.
    pub fn get_child(&self, index: usize) -> Result<&Child<T, P>, TreeError> {
        let count = self.children.len();
        self.children
            .get(index)
            .ok_or(TreeError::ChildIndexOutOfRange { index, count })
    }

    /// Returns the child slot at `index` mutably, or an error if out of range.
    pub fn get_child_mut(&mut self, index: usize) -> Result<&mut Child<T, P>, TreeError> {
        let count = self.children.len();
        self.children
            .get_mut(index)
            .ok_or(TreeError::ChildIndexOutOfRange { index, count })
    }

    /// Returns the child node at `index`.
    ///
    /// # Errors
    /// * [TreeError::ChildIndexOutOfRange] if there is no such slot
    /// * [TreeError::EmptyChildSlot] if the slot is a hole
    pub fn child_tree(&self, index: usize) -> Result<&Self, TreeError> {
        self.get_child(index)?
            .as_deref()
            .ok_or(TreeError::EmptyChildSlot { index })
    }

    /// Returns the child node at `index` mutably.
    ///
    /// # Errors
    /// * [TreeError::ChildIndexOutOfRange] if there is no such slot
    /// * [TreeError::EmptyChildSlot] if the slot is a hole
    /// * [TreeError::SharedChild] if other handles to the child are alive
    pub fn child_tree_mut(&mut self, index: usize) -> Result<&mut Self, TreeError> {
        let ptr = self
            .get_child_mut(index)?
            .as_mut()
            .ok_or(TreeError::EmptyChildSlot { index })?;
        Self::node_mut(ptr).ok_or(TreeError::SharedChild { index })
    }

    /// Returns all child slots, holes included.
    pub fn children(&self) -> &[Child<T, P>] {
        &self.children
    }

    /// Returns an iterator over the child slots.
    pub fn iter(&self) -> slice::Iter<'_, Child<T, P>> {
        self.children.iter()
    }

    /// Returns a mutable iterator over the child slots.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Child<T, P>> {
        self.children.iter_mut()
    }

    /// Returns the first child slot, or `None` if there are no children.
    pub fn front(&self) -> Option<&Child<T, P>> {
        self.children.first()
    }

    /// Returns the first child slot mutably.
    pub fn front_mut(&mut self) -> Option<&mut Child<T, P>> {
        self.children.first_mut()
    }

    /// Returns the last child slot, or `None` if there are no children.
    pub fn back(&self) -> Option<&Child<T, P>> {
        self.children.last()
    }

    /// Returns the last child slot mutably.
    pub fn back_mut(&mut self) -> Option<&mut Child<T, P>> {
        self.children.last_mut()
    }

    /// Returns whether this node has any child slots (holes count).
    pub fn has_child(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the number of child slots (holes count).
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn node_mut(ptr: &mut TreePtr<T, P>) -> Option<&mut Self> {
        P::get_mut::<Self>(ptr)
    }
}

// ============================================================================
// Structural mutation
// ============================================================================
impl<T, P: StoragePolicy> Tree<T, P> {
    /// Appends a child slot at the end.
    pub fn push_back(&mut self, child: Child<T, P>) {
        self.children.push(child);
    }

    /// Removes the last child slot and returns it.
    ///
    /// Returns `None` if there are no children; `Some(None)` if the last
    /// slot was a hole.
    pub fn pop_back(&mut self) -> Option<Child<T, P>> {
        self.children.pop()
    }

    /// Replaces all child slots at once; the previous children are released.
    pub fn set_children(&mut self, children: impl IntoIterator<Item = Child<T, P>>) {
        self.children = Self::make_children(children);
    }

    /// Releases all children without recursion.
    ///
    /// Repeatedly walks down the chain of last children until it reaches a
    /// slot sequence whose last entry is a hole, a leaf, or a node it cannot
    /// reach exclusively, and pops that entry. Each pop releases exactly one
    /// handle, so nothing is freed twice even though upper levels of the
    /// tree are walked again on every pass. Stack use stays constant for any
    /// depth.
    ///
    /// Under [Shared], a child that is still referenced elsewhere is not
    /// descended into: only this tree's handle is released and the subtree
    /// stays intact for its other holders.
    pub fn remove_children(&mut self) {
        let mut passes = 0usize;
        let mut pops = 0usize;

        while self.has_child() {
            passes += 1;
            let mut children = &mut self.children;
            while !children.is_empty() {
                while Self::can_descend(children) {
                    children = Self::back_children_mut(children);
                }
                children.pop();
                pops += 1;
            }
            trace!(pass = passes, pops, "drained deepest back chain");
        }

        debug!(policy = P::NAME, passes, pops, "removed children iteratively");
    }

    /// Whether the last slot holds an exclusively reachable node with children.
    fn can_descend(children: &mut Children<T, P>) -> bool {
        match children.last_mut() {
            Some(Some(ptr)) => Self::node_mut(ptr).is_some_and(|node| node.has_child()),
            _ => false,
        }
    }

    /// Children of the last slot; only valid after [Self::can_descend].
    fn back_children_mut<'c>(children: &'c mut Children<T, P>) -> &'c mut Children<T, P>
    where
        T: 'c,
    {
        match children.last_mut().and_then(Option::as_mut).and_then(Self::node_mut) {
            Some(node) => &mut node.children,
            None => unreachable!("back child must be present and exclusively reachable"),
        }
    }
}

// ============================================================================
// Traversals
// ============================================================================
impl<T, P: StoragePolicy> Tree<T, P> {
    /// Returns an iterator visiting this subtree level by level.
    pub fn breadth_first(&self) -> BreadthFirst<'_, T, P> {
        BreadthFirst::new(self)
    }

    /// Returns an iterator visiting this subtree in pre-order.
    pub fn depth_first(&self) -> DepthFirst<'_, T, P> {
        DepthFirst::new(self)
    }

    /// Returns an iterator visiting this subtree in (generalized) in-order.
    pub fn in_order(&self) -> InOrder<'_, T, P> {
        InOrder::new(self)
    }
}

impl<'a, T, P: StoragePolicy> IntoIterator for &'a Tree<T, P> {
    type Item = &'a Child<T, P>;
    type IntoIter = slice::Iter<'a, Child<T, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl<T: fmt::Debug, P: StoragePolicy> fmt::Debug for Tree<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<Option<&Self>> = self.children.iter().map(Option::as_deref).collect();
        f.debug_struct("Tree")
            .field("value", &self.value)
            .field("children", &children)
            .finish()
    }
}
