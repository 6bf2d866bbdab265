//! Legacy rotation-based destruction.
//!
//! Destroys a tree without recursion by rotating the spine being walked,
//! so that each visited node ends up with its left slot vacated and can be
//! released once its right side is gone. It is tuned for two children per
//! node and tolerates more (extra children are moved up to the ancestor,
//! which costs space). [`Tree::remove_children`] is simpler and should be
//! preferred; this algorithm is kept to reproduce the historical release
//! order.
//!
//! Two invariants hold after every [step](RotatingDestroy::step):
//! - a node touched by the algorithm never has exactly one child slot; it is
//!   padded to two with a hole or reduced to none
//! - every transplant is a move, so no node is held by two handles

use crate::model::storage_policy::StoragePolicy;
use crate::model::tree::{Child, Children, Tree};
use tracing::debug;

impl<T, P: StoragePolicy> Tree<T, P> {
    /// Destroys the tree behind `root` iteratively, rotating subtrees
    /// instead of draining them.
    ///
    /// Under [Shared](crate::model::Shared), nodes still referenced by other
    /// handles are not entered: only this tree's handle to them is released.
    #[deprecated(note = "remove_children is probably a better alternative")]
    pub fn destroy(root: Child<T, P>) {
        Self::rotating_destroy(root).run();
    }

    /// Returns a step-wise [RotatingDestroy] of the tree behind `root`.
    pub fn rotating_destroy(root: Child<T, P>) -> RotatingDestroy<T, P> {
        RotatingDestroy::<T, P>::new(root)
    }

    fn remove_holes_but_avoid_sole(children: &mut Children<T, P>) {
        children.retain(Option::is_some);
        Self::avoid_sole(children);
    }

    fn avoid_sole(children: &mut Children<T, P>) {
        if children.len() == 1 {
            children.push(None);
        }
    }
}

// =#========================================================================#=
// ROTATING DESTROY
// =#========================================================================#=
/// Step-wise state machine of the rotation-based destruction.
///
/// `current` is the node being processed and `parent` a node one level up
/// that still awaits release. Dropping an unfinished machine runs it to the
/// end.
///
/// # Example
/// ```
/// use policy_tree::model::UniqueTree;
///
/// let root = UniqueTree::create(2, [Some(UniqueTree::leaf(1)), Some(UniqueTree::leaf(3))]);
/// let mut destruction = UniqueTree::rotating_destroy(Some(root));
/// while destruction.step() {
///     assert!(destruction.current().is_none_or(|node| node.child_count() != 1));
/// }
/// assert!(destruction.is_done());
/// ```
pub struct RotatingDestroy<T, P: StoragePolicy> {
    current: Child<T, P>,
    parent: Child<T, P>,
    steps: usize,
    rotations: usize,
}

impl<T, P: StoragePolicy> RotatingDestroy<T, P> {
    /// Starts destroying the tree behind `root`.
    pub fn new(root: Child<T, P>) -> Self {
        RotatingDestroy {
            current: root,
            parent: None,
            steps: 0,
            rotations: 0,
        }
    }

    /// Returns whether every node has been released.
    pub fn is_done(&self) -> bool {
        self.current.is_none()
    }

    /// Node currently being processed.
    pub fn current(&self) -> Option<&Tree<T, P>> {
        self.current.as_deref()
    }

    /// Ancestor awaiting release, if any.
    pub fn parent(&self) -> Option<&Tree<T, P>> {
        self.parent.as_deref()
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of rotations performed so far.
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    /// Runs all remaining steps.
    pub fn run(&mut self) {
        if self.is_done() {
            return;
        }
        while self.step() {}
        debug!(
            policy = P::NAME,
            steps = self.steps,
            rotations = self.rotations,
            "destroyed tree by rotation"
        );
    }

    /// Performs one transition; returns `false` once nothing is left.
    pub fn step(&mut self) -> bool {
        let Some(mut current) = self.current.take() else {
            return false;
        };
        self.steps += 1;

        let Some(node) = Tree::<T, P>::node_mut(&mut current).filter(|node| node.has_child()) else {
            // Release current node and go up
            drop(current);
            self.current = self.parent.take();
            return true;
        };

        debug_assert!(
            self.parent
                .as_deref()
                .is_none_or(|parent| matches!(parent.children.first(), Some(None))),
            "left slot of parent must have been vacated by descent"
        );
        if let Some(parent_ptr) = self.parent.as_mut() {
            match Tree::<T, P>::node_mut(parent_ptr) {
                Some(parent) if matches!(parent.children.get(1), Some(Some(_))) => {
                    //                   4  <-- parent
                    //                  / \
                    //    current -->  2   5
                    //                / \
                    //               1   3
                    //
                    // becomes
                    //
                    //    current -->  2            parent --> (none)
                    //                / \
                    //               1   4
                    //                  / \
                    //                 3   5
                    if node.children.len() > 2 {
                        parent
                            .children
                            .extend(node.children[2..].iter_mut().map(Option::take));
                    }
                    Tree::<T, P>::avoid_sole(&mut node.children);
                    parent.children[0] = node.children[1].take();
                    node.children[1] = self.parent.take();
                    self.rotations += 1;
                }
                // Both slots of parent are vacated
                _ => self.parent = None,
            }
        }

        if node.children[0].is_some() {
            // Go down the left child
            let left = node.children[0].take();
            self.parent = Some(current);
            self.current = left;
        } else if node.children.len() == 2 {
            // Release current node and go down its only (right) child
            self.current = node.children[1].take();
        } else {
            // Leftmost slot is a hole and there is no lone right child
            Tree::<T, P>::remove_holes_but_avoid_sole(&mut node.children);
            self.current = Some(current);
        }
        true
    }
}

impl<T, P: StoragePolicy> Drop for RotatingDestroy<T, P> {
    fn drop(&mut self) {
        self.run();
    }
}
