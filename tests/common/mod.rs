//! Shared helpers for integration tests: drop-counting values and tree
//! builders.
#![allow(dead_code)]

use policy_tree::model::{Child, StoragePolicy, Tree, TreePtr};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Drop accounting
// ============================================================================
/// Value that records its own drop in a shared counter.
#[derive(Debug)]
pub struct Tracked {
    pub id: usize,
    drops: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Hands out [Tracked] values and counts how many were dropped.
#[derive(Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
    created: Cell<usize>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, id: usize) -> Tracked {
        self.created.set(self.created.get() + 1);
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.drops.get()
    }

    pub fn alive(&self) -> usize {
        self.created() - self.dropped()
    }
}

// ============================================================================
// Builders
// ============================================================================
/// The tree `1(2(4,5),3(6,7))`.
pub fn sample_tree<P: StoragePolicy>() -> Tree<i32, P> {
    type Node<P> = Tree<i32, P>;
    Node::<P>::new(1, [
        Some(Node::<P>::create(2, [Some(Node::<P>::leaf(4)), Some(Node::<P>::leaf(5))])),
        Some(Node::<P>::create(3, [Some(Node::<P>::leaf(6)), Some(Node::<P>::leaf(7))])),
    ])
}

/// Complete binary tree of the given depth, nodes numbered in level order
/// starting at `id`.
pub fn complete_binary<P: StoragePolicy>(
    counter: &DropCounter,
    id: usize,
    depth: usize,
) -> TreePtr<Tracked, P> {
    if depth <= 1 {
        return Tree::<Tracked, P>::leaf(counter.track(id));
    }
    Tree::<Tracked, P>::create(counter.track(id), [
        Some(complete_binary::<P>(counter, 2 * id, depth - 1)),
        Some(complete_binary::<P>(counter, 2 * id + 1, depth - 1)),
    ])
}

/// Chain of `len` nodes, each the only child of the previous one.
/// Built bottom-up without recursion.
pub fn chain<P: StoragePolicy>(counter: &DropCounter, len: usize) -> TreePtr<Tracked, P> {
    let mut node = Tree::<Tracked, P>::leaf(counter.track(len - 1));
    for id in (0..len - 1).rev() {
        node = Tree::<Tracked, P>::create(counter.track(id), [Some(node)]);
    }
    node
}

/// Binary tree of `len` spine nodes; each spine node has the next spine
/// node on its left and a leaf on its right.
pub fn left_spine<P: StoragePolicy>(counter: &DropCounter, len: usize) -> TreePtr<Tracked, P> {
    let mut node = Tree::<Tracked, P>::leaf(counter.track(0));
    for id in 1..len {
        let leaf = Tree::<Tracked, P>::leaf(counter.track(len + id));
        node = Tree::<Tracked, P>::create(counter.track(id), [Some(node), Some(leaf)]);
    }
    node
}

/// Mirror image of [left_spine].
pub fn right_spine<P: StoragePolicy>(counter: &DropCounter, len: usize) -> TreePtr<Tracked, P> {
    let mut node = Tree::<Tracked, P>::leaf(counter.track(0));
    for id in 1..len {
        let leaf = Tree::<Tracked, P>::leaf(counter.track(len + id));
        node = Tree::<Tracked, P>::create(counter.track(id), [Some(leaf), Some(node)]);
    }
    node
}

// ============================================================================
// Random shapes
// ============================================================================
/// Shape of a random tree: a hole or a node with child shapes.
#[derive(Debug, Clone)]
pub enum Shape {
    Hole,
    Node(Vec<Shape>),
}

impl Shape {
    /// Number of present nodes.
    pub fn num_nodes(&self) -> usize {
        match self {
            Shape::Hole => 0,
            Shape::Node(children) => 1 + children.iter().map(Shape::num_nodes).sum::<usize>(),
        }
    }

    /// Builds the tree, numbering nodes in pre-order.
    pub fn build<P: StoragePolicy>(&self, counter: &DropCounter) -> Child<Tracked, P> {
        let mut next_id = 0;
        self.build_from::<P>(counter, &mut next_id)
    }

    fn build_from<P: StoragePolicy>(
        &self,
        counter: &DropCounter,
        next_id: &mut usize,
    ) -> Child<Tracked, P> {
        match self {
            Shape::Hole => None,
            Shape::Node(children) => {
                let value = counter.track(*next_id);
                *next_id += 1;
                let children: Vec<_> = children
                    .iter()
                    .map(|child| child.build_from::<P>(counter, next_id))
                    .collect();
                Some(Tree::<Tracked, P>::create(value, children))
            }
        }
    }
}

/// Random trees with holes and up to four child slots per node.
pub fn any_shape() -> impl Strategy<Value = Shape> {
    shape_with_sizes(prop_oneof![Just(0usize), 1usize..5].boxed())
}

/// Random trees in which no node has exactly one child slot.
pub fn shape_without_sole_children() -> impl Strategy<Value = Shape> {
    shape_with_sizes(prop_oneof![Just(0usize), 2usize..5].boxed())
}

fn shape_with_sizes(sizes: BoxedStrategy<usize>) -> impl Strategy<Value = Shape> {
    let leaf = Just(Shape::Node(Vec::new()));
    let inner_sizes = sizes.clone();
    let subtree = leaf.prop_recursive(6, 96, 4, move |inner| {
        let sizes = inner_sizes.clone();
        prop_oneof![
            1 => Just(Shape::Hole),
            4 => sizes.prop_flat_map(move |n| {
                prop::collection::vec(inner.clone(), n).prop_map(Shape::Node)
            }),
        ]
    });
    sizes.prop_flat_map(move |n| prop::collection::vec(subtree.clone(), n).prop_map(Shape::Node))
}

// ============================================================================
// Stack limits
// ============================================================================
/// Stack size far too small for dropping thousands of nested nodes
/// recursively.
pub const SMALL_STACK: usize = 128 * 1024;

/// Runs `f` on a thread with a [SMALL_STACK] and returns its result.
pub fn with_small_stack<R, F>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}
