//! Breadth-first traversal.

use crate::model::{StoragePolicy, Tree};
use crate::traversal::{Traversal, same_position};
use std::iter::FusedIterator;

/// Iterator visiting a subtree level by level, left to right.
///
/// Keeps the nodes of the level being visited and collects the present
/// children of each visited node for the next level. Once the current level
/// is used up, the collected level takes its place.
pub struct BreadthFirst<'a, T, P: StoragePolicy> {
    this_level: Vec<&'a Tree<T, P>>,
    position: usize,
    next_level: Vec<&'a Tree<T, P>>,
}

impl<'a, T, P: StoragePolicy> BreadthFirst<'a, T, P> {
    pub(crate) fn new(root: &'a Tree<T, P>) -> Self {
        BreadthFirst {
            this_level: vec![root],
            position: 0,
            next_level: Vec::new(),
        }
    }

    fn position_node(&self) -> Option<&'a Tree<T, P>> {
        self.this_level.get(self.position).copied()
    }
}

impl<'a, T: 'a, P: StoragePolicy> Traversal<'a, T, P> for BreadthFirst<'a, T, P> {
    fn from_root(root: &'a Tree<T, P>) -> Self {
        Self::new(root)
    }

    fn current(&self) -> Option<&'a Tree<T, P>> {
        self.position_node()
    }
}

impl<'a, T, P: StoragePolicy> Iterator for BreadthFirst<'a, T, P> {
    type Item = &'a Tree<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.position_node()?;

        self.next_level
            .extend(node.children.iter().filter_map(Option::as_deref));

        self.position += 1;
        if self.position == self.this_level.len() {
            std::mem::swap(&mut self.this_level, &mut self.next_level);
            self.next_level.clear();
            self.position = 0;
        }

        Some(node)
    }
}

impl<T, P: StoragePolicy> FusedIterator for BreadthFirst<'_, T, P> {}

impl<T, P: StoragePolicy> PartialEq for BreadthFirst<'_, T, P> {
    fn eq(&self, other: &Self) -> bool {
        same_position(self.position_node(), other.position_node())
    }
}
