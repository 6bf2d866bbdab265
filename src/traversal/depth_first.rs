//! Depth-first (pre-order) traversal.

use crate::model::{Child, StoragePolicy, Tree};
use crate::traversal::{Traversal, same_position};
use std::iter::FusedIterator;
use std::slice;

/// Iterator visiting a node before its children, left to right.
///
/// Instead of recursing, keeps a stack with the not yet visited child slots
/// of each ancestor on the path to the current node.
pub struct DepthFirst<'a, T, P: StoragePolicy> {
    current: Option<&'a Tree<T, P>>,
    stack: Vec<slice::Iter<'a, Child<T, P>>>,
}

impl<'a, T, P: StoragePolicy> DepthFirst<'a, T, P> {
    pub(crate) fn new(root: &'a Tree<T, P>) -> Self {
        DepthFirst {
            current: Some(root),
            stack: Vec::new(),
        }
    }

    /// Finds the next present child slot, dropping exhausted frames.
    fn advance(&mut self) -> Option<&'a Tree<T, P>> {
        while let Some(siblings) = self.stack.last_mut() {
            match siblings.next() {
                Some(Some(child)) => return Some(&**child),
                Some(None) => continue,
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<'a, T: 'a, P: StoragePolicy> Traversal<'a, T, P> for DepthFirst<'a, T, P> {
    fn from_root(root: &'a Tree<T, P>) -> Self {
        Self::new(root)
    }

    fn current(&self) -> Option<&'a Tree<T, P>> {
        self.current
    }
}

impl<'a, T, P: StoragePolicy> Iterator for DepthFirst<'a, T, P> {
    type Item = &'a Tree<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        if node.has_child() {
            self.stack.push(node.children.iter());
        }
        self.current = self.advance();
        Some(node)
    }
}

impl<T, P: StoragePolicy> FusedIterator for DepthFirst<'_, T, P> {}

impl<T, P: StoragePolicy> PartialEq for DepthFirst<'_, T, P> {
    fn eq(&self, other: &Self) -> bool {
        same_position(self.current, other.current)
    }
}
