//! In-order traversal, generalized to any number of children.
//!
//! For a node with children `c0, c1, ..., ck` the order is: subtree of
//! `c0`, the node, then the subtrees of `c1` to `ck`. If the first slot is a
//! hole, the node comes first. On a binary tree this is the usual in-order.

use crate::model::{Child, StoragePolicy, Tree};
use crate::traversal::{Traversal, same_position};
use std::iter::FusedIterator;
use std::slice;

/// One ancestor on the path to the current node.
struct Frame<'a, T, P: StoragePolicy> {
    /// Ancestor still to be yielded once its leftmost subtree is done
    pending: Option<&'a Tree<T, P>>,
    /// Siblings right of the leftmost child
    rest: slice::Iter<'a, Child<T, P>>,
}

/// Iterator visiting the leftmost subtree, then the node, then the
/// remaining subtrees.
pub struct InOrder<'a, T, P: StoragePolicy> {
    current: Option<&'a Tree<T, P>>,
    stack: Vec<Frame<'a, T, P>>,
}

impl<'a, T, P: StoragePolicy> InOrder<'a, T, P> {
    pub(crate) fn new(root: &'a Tree<T, P>) -> Self {
        let mut iter = InOrder {
            current: None,
            stack: Vec::new(),
        };
        iter.current = Some(iter.descend_leftmost(root));
        iter
    }

    /// Walks down first children from `root`, pushing a frame per node,
    /// and returns the first node to yield.
    fn descend_leftmost(&mut self, root: &'a Tree<T, P>) -> &'a Tree<T, P> {
        let mut node = root;
        loop {
            let mut rest = node.children.iter();
            match rest.next() {
                None => break,
                Some(Some(left)) => {
                    self.stack.push(Frame {
                        pending: Some(node),
                        rest,
                    });
                    node = &**left;
                }
                Some(None) => {
                    // Hole on the left: node itself comes first
                    self.stack.push(Frame {
                        pending: None,
                        rest,
                    });
                    break;
                }
            }
        }
        node
    }

    fn advance(&mut self) -> Option<&'a Tree<T, P>> {
        while let Some(frame) = self.stack.last_mut() {
            if let Some(pending) = frame.pending.take() {
                return Some(pending);
            }
            match frame.rest.find_map(Option::as_deref) {
                Some(sibling) => return Some(self.descend_leftmost(sibling)),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<'a, T: 'a, P: StoragePolicy> Traversal<'a, T, P> for InOrder<'a, T, P> {
    fn from_root(root: &'a Tree<T, P>) -> Self {
        Self::new(root)
    }

    fn current(&self) -> Option<&'a Tree<T, P>> {
        self.current
    }
}

impl<'a, T, P: StoragePolicy> Iterator for InOrder<'a, T, P> {
    type Item = &'a Tree<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = self.advance();
        Some(node)
    }
}

impl<T, P: StoragePolicy> FusedIterator for InOrder<'_, T, P> {}

impl<T, P: StoragePolicy> PartialEq for InOrder<'_, T, P> {
    fn eq(&self, other: &Self) -> bool {
        same_position(self.current, other.current)
    }
}
