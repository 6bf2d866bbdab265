//! Ownership policies for child handles.
//!
//! A [StoragePolicy] selects, at compile time, which smart pointer a
//! [Tree](crate::model::Tree) uses to hold its children:
//!
//! | Policy | Handle | Semantics |
//! |--------|--------|-----------|
//! | [Unique] | [Box] | Exactly one owner, moving a handle transfers it |
//! | [Shared] | [Arc] | Reference counted, node lives until the last handle drops |
//!
//! Sharing a node under [Unique] is impossible by construction: a [Box]
//! cannot be duplicated, so there is no runtime check for it.

use std::ops::Deref;
use std::sync::Arc;

/// Type-level choice of how tree nodes own their children.
pub trait StoragePolicy: 'static {
    /// Handle type owning (or co-owning) a value of type `U`.
    type Ptr<U>: Deref<Target = U>;

    /// Short name of the policy, used in log events.
    const NAME: &'static str;

    /// Moves `value` into a freshly allocated handle.
    fn new_ptr<U>(value: U) -> Self::Ptr<U>;

    /// Returns exclusive access to the pointee, or `None` if other handles
    /// to the same value are alive.
    fn get_mut<U>(ptr: &mut Self::Ptr<U>) -> Option<&mut U>;
}

/// Children are exclusively owned by their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unique {}

/// Children may be shared between trees and external holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shared {}

impl StoragePolicy for Unique {
    type Ptr<U> = Box<U>;

    const NAME: &'static str = "unique";

    fn new_ptr<U>(value: U) -> Box<U> {
        Box::new(value)
    }

    fn get_mut<U>(ptr: &mut Box<U>) -> Option<&mut U> {
        Some(&mut **ptr)
    }
}

impl StoragePolicy for Shared {
    type Ptr<U> = Arc<U>;

    const NAME: &'static str = "shared";

    fn new_ptr<U>(value: U) -> Arc<U> {
        Arc::new(value)
    }

    fn get_mut<U>(ptr: &mut Arc<U>) -> Option<&mut U> {
        Arc::get_mut(ptr)
    }
}
