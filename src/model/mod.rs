//! Data model for generic n-ary trees with a compile-time ownership policy.
//!
//! # Tree representation
//! A tree is made of [Tree] nodes. Each node stores one value and an
//! ordered sequence of child slots ([Children]); a slot either holds a
//! handle to a child node or is a hole (`None`).
//!
//! The handle type is chosen by the [StoragePolicy] type parameter:
//!
//! | Policy | Handle | Alias | Use case |
//! |--------|--------|-------|----------|
//! | [Unique] | `Box` | [UniqueTree] | Move-only trees with a single owner per node |
//! | [Shared] | `Arc` | [SharedTree] | Subtrees referenced from several places |
//!
//! # Destroying deep trees
//! Dropping a handle releases its subtree recursively, which can exhaust
//! the call stack on very deep trees. [`Tree::remove_children`] drains a
//! node without recursion; the older rotation-based [RotatingDestroy] is
//! kept for compatibility.

/// Generic tree node and its construction and mutation API
pub mod tree;
/// Ownership policies (unique, shared) for child handles
pub mod storage_policy;
/// Legacy rotation-based destruction
pub mod destroy;
/// Errors of checked child access
pub mod tree_error;

pub use destroy::RotatingDestroy;
pub use storage_policy::{Shared, StoragePolicy, Unique};
pub use tree::{Child, Children, SharedTree, Tree, TreePtr, UniqueTree};
pub use tree_error::TreeError;
