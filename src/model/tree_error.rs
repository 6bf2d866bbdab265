//! Error type for checked child access.

use thiserror::Error;

/// Contract violations reported by the checked accessors of
/// [Tree](crate::model::Tree).
///
/// None of these are environmental: they all mean the caller asked for a
/// child that is not there (or not reachable mutably).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Index is not below the current child count.
    #[error("child index {index} out of range for node with {count} children")]
    ChildIndexOutOfRange { index: usize, count: usize },

    /// The slot exists but holds no child (a hole).
    #[error("child slot {index} is empty")]
    EmptyChildSlot { index: usize },

    /// The child is referenced by other handles and cannot be mutated.
    #[error("child {index} is shared with other handles")]
    SharedChild { index: usize },
}
