//! List-specific error types.

use std::error::Error;
use std::fmt;

/// Errors returned by the checked `try_*` operations on
/// [`FastList`](crate::FastList).
///
/// The primary operations treat these conditions as precondition
/// violations instead; see the crate-level docs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index outside the active range `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// A removal was requested from an empty list.
    Empty,
    /// A non-expanding append found every slot in use.
    CapacityExhausted {
        /// Number of slots in the backing store.
        capacity: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for list of length {len}")
            }
            Self::Empty => write!(f, "list is empty"),
            Self::CapacityExhausted { capacity } => {
                write!(f, "list is full: all {capacity} slots in use")
            }
        }
    }
}

impl Error for ListError {}
