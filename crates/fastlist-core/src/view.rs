//! Zero-copy borrowed view of a list's backing block.

use std::fmt;

/// The backing block of a [`FastList`](crate::FastList) together with its
/// logical length.
///
/// Consumers must treat only `block()[..len()]` as meaningful. The view
/// borrows the list, so any mutation (and therefore any reallocation) ends
/// it.
pub struct RawView<'a, T> {
    block: &'a [T],
    len: usize,
}

impl<'a, T> RawView<'a, T> {
    pub(crate) fn new(block: &'a [T], len: usize) -> Self {
        debug_assert!(len <= block.len());
        Self { block, len }
    }

    /// The whole backing block, stale slots included.
    pub fn block(&self) -> &'a [T] {
        self.block
    }

    /// Logical length of the list when the view was taken.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list had no active elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Just the active range.
    pub fn active(&self) -> &'a [T] {
        &self.block[..self.len]
    }

    /// Address of the first slot. Identifies the backing allocation.
    pub fn as_ptr(&self) -> *const T {
        self.block.as_ptr()
    }
}

impl<T> Clone for RawView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawView<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for RawView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawView")
            .field("active", &self.active())
            .field("capacity", &self.block.len())
            .finish()
    }
}
