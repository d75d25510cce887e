//! Fully unchecked slot access.
//!
//! The only module in this crate allowed to contain `unsafe`. Every
//! function here skips the slice bounds check that the safe API keeps,
//! and carries a `// SAFETY:` note stating what the caller upholds.

#![allow(unsafe_code)]

use crate::list::FastList;

impl<T> FastList<T> {
    /// Read a slot without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity()`](FastList::capacity).
    /// It may point at a stale slot.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.store.len(), "unchecked index {index} past capacity");
        // SAFETY: the caller guarantees `index < store.len()`.
        unsafe { self.store.get_unchecked(index) }
    }

    /// Mutably borrow a slot without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity()`](FastList::capacity).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.store.len(), "unchecked index {index} past capacity");
        // SAFETY: the caller guarantees `index < store.len()`.
        unsafe { self.store.get_unchecked_mut(index) }
    }
}
