//! Convenience extensions for plain arrays.
//!
//! - [`ArrayExt::random_item`]: uniform pick from a slice with a caller
//!   supplied RNG, so seeded callers stay deterministic.
//! - [`IntoFastList::into_fast_list`]: adopt an existing boxed slice or
//!   `Vec` as a [`FastList`] without copying the elements.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use fastlist_core::FastList;
use rand::Rng;

/// Random selection over a slice.
pub trait ArrayExt<T> {
    /// Pick one element uniformly at random, or `None` if the slice is empty.
    fn random_item<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T>;
}

impl<T> ArrayExt<T> for [T] {
    fn random_item<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.random_range(0..self.len()))
    }
}

/// Zero-copy conversion of owned storage into a [`FastList`].
pub trait IntoFastList<T> {
    /// Wrap `self` as a list whose active range is every element.
    fn into_fast_list(self) -> FastList<T>;
}

impl<T> IntoFastList<T> for Box<[T]> {
    fn into_fast_list(self) -> FastList<T> {
        tracing::debug!(len = self.len(), "adopting boxed slice as FastList");
        FastList::from_owned(self)
    }
}

/// Goes through `Vec::into_boxed_slice`, which only reallocates when the
/// vector has spare capacity.
impl<T> IntoFastList<T> for Vec<T> {
    fn into_fast_list(self) -> FastList<T> {
        self.into_boxed_slice().into_fast_list()
    }
}
