//! Capacity and growth parameters.

/// Growth policy for [`FastList`](crate::FastList).
///
/// Growth happens only when an append or insert finds the list full.
/// Small stores jump straight to [`GrowthPolicy::MIN_GROWN_CAPACITY`];
/// everything else doubles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy;

impl GrowthPolicy {
    /// Capacity used by [`FastList::new`](crate::FastList::new).
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Stores with fewer slots than this grow to `MIN_GROWN_CAPACITY`
    /// instead of doubling.
    pub const SMALL_CAPACITY: usize = 4;

    /// Capacity a small store grows to.
    pub const MIN_GROWN_CAPACITY: usize = 8;

    /// Capacity to grow to when a list holding `len` elements in a store of
    /// `capacity` slots is full.
    ///
    /// Growth only ever triggers at `len == capacity`, so for any store of at
    /// least `SMALL_CAPACITY` slots this doubles the capacity.
    pub fn grown_capacity(capacity: usize, len: usize) -> usize {
        if capacity < Self::SMALL_CAPACITY {
            Self::MIN_GROWN_CAPACITY
        } else {
            // Saturates; the allocation fails long before this matters.
            len.saturating_mul(2)
        }
    }
}
