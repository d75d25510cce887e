//! The growable list and its mutation policies.
//!
//! A [`FastList`] is a `Box<[T]>` block plus a logical length. Slots in
//! `[0, len)` are active; slots in `[len, capacity)` are stale and may hold
//! leftovers from earlier operations. Growth replaces the block with a
//! larger one; nothing ever shrinks it.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::config::GrowthPolicy;
use crate::error::ListError;
use crate::view::RawView;

/// A growable list with explicit capacity management.
///
/// Unlike `Vec`, the backing store is always fully initialised: every slot
/// holds a `T`, and indexing reaches the whole store rather than only the
/// active range. Insert and remove come in two flavours:
///
/// - **ordered** ([`insert_ordered`](Self::insert_ordered),
///   [`remove_ordered`](Self::remove_ordered)): shift the tail, keep relative
///   order, cost O(len − index).
/// - **fast** ([`insert_fast`](Self::insert_fast),
///   [`remove_fast`](Self::remove_fast)): relocate a single element, break
///   order, cost O(1).
///
/// # Preconditions
///
/// Index and emptiness requirements are checked with `debug_assert!` only.
/// Violating them in a release build never corrupts memory (slot access is
/// still bounds-checked against the capacity), but the logical result is
/// unspecified. Use the `try_*` methods for recoverable checks.
pub struct FastList<T> {
    /// Backing block. `store.len()` is the capacity.
    pub(crate) store: Box<[T]>,
    /// Logical length. Invariant: `count <= store.len()`.
    pub(crate) count: usize,
}

impl<T> FastList<T> {
    /// Take ownership of an existing block without copying it.
    ///
    /// Every slot of `block` becomes active: `len() == capacity() == block.len()`.
    pub fn from_owned(block: Box<[T]>) -> Self {
        let count = block.len();
        Self {
            store: block,
            count,
        }
    }

    /// Number of active elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if there are no active elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots in the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// The active range as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.store[..self.count]
    }

    /// The active range as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.store[..self.count]
    }

    /// Iterate over the active elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the active elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Borrow the whole backing block together with the logical length.
    ///
    /// No copy is made. The view borrows the list, so it cannot outlive the
    /// next mutation (which might replace the block).
    pub fn raw_view(&self) -> RawView<'_, T> {
        RawView::new(&self.store, self.count)
    }

    /// Set the logical length directly.
    ///
    /// For callers that fill slots by index and then publish how many are
    /// meaningful. Slots are not touched.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity()`.
    pub fn set_len(&mut self, len: usize) {
        assert!(
            len <= self.store.len(),
            "set_len({len}) exceeds capacity {}",
            self.store.len()
        );
        self.count = len;
    }

    /// Reset the length to zero without touching any slot.
    ///
    /// Previously active values stay in the store until overwritten or
    /// released with [`clear_and_release`](Self::clear_and_release).
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Checked read of an active element.
    pub fn try_get(&self, index: usize) -> Result<&T, ListError> {
        self.check_active(index)?;
        Ok(&self.store[index])
    }

    /// Give up the list and return the whole backing block, stale slots
    /// included.
    pub fn into_block(self) -> Box<[T]> {
        self.store
    }

    fn check_active(&self, index: usize) -> Result<(), ListError> {
        if index < self.count {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds {
                index,
                len: self.count,
            })
        }
    }
}

impl<T: Default> FastList<T> {
    /// Create an empty list with [`GrowthPolicy::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(GrowthPolicy::DEFAULT_CAPACITY)
    }

    /// Create an empty list with `capacity` default-filled slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: std::iter::repeat_with(T::default).take(capacity).collect(),
            count: 0,
        }
    }

    /// Append `item`, growing the store if it is full.
    ///
    /// O(1) amortized.
    #[inline]
    pub fn add(&mut self, item: T) {
        if self.count == self.store.len() {
            self.grow();
        }
        self.add_within_capacity(item);
    }

    /// Append `item` without ever growing.
    ///
    /// The list must not be full. In release builds a full list panics on
    /// the slot access instead of growing.
    #[inline]
    pub fn add_within_capacity(&mut self, item: T) {
        debug_assert!(
            self.count < self.store.len(),
            "add_within_capacity on a full list (capacity {})",
            self.store.len()
        );
        self.store[self.count] = item;
        self.count += 1;
    }

    /// Checked form of [`add_within_capacity`](Self::add_within_capacity).
    pub fn try_add_within_capacity(&mut self, item: T) -> Result<(), ListError> {
        if self.count == self.store.len() {
            return Err(ListError::CapacityExhausted {
                capacity: self.store.len(),
            });
        }
        self.add_within_capacity(item);
        Ok(())
    }

    /// Insert `item` at `index`, shifting every later element one slot
    /// toward the end.
    ///
    /// Relative order of the existing elements is preserved.
    /// `index` must be in `[0, len]`. O(len − index).
    pub fn insert_ordered(&mut self, item: T, index: usize) {
        if self.count == self.store.len() {
            self.grow();
        }
        self.insert_ordered_within_capacity(item, index);
    }

    /// [`insert_ordered`](Self::insert_ordered) without growth. The list must
    /// not be full.
    pub fn insert_ordered_within_capacity(&mut self, item: T, index: usize) {
        debug_assert!(
            index <= self.count,
            "insert index {index} out of range for length {}",
            self.count
        );
        debug_assert!(self.count < self.store.len(), "insert into a full list");
        let end = self.count;
        self.store[end] = item;
        self.store[index..=end].rotate_right(1);
        self.count = end + 1;
    }

    /// Insert `item` at `index`, moving the previous occupant of `index` to
    /// the end of the list.
    ///
    /// O(1), but order-breaking. `index` must be in `[0, len]`; inserting at
    /// `len` is a plain append.
    pub fn insert_fast(&mut self, item: T, index: usize) {
        if self.count == self.store.len() {
            self.grow();
        }
        self.insert_fast_within_capacity(item, index);
    }

    /// [`insert_fast`](Self::insert_fast) without growth. The list must not be
    /// full.
    pub fn insert_fast_within_capacity(&mut self, item: T, index: usize) {
        debug_assert!(
            index <= self.count,
            "insert index {index} out of range for length {}",
            self.count
        );
        debug_assert!(self.count < self.store.len(), "insert into a full list");
        let end = self.count;
        let displaced = mem::take(&mut self.store[index]);
        self.store[end] = displaced;
        self.store[index] = item;
        self.count = end + 1;
    }

    /// Remove and return the element at `index`, shifting every later element
    /// back by one slot.
    ///
    /// Relative order is preserved. `index` must be in `[0, len)`.
    /// O(len − index).
    pub fn remove_ordered(&mut self, index: usize) -> T {
        debug_assert!(
            index < self.count,
            "remove index {index} out of range for length {}",
            self.count
        );
        self.store[index..self.count].rotate_left(1);
        self.take_last()
    }

    /// Checked form of [`remove_ordered`](Self::remove_ordered).
    pub fn try_remove_ordered(&mut self, index: usize) -> Result<T, ListError> {
        self.check_removable(index)?;
        Ok(self.remove_ordered(index))
    }

    /// Remove and return the element at `index`, filling the hole with the
    /// last active element.
    ///
    /// O(1), but order-breaking. `index` must be in `[0, len)`.
    pub fn remove_fast(&mut self, index: usize) -> T {
        debug_assert!(
            index < self.count,
            "remove index {index} out of range for length {}",
            self.count
        );
        // An empty list wraps to usize::MAX, which the swap rejects.
        let last = self.count.wrapping_sub(1);
        self.store.swap(index, last);
        self.take_last()
    }

    /// Checked form of [`remove_fast`](Self::remove_fast).
    pub fn try_remove_fast(&mut self, index: usize) -> Result<T, ListError> {
        self.check_removable(index)?;
        Ok(self.remove_fast(index))
    }

    /// Remove and return the last active element. The list must not be empty.
    #[inline]
    pub fn pop(&mut self) -> T {
        debug_assert!(self.count > 0, "pop on an empty list");
        self.take_last()
    }

    /// Checked form of [`pop`](Self::pop).
    pub fn try_pop(&mut self) -> Result<T, ListError> {
        if self.count == 0 {
            return Err(ListError::Empty);
        }
        Ok(self.take_last())
    }

    /// Reset the length to zero and overwrite every previously active slot
    /// with `T::default()`, dropping the values they held.
    ///
    /// Stale slots beyond the old length are left alone; use
    /// [`clear_and_release_all`](Self::clear_and_release_all) for those.
    pub fn clear_and_release(&mut self) {
        let released = self.count;
        self.store[..released].fill_with(T::default);
        self.count = 0;
        tracing::trace!(released, "released active slots");
    }

    /// Reset the length to zero and overwrite every slot in the store with
    /// `T::default()`.
    pub fn clear_and_release_all(&mut self) {
        self.store.fill_with(T::default);
        self.count = 0;
        tracing::trace!(released = self.store.len(), "released all slots");
    }

    /// Move the last active slot out and shrink the length by one.
    fn take_last(&mut self) -> T {
        // An empty list wraps to usize::MAX, which the slot access rejects
        // before the length is touched.
        let last = self.count.wrapping_sub(1);
        let value = mem::take(&mut self.store[last]);
        self.count = last;
        value
    }

    fn check_removable(&self, index: usize) -> Result<(), ListError> {
        if self.count == 0 {
            return Err(ListError::Empty);
        }
        self.check_active(index)
    }

    /// Replace the store with a larger block and move every slot across.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let old_capacity = self.store.len();
        let new_capacity = GrowthPolicy::grown_capacity(old_capacity, self.count);
        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(mem::take(&mut self.store).into_vec());
        grown.resize_with(new_capacity, T::default);
        self.store = grown.into_boxed_slice();
        tracing::trace!(old_capacity, new_capacity, len = self.count, "grew list store");
    }
}

impl<T: Default> Default for FastList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for FastList<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            count: self.count,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FastList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Lists compare equal when their active ranges do; capacity and stale
/// slots are ignored.
impl<T: PartialEq> PartialEq for FastList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FastList<T> {}

/// Raw slot access over the whole store, `[0, capacity)`.
impl<T> Index<usize> for FastList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.store[index]
    }
}

impl<T> IndexMut<usize> for FastList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.store[index]
    }
}

impl<T> From<Box<[T]>> for FastList<T> {
    fn from(block: Box<[T]>) -> Self {
        Self::from_owned(block)
    }
}

impl<T> From<Vec<T>> for FastList<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_owned(vec.into_boxed_slice())
    }
}

impl<T: Default> Extend<T> for FastList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for FastList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a FastList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FastList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for FastList<T> {
    type Item = T;
    type IntoIter = std::iter::Take<std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        let count = self.count;
        self.store.into_vec().into_iter().take(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> FastList<i32> {
        let mut list = FastList::new();
        for &v in values {
            list.add(v);
        }
        list
    }

    #[test]
    fn new_has_default_capacity() {
        let list: FastList<i32> = FastList::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 10);
        assert!(list.is_empty());
    }

    #[test]
    fn add_then_index_returns_value() {
        let mut list = FastList::with_capacity(2);
        list.add(7);
        list.add(9);
        assert_eq!(list[list.len() - 1], 9);
        assert_eq!(list.as_slice(), &[7, 9]);
    }

    #[test]
    fn pop_after_add_returns_value() {
        let mut list = list_of(&[1, 2]);
        list.add(3);
        assert_eq!(list.pop(), 3);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn growth_from_zero_capacity_goes_to_eight() {
        let mut list = FastList::with_capacity(0);
        list.add(1);
        assert_eq!(list.capacity(), 8);
    }

    #[test]
    fn growth_doubles_and_keeps_order() {
        let mut list = FastList::with_capacity(10);
        for i in 0..10 {
            list.add(i);
        }
        assert_eq!(list.capacity(), 10);
        list.add(10);
        assert_eq!(list.capacity(), 20);
        assert_eq!(list.as_slice(), (0..11).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn insert_ordered_shifts_tail() {
        let mut list = list_of(&[1, 2, 3, 4]);
        list.insert_ordered(9, 1);
        assert_eq!(list.as_slice(), &[1, 9, 2, 3, 4]);
    }

    #[test]
    fn insert_ordered_at_end_appends() {
        let mut list = list_of(&[1, 2]);
        list.insert_ordered(3, 2);
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn insert_ordered_grows_full_list() {
        let mut list = FastList::from(vec![1, 2, 3]);
        list.insert_ordered(0, 0);
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn insert_fast_moves_occupant_to_end() {
        let mut list = list_of(&[1, 2, 3, 4]);
        list.insert_fast(9, 1);
        assert_eq!(list.as_slice(), &[1, 9, 3, 4, 2]);
    }

    #[test]
    fn insert_fast_at_len_is_append() {
        let mut list = list_of(&[1, 2]);
        list.insert_fast(3, 2);
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn remove_ordered_preserves_order() {
        let mut list = list_of(&[1, 2, 3, 4]);
        assert_eq!(list.remove_ordered(1), 2);
        assert_eq!(list.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn remove_fast_swaps_in_last() {
        let mut list = list_of(&[1, 2, 3, 4]);
        assert_eq!(list.remove_fast(0), 1);
        assert_eq!(list.as_slice(), &[4, 2, 3]);
    }

    #[test]
    fn remove_fast_last_element() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.remove_fast(2), 3);
        assert_eq!(list.as_slice(), &[1, 2]);
    }

    #[test]
    fn clear_resets_len_only() {
        let mut list = list_of(&[1, 2, 3]);
        let capacity = list.capacity();
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn clear_and_release_defaults_active_slots() {
        let mut list: FastList<Option<String>> = FastList::with_capacity(4);
        list.add(Some("a".into()));
        list.add(Some("b".into()));
        list.clear_and_release();
        assert_eq!(list.len(), 0);
        assert_eq!(list[0], None);
        assert_eq!(list[1], None);
    }

    #[test]
    fn clear_and_release_leaves_stale_slots() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        list.add(5);
        list.clear_and_release();
        assert_eq!(list[0], 0);
        // Slot 1 was stale at release time.
        assert_eq!(list[1], 2);
    }

    #[test]
    fn clear_and_release_all_defaults_every_slot() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        list.clear_and_release_all();
        assert!((0..list.capacity()).all(|i| list[i] == 0));
    }

    #[test]
    fn index_reaches_stale_slots() {
        let mut list: FastList<i32> = FastList::with_capacity(4);
        list[3] = 42;
        assert_eq!(list.len(), 0);
        list.set_len(4);
        assert_eq!(list.as_slice(), &[0, 0, 0, 42]);
    }

    #[test]
    #[should_panic(expected = "exceeds capacity")]
    fn set_len_past_capacity_panics() {
        let mut list: FastList<i32> = FastList::with_capacity(2);
        list.set_len(3);
    }

    #[test]
    fn from_owned_is_zero_copy() {
        let block: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
        let ptr = block.as_ptr();
        let list = FastList::from_owned(block);
        let view = list.raw_view();
        assert_eq!(view.as_ptr(), ptr);
        assert_eq!(view.len(), 3);
        assert_eq!(list.capacity(), 3);
    }

    #[test]
    fn try_ops_report_errors() {
        let mut list: FastList<i32> = FastList::with_capacity(1);
        assert_eq!(list.try_pop(), Err(ListError::Empty));
        assert_eq!(list.try_remove_fast(0), Err(ListError::Empty));
        list.try_add_within_capacity(1).unwrap();
        assert_eq!(
            list.try_add_within_capacity(2),
            Err(ListError::CapacityExhausted { capacity: 1 })
        );
        assert_eq!(
            list.try_get(1),
            Err(ListError::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(
            list.try_remove_ordered(3),
            Err(ListError::IndexOutOfBounds { index: 3, len: 1 })
        );
        assert_eq!(list.try_get(0), Ok(&1));
        assert_eq!(list.try_remove_ordered(0), Ok(1));
    }

    #[test]
    #[should_panic]
    fn pop_on_empty_list_panics() {
        let mut list: FastList<i32> = FastList::new();
        list.pop();
    }

    #[test]
    #[should_panic]
    fn add_within_capacity_on_full_list_panics() {
        let mut list = FastList::from(vec![1]);
        list.add_within_capacity(2);
    }

    #[test]
    fn equality_ignores_stale_slots() {
        let mut a = list_of(&[1, 2, 3]);
        let b = list_of(&[1, 2]);
        a.pop();
        assert_eq!(a, b);
    }

    #[test]
    fn owned_iteration_stops_at_len() {
        let mut list = list_of(&[1, 2, 3]);
        list.pop();
        let collected: Vec<_> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2]);
    }

    #[test]
    fn debug_shows_active_range() {
        let mut list = list_of(&[1, 2, 3]);
        list.pop();
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Add(i32),
            InsertOrdered(i32, usize),
            InsertFast(i32, usize),
            RemoveOrdered(usize),
            RemoveFast(usize),
            Pop,
            Clear,
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i32>().prop_map(Op::Add),
                (any::<i32>(), any::<usize>()).prop_map(|(v, i)| Op::InsertOrdered(v, i)),
                (any::<i32>(), any::<usize>()).prop_map(|(v, i)| Op::InsertFast(v, i)),
                any::<usize>().prop_map(Op::RemoveOrdered),
                any::<usize>().prop_map(Op::RemoveFast),
                Just(Op::Pop),
                Just(Op::Clear),
            ]
        }

        proptest! {
            #[test]
            fn len_tracks_vec_model_and_never_exceeds_capacity(
                initial in 0usize..12,
                ops in proptest::collection::vec(arb_op(), 0..200),
            ) {
                let mut list = FastList::with_capacity(initial);
                let mut model: Vec<i32> = Vec::new();
                for op in ops {
                    match op {
                        Op::Add(v) => {
                            list.add(v);
                            model.push(v);
                        }
                        Op::InsertOrdered(v, i) => {
                            let i = i % (model.len() + 1);
                            list.insert_ordered(v, i);
                            model.insert(i, v);
                        }
                        Op::InsertFast(v, i) => {
                            let i = i % (model.len() + 1);
                            list.insert_fast(v, i);
                            prop_assert_eq!(list[i], v);
                            if i == model.len() {
                                model.push(v);
                            } else {
                                let displaced = std::mem::replace(&mut model[i], v);
                                model.push(displaced);
                            }
                        }
                        Op::RemoveOrdered(i) if !model.is_empty() => {
                            let i = i % model.len();
                            prop_assert_eq!(list.remove_ordered(i), model.remove(i));
                        }
                        Op::RemoveFast(i) if !model.is_empty() => {
                            let i = i % model.len();
                            prop_assert_eq!(list.remove_fast(i), model.swap_remove(i));
                        }
                        Op::Pop if !model.is_empty() => {
                            prop_assert_eq!(Some(list.pop()), model.pop());
                        }
                        Op::Clear => {
                            list.clear();
                            model.clear();
                        }
                        _ => {}
                    }
                    prop_assert!(list.len() <= list.capacity());
                    prop_assert_eq!(list.as_slice(), model.as_slice());
                }
            }

            #[test]
            fn growth_strictly_increases_capacity(
                values in proptest::collection::vec(any::<u8>(), 1..100),
                initial in 0usize..6,
            ) {
                let mut list = FastList::with_capacity(initial);
                for &v in &values {
                    let before = list.capacity();
                    let full = list.len() == before;
                    list.add(v);
                    if full {
                        prop_assert!(list.capacity() > before);
                    } else {
                        prop_assert_eq!(list.capacity(), before);
                    }
                }
                prop_assert_eq!(list.as_slice(), values.as_slice());
            }

            #[test]
            fn clear_and_release_defaults_former_active_range(
                values in proptest::collection::vec(1i64..1000, 0..50),
            ) {
                let mut list: FastList<i64> = values.iter().copied().collect();
                let old_len = list.len();
                list.clear_and_release();
                prop_assert_eq!(list.len(), 0);
                prop_assert!((0..old_len).all(|i| list[i] == 0));
            }
        }
    }
}
