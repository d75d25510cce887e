//! Workloads shared by the fastlist benchmarks.
//!
//! Each shift workload fills a container with `0..len` and then moves every
//! element down by one slot, the access pattern the list was built for:
//! sized once, then mutated purely by index.
//!
//! - [`shift_boxed_slice`]: plain `Box<[i32]>` baseline
//! - [`shift_vec`]: `Vec<i32>` filled with `push`
//! - [`shift_fast_list`]: [`FastList`] filled by index, length published
//!   once with [`FastList::set_len`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fastlist_core::FastList;
use fastlist_text::CharArray;

/// Element count used by the reference shift benchmark.
pub const REFERENCE_LEN: usize = 1_000_000;

/// Fill a boxed slice and shift it down by one.
pub fn shift_boxed_slice(len: usize) -> Box<[i32]> {
    let mut array = vec![0i32; len].into_boxed_slice();
    for (i, slot) in array.iter_mut().enumerate() {
        *slot = i as i32;
    }
    for i in 0..len.saturating_sub(1) {
        array[i] = array[i + 1];
    }
    array
}

/// Fill a `Vec` with `push` and shift it down by one.
pub fn shift_vec(len: usize) -> Vec<i32> {
    let mut vec = Vec::with_capacity(len);
    for i in 0..len {
        vec.push(i as i32);
    }
    for i in 0..len.saturating_sub(1) {
        vec[i] = vec[i + 1];
    }
    vec
}

/// Fill a [`FastList`] by index, publish the length, shift it down by one.
pub fn shift_fast_list(len: usize) -> FastList<i32> {
    let mut list = FastList::with_capacity(len);
    for i in 0..len {
        list[i] = i as i32;
    }
    list.set_len(len);
    for i in 0..len.saturating_sub(1) {
        list[i] = list[i + 1];
    }
    list
}

/// Append `0..len` through [`FastList::add`], starting from
/// `initial_capacity` slots.
pub fn fill_with_add(len: usize, initial_capacity: usize) -> FastList<i32> {
    let mut list = FastList::with_capacity(initial_capacity);
    for i in 0..len {
        list.add(i as i32);
    }
    list
}

/// Rebuild a score label `frames` times in the same buffer.
pub fn rebuild_label(buffer: &mut CharArray, frames: i32) {
    for frame in 0..frames {
        buffer.clear();
        buffer.append_str("score ");
        buffer.append_i32(frame, 6);
        buffer.append_char(' ');
        buffer.append_f32(frame as f32 * 0.25, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shift_workloads_agree() {
        let len = 1000;
        let baseline = shift_boxed_slice(len);
        assert_eq!(shift_vec(len).as_slice(), &baseline[..]);
        assert_eq!(shift_fast_list(len).as_slice(), &baseline[..]);
        assert_eq!(baseline[0], 1);
        assert_eq!(baseline[len - 1], (len - 1) as i32);
    }

    #[test]
    fn shift_handles_empty() {
        assert!(shift_fast_list(0).is_empty());
        assert!(shift_vec(0).is_empty());
    }

    #[test]
    fn fill_with_add_grows_from_zero() {
        let list = fill_with_add(100, 0);
        assert_eq!(list.len(), 100);
        assert_eq!(list.capacity(), 128);
    }

    #[test]
    fn rebuild_label_leaves_last_frame() {
        let mut buffer = CharArray::with_capacity(32);
        rebuild_label(&mut buffer, 5);
        assert_eq!(buffer.to_text(), "score 000004 1.00");
    }
}
