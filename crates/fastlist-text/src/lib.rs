//! Allocation-free text building.
//!
//! [`CharArray`] is a [`FastList<char>`](fastlist_core::FastList) with append
//! operations for strings, characters, integers and floats. Numbers are
//! written digit by digit straight into the buffer, so once the buffer has
//! enough capacity, rebuilding a label every frame allocates nothing.
//! The result is handed to a [`TextSink`] without copying, or turned into a
//! `String` when an owned value is actually needed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod char_array;
pub mod sink;

pub use char_array::CharArray;
pub use sink::TextSink;
