//! fastlist: a low-overhead growable list and an allocation-free text buffer.
//!
//! This is the facade crate that re-exports the public API of the fastlist
//! sub-crates. For most users, adding `fastlist` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fastlist::prelude::*;
//!
//! let mut list = FastList::with_capacity(4);
//! list.add(1);
//! list.add(2);
//! list.add(3);
//! list.insert_ordered(0, 0);
//! assert_eq!(list.as_slice(), &[0, 1, 2, 3]);
//!
//! // Swap-based removal: O(1), the last element fills the hole.
//! assert_eq!(list.remove_fast(0), 0);
//! assert_eq!(list.as_slice(), &[3, 1, 2]);
//!
//! let mut label = CharArray::new();
//! label.append_str("t=");
//! label.append_f32(2.5, 1);
//! let mut shown = String::new();
//! label.expose_for_rendering(&mut shown);
//! assert_eq!(shown, "t=2.5");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`list`] | `fastlist-core` | `FastList`, growth policy, errors, raw views |
//! | [`text`] | `fastlist-text` | `CharArray`, `TextSink` |
//! | [`ext`] | `fastlist-ext` | Random pick and zero-copy conversion for arrays |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable list, growth policy, and errors (`fastlist-core`).
pub use fastlist_core as list;

/// Allocation-free text building (`fastlist-text`).
///
/// [`text::CharArray`] wraps a `FastList<char>`; [`text::TextSink`] is the
/// renderer side of the zero-copy hand-off.
pub use fastlist_text as text;

/// Array convenience extensions (`fastlist-ext`).
pub use fastlist_ext as ext;

/// Common imports for typical fastlist usage.
///
/// ```rust
/// use fastlist::prelude::*;
/// ```
pub mod prelude {
    pub use fastlist_core::{FastList, GrowthPolicy, ListError, RawView};
    pub use fastlist_ext::{ArrayExt, IntoFastList};
    pub use fastlist_text::{CharArray, TextSink};
}
