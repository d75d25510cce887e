//! Manually managed growable list for allocation-sensitive code.
//!
//! [`FastList`] owns a fully initialised `Box<[T]>` and a logical length.
//! It grows by explicit reallocation, never shrinks on its own, and offers
//! ordered and swap-based variants of insert and remove so the
//! order-preservation contract is visible at every call site.
//!
//! # Layout
//!
//! ```text
//! FastList<T>
//! ├── store: Box<[T]>   capacity slots, all initialised
//! │   ├── [0, len)          active
//! │   └── [len, capacity)   stale (leftovers, never read by list ops)
//! └── count: usize      logical length
//! ```
//!
//! # Checking
//!
//! Index and emptiness preconditions are `debug_assert!`ed and skipped in
//! release builds. Slot access stays bounds-checked against the capacity
//! in every build, so a violated precondition yields an unspecified
//! logical result or a panic, never memory corruption. The `try_*` methods
//! return [`ListError`] instead, and the `unsafe` `get_unchecked*`
//! accessors skip the capacity check too.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod list;
mod raw;
pub mod view;

// Public re-exports for the primary API surface.
pub use config::GrowthPolicy;
pub use error::ListError;
pub use list::FastList;
pub use view::RawView;
