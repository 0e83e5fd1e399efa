//! Pull-based cursors behind the single-operation [`Advance`] trait.
//!
//! This crate is the iterator family of the Strata workspace. A cursor
//! writes its next value into a caller-supplied slot and reports whether a
//! value was produced:
//!
//! ```text
//! Advance (trait: advance(&mut slot) -> bool)
//! ├── Range    — ascending u32 sequence over [start, end]
//! └── ListIter — forward walk over a borrowed singly-linked list
//! ```
//!
//! Cursors are synchronous and single-threaded, with no buffering and no
//! look-ahead. Exhaustion is idempotent: once a cursor reports `false` it
//! keeps reporting `false` without touching the slot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advance;
pub mod list;
pub mod range;

pub use advance::Advance;
pub use list::{ListIter, Node};
pub use range::Range;
