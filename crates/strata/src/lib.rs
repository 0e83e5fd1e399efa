//! Strata: three independent capability-trait families with pluggable
//! implementations.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! The families share one architectural idea — a minimal trait with a
//! handful of concrete variants, composed through dynamic dispatch where
//! it pays (the arena allocator stacks over `&mut dyn Allocator`) and
//! used directly everywhere else:
//!
//! - [`alloc`]: `Allocator` with heap, bump, and arena variants.
//! - [`iter`]: `Advance`, a slot-writing pull cursor, with range and
//!   linked-list variants.
//! - [`scan`]: `Scan`, an incremental fold with repeatable extraction,
//!   with sum and string-builder variants.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // Bump memory out of a fixed buffer, arena-composed over it.
//! let mut bump = BumpAllocator::new(4096);
//! let mut arena = ArenaAllocator::new(&mut bump);
//! let block = arena.alloc(128).expect("fits");
//! assert!(!block.as_ptr().is_null());
//!
//! // Fold a range of integers into a running sum.
//! let mut range = Range::new(0, 10);
//! let mut sum = Sum::new();
//! let mut slot = 0u32;
//! while range.advance(&mut slot) {
//!     sum.append(slot);
//! }
//! assert_eq!(sum.total(), 55);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use strata_alloc as alloc;
pub use strata_iter as iter;
pub use strata_scan as scan;

/// Commonly used traits and types, importable in one line.
pub mod prelude {
    pub use strata_alloc::{AllocError, Allocator, ArenaAllocator, BumpAllocator, HeapAllocator};
    pub use strata_iter::{Advance, ListIter, Node, Range};
    pub use strata_scan::{Scan, StringBuilder, Sum};
}
