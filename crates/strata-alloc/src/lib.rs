//! Pluggable allocators behind a single object-safe [`Allocator`] trait.
//!
//! This crate is the allocator family of the Strata workspace. Three
//! variants implement the same three-operation contract:
//!
//! ```text
//! Allocator (trait: alloc / release / realloc)
//! ├── HeapAllocator   — delegates to the process-wide allocator
//! ├── BumpAllocator   — linear cursor over a fixed-capacity buffer
//! └── ArenaAllocator  — linear cursor over a buffer that grows through a
//!                       borrowed backing `&mut dyn Allocator` (which may
//!                       itself be an arena)
//! ```
//!
//! This is the one Strata crate that may contain `unsafe` code. All unsafe
//! is confined to handing out raw [`NonNull<u8>`](std::ptr::NonNull)
//! pointers into buffers the allocator owns, plus the `std::alloc` calls in
//! the heap variant.
//!
//! # Scope boundaries
//!
//! These allocators are a deliberately small model, not a general-purpose
//! heap replacement:
//!
//! - Allocations are byte-aligned; there is no alignment handling.
//! - No zeroed-allocation operation.
//! - Not thread-safe: every allocator is owned by one logical thread of
//!   control at a time.
//! - Bump and arena `realloc` do NOT copy old contents; see the method
//!   docs before relying on them.
//! - Pointers into an arena are valid only until the next growing
//!   allocation on the same arena.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod bump;
pub mod error;
pub mod heap;
pub mod traits;

pub use arena::ArenaAllocator;
pub use bump::BumpAllocator;
pub use error::AllocError;
pub use heap::HeapAllocator;
pub use traits::Allocator;
