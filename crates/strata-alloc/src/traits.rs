//! The object-safe [`Allocator`] trait shared by every variant.

use std::ptr::NonNull;

use crate::error::AllocError;

/// A pluggable byte allocator.
///
/// # Contract
///
/// - `alloc` returns a pointer to `size` bytes, or an error; it never
///   panics on exhaustion and never retries.
/// - `release` returns one allocation; variants with a bulk-free model
///   (bump, arena) treat it as a no-op and reclaim memory only through
///   their own `free_all`/`clear`/`destroy` lifecycle methods.
/// - `realloc(old, new_size)` produces an allocation of `new_size` bytes.
///   Only [`HeapAllocator`](crate::HeapAllocator) preserves old contents;
///   the bump and arena variants treat it as a fresh `alloc` and copy
///   nothing. `realloc(None, n)` behaves as `alloc(n)`.
///
/// There is no zeroed-allocation operation and no alignment parameter:
/// allocations are byte-aligned.
///
/// # Object safety
///
/// The trait is object-safe; [`ArenaAllocator`](crate::ArenaAllocator)
/// composes over any implementation through `&mut dyn Allocator`.
pub trait Allocator {
    /// Allocate `size` bytes.
    ///
    /// Callers must check the result before dereferencing — exhaustion is
    /// an `Err`, not a panic.
    fn alloc(&mut self, size: usize) -> Result<NonNull<u8>, AllocError>;

    /// Return one allocation to the allocator.
    ///
    /// No-op for bump and arena allocators, which free only in bulk.
    fn release(&mut self, ptr: NonNull<u8>);

    /// Produce an allocation of `new_size` bytes, optionally replacing
    /// `old`.
    ///
    /// See the trait-level contract for which variants preserve contents.
    fn realloc(
        &mut self,
        old: Option<NonNull<u8>>,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError>;
}
