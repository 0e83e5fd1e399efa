//! Heap allocator delegating to the process-wide allocator.

use std::alloc::Layout;
use std::ptr::NonNull;

use indexmap::IndexMap;

use crate::error::AllocError;
use crate::traits::Allocator;

/// An [`Allocator`] that delegates to `std::alloc`.
///
/// Because `std::alloc::dealloc` requires the allocation's original layout,
/// the heap variant keeps a table of live allocations (pointer address →
/// size). Releasing a pointer this allocator did not hand out, or releasing
/// one twice, is a precondition violation caught by `debug_assert!`.
///
/// Zero-size requests are satisfied with a dangling pointer and never touch
/// the system allocator; releasing a dangling pointer is a no-op.
///
/// Any allocations still live when the allocator is dropped are returned to
/// the system allocator.
pub struct HeapAllocator {
    /// Live allocations: pointer address → size in bytes.
    live: IndexMap<usize, usize>,
}

impl HeapAllocator {
    /// Create a heap allocator with no live allocations.
    pub fn new() -> Self {
        Self {
            live: IndexMap::new(),
        }
    }

    /// Number of allocations handed out and not yet released.
    pub fn live_allocations(&self) -> usize {
        self.live.len()
    }

    /// Layout for a byte allocation of `size`.
    ///
    /// Only called with sizes that were accepted by a prior `alloc`, so
    /// the layout is known valid.
    fn byte_layout(size: usize) -> Layout {
        // SAFETY: align is 1 and `size` was already validated against
        // `Layout::from_size_align` when the allocation was made.
        unsafe { Layout::from_size_align_unchecked(size, 1) }
    }
}

impl Default for HeapAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator for HeapAllocator {
    fn alloc(&mut self, size: usize) -> Result<NonNull<u8>, AllocError> {
        if size == 0 {
            return Ok(NonNull::dangling());
        }
        let layout = Layout::from_size_align(size, 1)
            .map_err(|_| AllocError::SystemExhausted { requested: size })?;
        // SAFETY: layout has non-zero size.
        let raw = unsafe { std::alloc::alloc(layout) };
        match NonNull::new(raw) {
            Some(ptr) => {
                self.live.insert(ptr.as_ptr() as usize, size);
                Ok(ptr)
            }
            None => Err(AllocError::SystemExhausted { requested: size }),
        }
    }

    fn release(&mut self, ptr: NonNull<u8>) {
        if ptr == NonNull::dangling() {
            // Zero-size allocation; nothing was allocated.
            return;
        }
        let removed = self.live.swap_remove(&(ptr.as_ptr() as usize));
        debug_assert!(
            removed.is_some(),
            "released pointer was not allocated by this heap allocator"
        );
        if let Some(size) = removed {
            // SAFETY: `ptr` came from `std::alloc::alloc` with this layout
            // and has not been released before (it was still in the table).
            unsafe { std::alloc::dealloc(ptr.as_ptr(), Self::byte_layout(size)) };
        }
    }

    fn realloc(
        &mut self,
        old: Option<NonNull<u8>>,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        let old_ptr = match old {
            Some(ptr) if ptr != NonNull::dangling() => ptr,
            _ => return self.alloc(new_size),
        };
        let removed = self.live.swap_remove(&(old_ptr.as_ptr() as usize));
        debug_assert!(
            removed.is_some(),
            "reallocated pointer was not allocated by this heap allocator"
        );
        let Some(old_size) = removed else {
            return self.alloc(new_size);
        };
        if new_size == 0 {
            // SAFETY: `old_ptr` is live with this layout.
            unsafe { std::alloc::dealloc(old_ptr.as_ptr(), Self::byte_layout(old_size)) };
            return Ok(NonNull::dangling());
        }
        // SAFETY: `old_ptr` is live with this layout and `new_size` is
        // non-zero.
        let raw = unsafe {
            std::alloc::realloc(old_ptr.as_ptr(), Self::byte_layout(old_size), new_size)
        };
        match NonNull::new(raw) {
            Some(ptr) => {
                self.live.insert(ptr.as_ptr() as usize, new_size);
                Ok(ptr)
            }
            None => {
                // The old block is still valid when realloc fails.
                self.live.insert(old_ptr.as_ptr() as usize, old_size);
                Err(AllocError::SystemExhausted {
                    requested: new_size,
                })
            }
        }
    }
}

impl Drop for HeapAllocator {
    fn drop(&mut self) {
        for (&addr, &size) in &self.live {
            // SAFETY: every table entry is a live allocation made by
            // `std::alloc::alloc`/`realloc` with this layout.
            unsafe { std::alloc::dealloc(addr as *mut u8, Self::byte_layout(size)) };
        }
    }
}
