//! Bump allocator: a cursor over a fixed-capacity buffer.

use std::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::Allocator;

/// Where a [`BumpAllocator`]'s buffer comes from.
///
/// The original design let one struct silently own or borrow its memory;
/// here the distinction is explicit. `Released` is the post-`destroy`
/// sentinel that makes reuse detectable.
enum BumpStorage<'buf> {
    /// Buffer allocated and owned by the bump allocator itself.
    Owned(Box<[u8]>),
    /// Caller-owned buffer borrowed for the allocator's lifetime.
    Borrowed(&'buf mut [u8]),
    /// The allocator has been destroyed.
    Released,
}

/// An [`Allocator`] that linearly allocates from a fixed-capacity buffer.
///
/// The buffer is never reallocated — only the cursor moves. Individual
/// allocations cannot be returned ([`Allocator::release`] is a no-op);
/// reclaiming memory is all-or-nothing via [`BumpAllocator::free_all`].
///
/// Invariant: `0 <= used() <= capacity()`.
///
/// # Boundary behavior
///
/// An allocation succeeds only while `used() + size < capacity()` —
/// strictly less, so a request that would exactly fill the buffer fails.
/// This boundary is inherited from the design this crate models and is
/// pinned by tests; callers wanting the full buffer must over-provision
/// by one byte.
pub struct BumpAllocator<'buf> {
    storage: BumpStorage<'buf>,
    /// Bytes handed out so far.
    count: usize,
}

impl BumpAllocator<'static> {
    /// Create a bump allocator that owns a fresh buffer of `capacity`
    /// bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: BumpStorage::Owned(vec![0u8; capacity].into_boxed_slice()),
            count: 0,
        }
    }
}

impl<'buf> BumpAllocator<'buf> {
    /// Create a bump allocator over a caller-owned buffer.
    ///
    /// The caller's buffer is borrowed for the allocator's lifetime and is
    /// not freed by [`BumpAllocator::destroy`].
    pub fn with_buffer(buffer: &'buf mut [u8]) -> Self {
        Self {
            storage: BumpStorage::Borrowed(buffer),
            count: 0,
        }
    }

    /// Bytes handed out so far.
    pub fn used(&self) -> usize {
        self.count
    }

    /// Total buffer capacity in bytes. Zero after [`BumpAllocator::destroy`].
    pub fn capacity(&self) -> usize {
        match &self.storage {
            BumpStorage::Owned(buf) => buf.len(),
            BumpStorage::Borrowed(buf) => buf.len(),
            BumpStorage::Released => 0,
        }
    }

    /// Unused bytes remaining in the buffer.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.count
    }

    /// Address of the buffer's first byte, for diagnostics.
    ///
    /// `None` after [`BumpAllocator::destroy`].
    pub fn base_addr(&self) -> Option<usize> {
        match &self.storage {
            BumpStorage::Owned(buf) => Some(buf.as_ptr() as usize),
            BumpStorage::Borrowed(buf) => Some(buf.as_ptr() as usize),
            BumpStorage::Released => None,
        }
    }

    /// Whether [`BumpAllocator::destroy`] has been called.
    pub fn is_destroyed(&self) -> bool {
        matches!(self.storage, BumpStorage::Released)
    }

    /// Invalidate every prior allocation and reset the cursor to the start
    /// of the buffer, in O(1).
    ///
    /// The buffer is kept. There is no use-after-free detection: pointers
    /// handed out before the reset still point into the buffer and will
    /// alias future allocations.
    pub fn free_all(&mut self) {
        self.count = 0;
    }

    /// Release the owned buffer (or detach the borrowed one).
    ///
    /// After this the allocator is inert: `capacity()` is 0 and every
    /// `alloc` fails. Calling `destroy` again is a no-op. Continuing to
    /// allocate afterwards is a programmer error and trips a
    /// `debug_assert`.
    pub fn destroy(&mut self) {
        self.storage = BumpStorage::Released;
        self.count = 0;
    }
}

impl Allocator for BumpAllocator<'_> {
    fn alloc(&mut self, size: usize) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(
            !self.is_destroyed(),
            "bump allocator used after destroy"
        );
        let count = self.count;
        let buf = match &mut self.storage {
            BumpStorage::Owned(buf) => &mut buf[..],
            BumpStorage::Borrowed(buf) => &mut **buf,
            BumpStorage::Released => {
                return Err(AllocError::CapacityExceeded {
                    requested: size,
                    remaining: 0,
                })
            }
        };
        let exceeded = AllocError::CapacityExceeded {
            requested: size,
            remaining: buf.len() - count,
        };
        let Some(new_count) = count.checked_add(size) else {
            return Err(exceeded);
        };
        // Strictly less-than: exactly filling the buffer fails (see the
        // type-level docs).
        if new_count >= buf.len() {
            return Err(exceeded);
        }
        // SAFETY: count + size < buf.len(), so the offset is in bounds of
        // a live buffer and the pointer is non-null.
        let ptr = unsafe { NonNull::new_unchecked(buf.as_mut_ptr().add(count)) };
        self.count = new_count;
        Ok(ptr)
    }

    /// No-op: bump allocators never free individual allocations.
    fn release(&mut self, _ptr: NonNull<u8>) {}

    /// Equivalent to a fresh [`Allocator::alloc`].
    ///
    /// The old pointer and its contents are ignored entirely — nothing is
    /// copied. Callers expecting conventional realloc semantics must copy
    /// themselves.
    fn realloc(
        &mut self,
        _old: Option<NonNull<u8>>,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        self.alloc(new_size)
    }
}
