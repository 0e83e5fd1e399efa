//! Arena allocator: a growable cursor over a backing-allocated buffer.

use std::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::Allocator;

/// An [`Allocator`] that bump-allocates from a buffer acquired through a
/// backing allocator.
///
/// The backing allocator is borrowed as `&mut dyn Allocator` for the
/// arena's lifetime, so an arena can compose over a heap allocator, a bump
/// allocator, or another arena. The borrow also makes the teardown-order
/// rule a compile-time guarantee: the arena cannot outlive the allocator
/// it grew from.
///
/// The arena starts empty (`memory` absent, `capacity() == 0`) so creation
/// is free; the first allocation acquires a buffer. When an allocation
/// does not fit, capacity doubles (or jumps straight to the required size
/// if doubling is not enough).
///
/// # Pointer validity window
///
/// Growth acquires a **fresh** buffer and returns the old one to the
/// backing allocator, so every pointer previously handed out dangles after
/// a growing `alloc`. Pointers into an arena are valid only until the next
/// allocation that grows it — do not retain them across allocations of
/// unknown size.
///
/// Individual allocations cannot be returned; reclaim in bulk with
/// [`ArenaAllocator::clear`] or [`ArenaAllocator::destroy`].
pub struct ArenaAllocator<'a> {
    backing: &'a mut dyn Allocator,
    /// Current buffer; absent until the first allocation and after
    /// `destroy`.
    memory: Option<NonNull<u8>>,
    /// Bytes handed out so far.
    count: usize,
    /// Capacity of the current buffer in bytes.
    length: usize,
}

impl<'a> ArenaAllocator<'a> {
    /// Create an empty arena over the given backing allocator.
    ///
    /// No memory is acquired until the first allocation.
    pub fn new(backing: &'a mut dyn Allocator) -> Self {
        Self {
            backing,
            memory: None,
            count: 0,
            length: 0,
        }
    }

    /// Bytes handed out since creation or the last
    /// [`ArenaAllocator::clear`].
    pub fn used(&self) -> usize {
        self.count
    }

    /// Capacity of the current buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.length
    }

    /// Whether the arena currently holds a buffer.
    pub fn is_allocated(&self) -> bool {
        self.memory.is_some()
    }

    /// Address of the buffer's first byte, for diagnostics.
    pub fn base_addr(&self) -> Option<usize> {
        self.memory.map(|ptr| ptr.as_ptr() as usize)
    }

    /// Invalidate every allocation at once and reset the cursor, in O(1).
    ///
    /// The buffer is kept for fast reuse.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Return the buffer to the backing allocator.
    ///
    /// The arena reverts to its empty state (`capacity() == 0`, buffer
    /// absent), so misuse after destruction is detectable. Calling
    /// `destroy` again is a no-op. Also runs on drop.
    pub fn destroy(&mut self) {
        if let Some(ptr) = self.memory.take() {
            self.backing.release(ptr);
            self.count = 0;
            self.length = 0;
        }
    }

    /// Capacity to grow to for a cursor target of `new_count`.
    fn grown_length(&self, new_count: usize) -> usize {
        self.length
            .checked_mul(2)
            .map_or(new_count, |doubled| doubled.max(new_count))
    }
}

impl Allocator for ArenaAllocator<'_> {
    /// Allocate `size` bytes, growing through the backing allocator when
    /// the current buffer is too small.
    ///
    /// The growth path requests a *fresh* backing buffer (it does not
    /// copy), so bytes already in the arena are lost on growth and
    /// outstanding pointers dangle — see the type-level docs. If the
    /// backing allocator fails, [`AllocError::BackingFailed`] is returned
    /// and the arena's state is untouched.
    fn alloc(&mut self, size: usize) -> Result<NonNull<u8>, AllocError> {
        let Some(new_count) = self.count.checked_add(size) else {
            return Err(AllocError::CapacityExceeded {
                requested: size,
                remaining: self.length - self.count,
            });
        };
        if new_count > self.length {
            let new_length = self.grown_length(new_count);
            let new_ptr =
                self.backing
                    .alloc(new_length)
                    .map_err(|reason| AllocError::BackingFailed {
                        requested: new_length,
                        reason: Box::new(reason),
                    })?;
            if let Some(old) = self.memory.take() {
                self.backing.release(old);
            }
            self.memory = Some(new_ptr);
            self.length = new_length;
        }
        let Some(base) = self.memory else {
            // Zero-size request on a never-allocated arena.
            return Ok(NonNull::dangling());
        };
        // SAFETY: count + size <= length, the capacity of the live buffer
        // at `base`.
        let ptr = unsafe { NonNull::new_unchecked(base.as_ptr().add(self.count)) };
        self.count = new_count;
        Ok(ptr)
    }

    /// No-op: arenas free only in bulk.
    fn release(&mut self, _ptr: NonNull<u8>) {}

    /// Allocate `new_size` bytes at the end of the arena.
    ///
    /// As with the bump allocator, the old pointer is ignored and its
    /// contents are not copied into the returned block. Unlike
    /// [`ArenaAllocator::alloc`], the growth path goes through the backing
    /// allocator's `realloc`, so bytes already in the arena survive growth
    /// when the backing allocator preserves contents (the heap variant
    /// does; bump and arena backings do not).
    fn realloc(
        &mut self,
        _old: Option<NonNull<u8>>,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        let Some(new_count) = self.count.checked_add(new_size) else {
            return Err(AllocError::CapacityExceeded {
                requested: new_size,
                remaining: self.length - self.count,
            });
        };
        if new_count > self.length {
            let new_length = self.grown_length(new_count);
            let new_ptr = self
                .backing
                .realloc(self.memory, new_length)
                .map_err(|reason| AllocError::BackingFailed {
                    requested: new_length,
                    reason: Box::new(reason),
                })?;
            self.memory = Some(new_ptr);
            self.length = new_length;
        }
        let Some(base) = self.memory else {
            return Ok(NonNull::dangling());
        };
        // SAFETY: count + new_size <= length, the capacity of the live
        // buffer at `base`.
        let ptr = unsafe { NonNull::new_unchecked(base.as_ptr().add(self.count)) };
        self.count = new_count;
        Ok(ptr)
    }
}

impl Drop for ArenaAllocator<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}
