//! Allocator composition: arenas stacked over other allocator variants.

use strata_alloc::{AllocError, Allocator, ArenaAllocator, BumpAllocator, HeapAllocator};

#[test]
fn arena_over_bump_allocates_from_the_bump_buffer() {
    let mut bump = BumpAllocator::new(4096);
    let bump_base = bump.base_addr().expect("owned buffer");
    let mut arena = ArenaAllocator::new(&mut bump);

    let ptr = arena.alloc(100).expect("allocation");
    let addr = ptr.as_ptr() as usize;
    assert!(addr >= bump_base && addr < bump_base + 4096);
}

#[test]
fn arena_over_bump_growth_consumes_bump_capacity() {
    let mut bump = BumpAllocator::new(4096);
    let mut arena = ArenaAllocator::new(&mut bump);

    arena.alloc(100).expect("allocation");
    arena.alloc(200).expect("growing allocation");
    arena.destroy();
    drop(arena);

    // Bump release is a no-op, so both the original buffer and the grown
    // one stay accounted for in the bump cursor: 100 + max(200, 300).
    assert_eq!(bump.used(), 400);
}

#[test]
fn arena_over_bump_surfaces_exhaustion_as_backing_failure() {
    let mut bump = BumpAllocator::new(256);
    let mut arena = ArenaAllocator::new(&mut bump);

    arena.alloc(100).expect("fits in the bump buffer");
    let err = arena.alloc(10_000).expect_err("bump cannot grow the arena");
    assert!(matches!(err, AllocError::BackingFailed { .. }));
    // The failed growth left the arena on its original buffer.
    assert_eq!(arena.used(), 100);
    assert_eq!(arena.capacity(), 100);
}

#[test]
fn arena_over_arena_over_heap() {
    let mut heap = HeapAllocator::new();
    let mut inner = ArenaAllocator::new(&mut heap);
    let mut outer = ArenaAllocator::new(&mut inner);

    outer.alloc(64).expect("allocation");
    outer.alloc(64).expect("allocation");
    assert_eq!(outer.used(), 128);

    outer.destroy();
    assert!(!outer.is_allocated());
    drop(outer);
    assert!(inner.is_allocated());
}

#[test]
fn clear_lets_an_arena_be_reused_without_backing_traffic() {
    let mut heap = HeapAllocator::new();
    let mut arena = ArenaAllocator::new(&mut heap);

    arena.alloc(500).expect("allocation");
    let base = arena.base_addr();
    let capacity = arena.capacity();

    arena.clear();
    arena.alloc(400).expect("reuses the existing buffer");
    assert_eq!(arena.base_addr(), base);
    assert_eq!(arena.capacity(), capacity);
}

#[test]
fn heap_backed_arena_releases_through_the_heap() {
    let mut heap = HeapAllocator::new();
    {
        let mut arena = ArenaAllocator::new(&mut heap);
        arena.alloc(100).expect("allocation");
        arena.alloc(5_000).expect("growing allocation");
        // Growth released the first heap buffer; one remains live.
    }
    // Arena drop released the remaining buffer.
    assert_eq!(heap.live_allocations(), 0);
}
