//! Cross-family scenarios: cursors feeding scans, allocators composing.

use strata::prelude::*;

#[test]
fn range_cursor_feeds_sum_scan() {
    let mut range = Range::new(0, 10);
    let mut sum = Sum::new();
    let mut slot = 0u32;
    while range.advance(&mut slot) {
        sum.append(slot);
    }
    let mut result = 0;
    sum.extract(&mut result);
    assert_eq!(result, 55);
}

#[test]
fn mid_traversal_extracts_observe_partial_sums() {
    let mut range = Range::new(1, 4);
    let mut sum = Sum::new();
    let mut slot = 0u32;
    let mut partials = Vec::new();
    while range.advance(&mut slot) {
        sum.append(slot);
        let mut partial = 0;
        sum.extract(&mut partial);
        partials.push(partial);
    }
    assert_eq!(partials, vec![1, 3, 6, 10]);
}

#[test]
fn list_cursor_feeds_string_builder() {
    let chain = Node::new(
        "building ",
        Some(Box::new(Node::new(
            "a ",
            Some(Box::new(Node::new(
                "string ",
                Some(Box::new(Node::new("incrementally.", None))),
            ))),
        ))),
    );

    let mut iter = ListIter::new(&chain);
    let mut builder = StringBuilder::with_capacity(2);
    let mut slot = None;
    while iter.advance(&mut slot) {
        builder.append(slot.expect("node").data);
    }

    let mut result = String::new();
    builder.extract(&mut result);
    assert_eq!(result, "building a string incrementally.");
}

#[test]
fn arena_stacks_over_every_allocator_variant() {
    let mut heap = HeapAllocator::new();
    {
        let mut over_heap = ArenaAllocator::new(&mut heap);
        assert!(over_heap.alloc(64).is_ok());
    }

    let mut bump = BumpAllocator::new(1024);
    {
        let mut over_bump = ArenaAllocator::new(&mut bump);
        assert!(over_bump.alloc(64).is_ok());
    }

    let mut backing = HeapAllocator::new();
    let mut inner = ArenaAllocator::new(&mut backing);
    let mut over_arena = ArenaAllocator::new(&mut inner);
    assert!(over_arena.alloc(64).is_ok());
}
