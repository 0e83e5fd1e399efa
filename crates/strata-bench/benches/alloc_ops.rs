//! Criterion micro-benchmarks for the allocator family.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};

use strata_alloc::{Allocator, ArenaAllocator, BumpAllocator, HeapAllocator};
use strata_bench::{ALLOCS_PER_BATCH, ALLOC_SIZE, BUFFER_CAPACITY};

fn bench_bump_alloc(c: &mut Criterion) {
    let mut bump = BumpAllocator::new(BUFFER_CAPACITY);
    c.bench_function("bump_alloc_64b_x1000", |b| {
        b.iter(|| {
            bump.free_all();
            for _ in 0..ALLOCS_PER_BATCH {
                let _ = black_box(bump.alloc(black_box(ALLOC_SIZE)));
            }
        })
    });
}

fn bench_heap_alloc_release(c: &mut Criterion) {
    let mut heap = HeapAllocator::new();
    c.bench_function("heap_alloc_release_64b_x1000", |b| {
        b.iter(|| {
            for _ in 0..ALLOCS_PER_BATCH {
                if let Ok(ptr) = heap.alloc(black_box(ALLOC_SIZE)) {
                    heap.release(ptr);
                }
            }
        })
    });
}

fn bench_arena_over_heap(c: &mut Criterion) {
    c.bench_function("arena_over_heap_64b_x1000", |b| {
        b.iter(|| {
            let mut heap = HeapAllocator::new();
            let mut arena = ArenaAllocator::new(&mut heap);
            for _ in 0..ALLOCS_PER_BATCH {
                let _ = black_box(arena.alloc(black_box(ALLOC_SIZE)));
            }
        })
    });
}

fn bench_arena_random_sizes(c: &mut Criterion) {
    // Fixed seed so every run measures the same allocation trace.
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5742);
    let sizes: Vec<usize> = (0..ALLOCS_PER_BATCH)
        .map(|_| rng.random_range(1..=256))
        .collect();
    c.bench_function("arena_over_heap_random_sizes_x1000", |b| {
        b.iter(|| {
            let mut heap = HeapAllocator::new();
            let mut arena = ArenaAllocator::new(&mut heap);
            for &size in &sizes {
                let _ = black_box(arena.alloc(size));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_bump_alloc,
    bench_heap_alloc_release,
    bench_arena_over_heap,
    bench_arena_random_sizes,
);
criterion_main!(benches);
