//! Shared helpers for Strata benchmarks.
//!
//! The interesting code lives in `benches/`; this library only carries
//! the workload constants so both bench files agree on sizes.

/// Number of allocations per measured batch.
pub const ALLOCS_PER_BATCH: usize = 1_000;

/// Allocation size used by the fixed-size benchmarks, in bytes.
pub const ALLOC_SIZE: usize = 64;

/// Bump/arena buffer capacity sized to hold a full batch with headroom.
pub const BUFFER_CAPACITY: usize = ALLOCS_PER_BATCH * ALLOC_SIZE * 2;
