//! Allocator error types.

use std::error::Error;
use std::fmt;

/// Errors returned by [`Allocator`](crate::Allocator) operations.
///
/// Failure is always a value on the error channel — no allocator in this
/// crate panics on exhaustion, and none retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// A fixed-capacity allocator cannot satisfy the request.
    ///
    /// Also reported when the requested size would overflow the
    /// allocator's cursor arithmetic.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still unused in the allocator's buffer.
        remaining: usize,
    },
    /// The process-wide allocator returned null.
    SystemExhausted {
        /// Number of bytes requested.
        requested: usize,
    },
    /// An arena's backing allocator failed while the arena was growing.
    ///
    /// The arena's bookkeeping is left untouched when this is returned:
    /// growth is checked before any state is mutated. (The C lineage of
    /// this design ignored a null backing result and corrupted its
    /// cursor; surfacing the failure here is a documented deviation.)
    BackingFailed {
        /// Number of bytes the arena requested from its backing allocator.
        requested: usize,
        /// The backing allocator's own error.
        reason: Box<AllocError>,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::SystemExhausted { requested } => {
                write!(f, "system allocator exhausted: requested {requested} bytes")
            }
            Self::BackingFailed { requested, reason } => {
                write!(
                    f,
                    "backing allocator failed growing to {requested} bytes: {reason}"
                )
            }
        }
    }
}

impl Error for AllocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BackingFailed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
