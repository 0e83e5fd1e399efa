//! Running-total scan over unsigned integers.

use crate::scan::Scan;

/// A [`Scan`] that keeps a running total of appended `u32` values.
///
/// Addition wraps on overflow, matching unsigned machine arithmetic.
/// Summation is associative and commutative, so append order does not
/// affect the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum {
    total: u32,
}

impl Sum {
    /// Create a sum with a zero total.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current running total.
    pub fn total(&self) -> u32 {
        self.total
    }
}

impl Scan for Sum {
    type Input = u32;
    type Output = u32;

    fn append(&mut self, value: u32) {
        self.total = self.total.wrapping_add(value);
    }

    fn extract(&self, out: &mut u32) {
        *out = self.total;
    }
}
