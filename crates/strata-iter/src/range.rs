//! Ascending integer range cursor.

use crate::advance::Advance;

/// An [`Advance`] cursor producing the ascending sequence
/// `start, start + 1, …, end` (both bounds inclusive).
///
/// The cursor only moves forward; once past `end` it is exhausted for
/// good.
#[derive(Clone, Debug)]
pub struct Range {
    current: u32,
    end: u32,
}

impl Range {
    /// Create a cursor over `[start, end]`.
    ///
    /// A `start` greater than `end` yields an already-exhausted cursor.
    ///
    /// # Panics
    ///
    /// `end == u32::MAX` is a precondition violation (stepping past the
    /// final value would wrap the cursor) and trips a `debug_assert`.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(end != u32::MAX, "range end must be below u32::MAX");
        Self {
            current: start,
            end,
        }
    }
}

impl Advance for Range {
    type Item = u32;

    fn advance(&mut self, slot: &mut u32) -> bool {
        if self.current > self.end {
            return false;
        }
        *slot = self.current;
        self.current += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_inclusive_ascending_sequence() {
        let mut range = Range::new(0, 10);
        let mut slot = 0u32;
        let mut produced = Vec::new();
        while range.advance(&mut slot) {
            produced.push(slot);
        }
        assert_eq!(produced, (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn exhaustion_is_idempotent_and_leaves_slot() {
        let mut range = Range::new(0, 2);
        let mut slot = 0u32;
        while range.advance(&mut slot) {}
        slot = 999;
        assert!(!range.advance(&mut slot));
        assert!(!range.advance(&mut slot));
        assert_eq!(slot, 999);
    }

    #[test]
    fn empty_when_start_exceeds_end() {
        let mut range = Range::new(5, 4);
        let mut slot = 0u32;
        assert!(!range.advance(&mut slot));
    }

    #[test]
    fn single_element_range() {
        let mut range = Range::new(7, 7);
        let mut slot = 0u32;
        assert!(range.advance(&mut slot));
        assert_eq!(slot, 7);
        assert!(!range.advance(&mut slot));
    }

    #[test]
    #[should_panic(expected = "range end must be below u32::MAX")]
    fn end_at_max_bound_is_rejected() {
        let _ = Range::new(0, u32::MAX);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn produces_exactly_start_to_end(
                start in 0u32..1000,
                len in 0u32..1000,
            ) {
                let end = start + len;
                let mut range = Range::new(start, end);
                let mut slot = 0u32;
                let mut produced = Vec::new();
                while range.advance(&mut slot) {
                    produced.push(slot);
                }
                prop_assert_eq!(produced, (start..=end).collect::<Vec<_>>());
            }
        }
    }
}
