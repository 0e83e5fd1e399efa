//! The [`Advance`] trait: a slot-writing pull cursor.

/// A pull-based cursor producing values into a caller-supplied slot.
///
/// # Contract
///
/// - `advance` writes the next value into `slot` and returns `true`, or
///   returns `false` without writing once the cursor is exhausted.
/// - Exhaustion is terminal and idempotent: after the first `false`,
///   every further call returns `false` and leaves the slot untouched.
/// - Cursors are forward-only; restarting means constructing a new cursor.
///
/// The slot-passing shape (rather than an `Option`-returning `next`) lets
/// one slot be reused across a whole traversal and keeps the produced
/// value's storage under caller control.
pub trait Advance {
    /// The value type written into the slot.
    type Item;

    /// Write the next value into `slot`; report whether one was produced.
    fn advance(&mut self, slot: &mut Self::Item) -> bool;
}
