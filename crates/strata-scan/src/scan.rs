//! The [`Scan`] trait: append elements, extract the running result.

/// An incremental-fold accumulator.
///
/// # Contract
///
/// - `append` folds one element into the running state.
/// - `extract` computes the current accumulated result into the caller's
///   output slot. It may be called repeatedly, including mid-sequence,
///   and never consumes or mutates accumulator state — enforced by its
///   `&self` receiver.
///
/// Input and output types are independent: what a scan accumulates need
/// not be what it produces (the string builder accumulates `&str` pieces
/// but extracts a single `String`).
pub trait Scan {
    /// The element type folded in by `append`.
    type Input;
    /// The result type written by `extract`.
    type Output;

    /// Fold `value` into the running state.
    fn append(&mut self, value: Self::Input);

    /// Write the current accumulated result into `out`.
    fn extract(&self, out: &mut Self::Output);
}
