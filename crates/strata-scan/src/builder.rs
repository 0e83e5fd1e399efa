//! Lazy string concatenation scan.

use crate::scan::Scan;

/// A [`Scan`] that accumulates borrowed string pieces and concatenates
/// them only on extraction.
///
/// Appending stores a reference, not a copy — callers must keep the piece
/// contents alive until the final extract. Extraction writes the pieces
/// into the caller's `String` in exact append order (clearing it first);
/// nothing is ever truncated or reordered.
///
/// The piece table starts at the capacity given to
/// [`StringBuilder::with_capacity`] and doubles when full, the same growth
/// strategy the arena allocator uses.
#[derive(Clone, Debug, Default)]
pub struct StringBuilder<'a> {
    pieces: Vec<&'a str>,
}

impl<'a> StringBuilder<'a> {
    /// Create a builder with room for `capacity` pieces before the first
    /// growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pieces: Vec::with_capacity(capacity),
        }
    }

    /// Number of pieces appended so far.
    pub fn count(&self) -> usize {
        self.pieces.len()
    }

    /// Current piece-table capacity.
    pub fn capacity(&self) -> usize {
        self.pieces.capacity()
    }

    /// Total length in bytes of the concatenated result.
    pub fn result_len(&self) -> usize {
        self.pieces.iter().map(|piece| piece.len()).sum()
    }
}

impl<'a> Scan for StringBuilder<'a> {
    type Input = &'a str;
    type Output = String;

    fn append(&mut self, value: &'a str) {
        if self.pieces.len() == self.pieces.capacity() {
            // Double rather than deferring to Vec's growth policy, to keep
            // the table's trajectory predictable from the initial capacity.
            let doubled = self.pieces.capacity().max(1) * 2;
            self.pieces.reserve_exact(doubled - self.pieces.len());
        }
        self.pieces.push(value);
    }

    fn extract(&self, out: &mut String) {
        out.clear();
        out.reserve(self.result_len());
        for piece in &self.pieces {
            out.push_str(piece);
        }
    }
}
