//! Singly-linked list nodes and their traversal cursor.

use crate::advance::Advance;

/// A node in a singly-linked, externally-owned list.
///
/// The chain is built by the caller (each node owning its successor) and
/// merely borrowed by [`ListIter`]; the cursor never mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    /// Payload carried by this node.
    pub data: T,
    /// The next node in the chain, if any.
    pub next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a node holding `data`, followed by `next`.
    pub fn new(data: T, next: Option<Box<Node<T>>>) -> Self {
        Self { data, next }
    }
}

/// An [`Advance`] cursor walking a borrowed [`Node`] chain front to back.
///
/// Each `advance` writes the current node reference into the slot — which
/// is `None` exactly once, on the first past-the-end call — and reports
/// whether a node was present *before* stepping to its successor. A
/// three-node list therefore produces three `true` calls followed by one
/// trailing `false`.
///
/// Consumers receive references into the original chain, never copies.
/// The traversal is lazy, finite, forward-only, and restartable only by
/// constructing a new cursor.
#[derive(Clone, Debug)]
pub struct ListIter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> ListIter<'a, T> {
    /// Create a cursor positioned at the head of the chain.
    pub fn new(root: &'a Node<T>) -> Self {
        Self {
            current: Some(root),
        }
    }
}

impl<'a, T> Advance for ListIter<'a, T> {
    type Item = Option<&'a Node<T>>;

    fn advance(&mut self, slot: &mut Self::Item) -> bool {
        *slot = self.current;
        let more = self.current.is_some();
        if let Some(node) = self.current {
            self.current = node.next.as_deref();
        }
        more
    }
}
