//! Read-only decorator for bidirectional cursors.

use crate::bidi::{BidiCursor, MutateError};
use crate::lazy::Exhausted;

/// Wraps a bidirectional cursor and refuses every mutation. Traversal and
/// index queries forward unchanged; a refused mutation never reaches the
/// inner cursor, so the sequence and position stay unmodified.
pub struct ReadOnly<C> {
    inner: C,
}

impl<C> ReadOnly<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: BidiCursor> BidiCursor for ReadOnly<C> {
    type Item = C::Item;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Result<C::Item, Exhausted> {
        self.inner.next()
    }

    fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    fn prev(&mut self) -> Result<C::Item, Exhausted> {
        self.inner.prev()
    }

    fn next_index(&self) -> usize {
        self.inner.next_index()
    }

    fn prev_index(&self) -> Option<usize> {
        self.inner.prev_index()
    }

    fn set(&mut self, _value: C::Item) -> Result<(), MutateError> {
        Err(MutateError::Unsupported)
    }

    fn insert(&mut self, _value: C::Item) -> Result<(), MutateError> {
        Err(MutateError::Unsupported)
    }

    fn remove(&mut self) -> Result<C::Item, MutateError> {
        Err(MutateError::Unsupported)
    }
}
