//! Bidirectional cursor contract and the concrete vector cursor.
//!
//! A bidirectional cursor sits between two elements of a sequence:
//! `next_index` names the element a `next` call would return, `prev_index`
//! the element a `prev` call would return. Mutations return explicit failure
//! values instead of panicking, and a failed mutation is guaranteed to leave
//! the sequence and the cursor position unmodified.

use crate::lazy::Exhausted;
use core::fmt;

/// Failure value for cursor mutations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MutateError {
    /// The cursor (or a decorator around it) does not support this mutation.
    Unsupported,
    /// `set`/`remove` called before any element was returned, or after the
    /// previous current element was invalidated.
    NoCursorElement,
}

impl fmt::Display for MutateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutateError::Unsupported => f.write_str("mutation not supported by this cursor"),
            MutateError::NoCursorElement => f.write_str("no current element to mutate"),
        }
    }
}

impl std::error::Error for MutateError {}

/// Stateful traversal over a sequence in both directions, with optional
/// in-place mutation.
pub trait BidiCursor {
    type Item;

    fn has_next(&self) -> bool;
    fn next(&mut self) -> Result<Self::Item, Exhausted>;
    fn has_prev(&self) -> bool;
    fn prev(&mut self) -> Result<Self::Item, Exhausted>;

    /// Index of the element a `next` call would return; equals the sequence
    /// length when the cursor is at the end.
    fn next_index(&self) -> usize;
    /// Index of the element a `prev` call would return; `None` at the front.
    fn prev_index(&self) -> Option<usize>;

    /// Replace the last element returned by `next`/`prev`.
    fn set(&mut self, value: Self::Item) -> Result<(), MutateError>;
    /// Insert before the element `next` would return, leaving the cursor
    /// after the new element.
    fn insert(&mut self, value: Self::Item) -> Result<(), MutateError>;
    /// Remove and return the last element returned by `next`/`prev`.
    fn remove(&mut self) -> Result<Self::Item, MutateError>;
}

/// Bidirectional cursor over a borrowed vector, with list-iterator
/// semantics: `set`/`remove` act on the last element returned, `insert`
/// lands at the cursor position and clears the current element.
pub struct VecCursor<'a, T> {
    vec: &'a mut Vec<T>,
    pos: usize,
    last: Option<usize>,
}

impl<'a, T> VecCursor<'a, T> {
    /// Cursor positioned before the first element.
    pub fn new(vec: &'a mut Vec<T>) -> Self {
        Self {
            vec,
            pos: 0,
            last: None,
        }
    }

    /// Cursor positioned after the last element, for backward traversal.
    pub fn at_end(vec: &'a mut Vec<T>) -> Self {
        let pos = vec.len();
        Self {
            vec,
            pos,
            last: None,
        }
    }
}

impl<'a, T: Clone> BidiCursor for VecCursor<'a, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.pos < self.vec.len()
    }

    fn next(&mut self) -> Result<T, Exhausted> {
        if self.pos >= self.vec.len() {
            return Err(Exhausted);
        }
        let value = self.vec[self.pos].clone();
        self.last = Some(self.pos);
        self.pos += 1;
        Ok(value)
    }

    fn has_prev(&self) -> bool {
        self.pos > 0
    }

    fn prev(&mut self) -> Result<T, Exhausted> {
        if self.pos == 0 {
            return Err(Exhausted);
        }
        self.pos -= 1;
        self.last = Some(self.pos);
        Ok(self.vec[self.pos].clone())
    }

    fn next_index(&self) -> usize {
        self.pos
    }

    fn prev_index(&self) -> Option<usize> {
        self.pos.checked_sub(1)
    }

    fn set(&mut self, value: T) -> Result<(), MutateError> {
        match self.last {
            Some(i) => {
                self.vec[i] = value;
                Ok(())
            }
            None => Err(MutateError::NoCursorElement),
        }
    }

    fn insert(&mut self, value: T) -> Result<(), MutateError> {
        self.vec.insert(self.pos, value);
        self.pos += 1;
        self.last = None;
        Ok(())
    }

    fn remove(&mut self) -> Result<T, MutateError> {
        let i = self.last.take().ok_or(MutateError::NoCursorElement)?;
        let value = self.vec.remove(i);
        if i < self.pos {
            self.pos -= 1;
        }
        Ok(value)
    }
}
