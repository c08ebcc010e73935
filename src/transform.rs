//! Transforming decorators for bidirectional cursors.
//!
//! [`Transform`] applies a pure mapping function lazily to each element in
//! both traversal directions. The transform changes neither cardinality nor
//! order, so index queries forward unchanged. Mapping functions are generally
//! not invertible, so `set` and `insert` are refused; `remove` needs no
//! inverse and delegates. [`TransformBack`] adds caller-supplied inverse
//! logic to support replacement.

use crate::bidi::{BidiCursor, MutateError};
use crate::lazy::Exhausted;

/// Maps each retrieved element through `map` before returning it.
pub struct Transform<C, F> {
    inner: C,
    map: F,
}

impl<C, F> Transform<C, F> {
    pub fn new(inner: C, map: F) -> Self {
        Self { inner, map }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, F, T> BidiCursor for Transform<C, F>
where
    C: BidiCursor,
    F: FnMut(C::Item) -> T,
{
    type Item = T;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Result<T, Exhausted> {
        self.inner.next().map(&mut self.map)
    }

    fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    fn prev(&mut self) -> Result<T, Exhausted> {
        self.inner.prev().map(&mut self.map)
    }

    fn next_index(&self) -> usize {
        self.inner.next_index()
    }

    fn prev_index(&self) -> Option<usize> {
        self.inner.prev_index()
    }

    fn set(&mut self, _value: T) -> Result<(), MutateError> {
        Err(MutateError::Unsupported)
    }

    fn insert(&mut self, _value: T) -> Result<(), MutateError> {
        Err(MutateError::Unsupported)
    }

    fn remove(&mut self) -> Result<T, MutateError> {
        self.inner.remove().map(&mut self.map)
    }
}

/// [`Transform`] with caller-supplied inverse logic: `set` maps the external
/// value back through `back` and replaces in the backing cursor. `insert`
/// stays refused.
pub struct TransformBack<C, F, G> {
    inner: C,
    map: F,
    back: G,
}

impl<C, F, G> TransformBack<C, F, G> {
    pub fn new(inner: C, map: F, back: G) -> Self {
        Self { inner, map, back }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, F, G, T> BidiCursor for TransformBack<C, F, G>
where
    C: BidiCursor,
    F: FnMut(C::Item) -> T,
    G: FnMut(T) -> C::Item,
{
    type Item = T;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Result<T, Exhausted> {
        self.inner.next().map(&mut self.map)
    }

    fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    fn prev(&mut self) -> Result<T, Exhausted> {
        self.inner.prev().map(&mut self.map)
    }

    fn next_index(&self) -> usize {
        self.inner.next_index()
    }

    fn prev_index(&self) -> Option<usize> {
        self.inner.prev_index()
    }

    fn set(&mut self, value: T) -> Result<(), MutateError> {
        self.inner.set((self.back)(value))
    }

    fn insert(&mut self, _value: T) -> Result<(), MutateError> {
        Err(MutateError::Unsupported)
    }

    fn remove(&mut self) -> Result<T, MutateError> {
        self.inner.remove().map(&mut self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::VecCursor;

    /// Invariant: forward traversal yields the mapped sequence, backward
    /// traversal its reverse, and index queries match the backing cursor.
    #[test]
    fn maps_both_directions() {
        let mut v = vec![1, 2, 3];
        let mut c = Transform::new(VecCursor::new(&mut v), |x: i32| x * 10);

        let mut forward = Vec::new();
        while c.has_next() {
            let i = c.next_index();
            forward.push(c.next().unwrap());
            assert_eq!(c.prev_index(), Some(i));
        }
        assert_eq!(forward, vec![10, 20, 30]);

        let mut backward = Vec::new();
        while c.has_prev() {
            backward.push(c.prev().unwrap());
        }
        assert_eq!(backward, vec![30, 20, 10]);
    }

    /// Invariant: `set`/`insert` are refused; `remove` delegates to the
    /// backing cursor and maps the removed element.
    #[test]
    fn mutation_policy() {
        let mut v = vec![1, 2, 3];
        {
            let mut c = Transform::new(VecCursor::new(&mut v), |x: i32| x * 10);
            c.next().unwrap();
            assert_eq!(c.set(99), Err(MutateError::Unsupported));
            assert_eq!(c.insert(99), Err(MutateError::Unsupported));
            assert_eq!(c.remove(), Ok(10));
        }
        assert_eq!(v, vec![2, 3]);
    }

    /// Invariant: with inverse logic, `set` stores the mapped-back value.
    #[test]
    fn transform_back_supports_set() {
        let mut v = vec![1, 2, 3];
        {
            let mut c = TransformBack::new(VecCursor::new(&mut v), |x: i32| x * 10, |y: i32| y / 10);
            c.next().unwrap();
            c.set(70).unwrap();
            assert_eq!(c.insert(80), Err(MutateError::Unsupported));
        }
        assert_eq!(v, vec![7, 2, 3]);
    }
}
