//! Queue-draining producer: consumes a backing queue front-first.

use crate::lazy::Produce;
use core::borrow::BorrowMut;
use core::marker::PhantomData;
use std::collections::VecDeque;

/// A [`Produce`] implementation that removes and returns the front of a
/// backing queue until it is empty. Iteration consumes the queue; a caller
/// supplying its own queue must not assume it is unmodified once iteration
/// starts.
pub struct QueueDrain<T, Q = VecDeque<T>> {
    queue: Q,
    _marker: PhantomData<fn() -> T>,
}

impl<T> QueueDrain<T, VecDeque<T>> {
    /// Build from a fixed list of elements, placed into a freshly allocated
    /// queue owned by the cursor.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            queue: elements.into_iter().collect(),
            _marker: PhantomData,
        }
    }
}

impl<'q, T> QueueDrain<T, &'q mut VecDeque<T>> {
    /// Drain a caller-owned queue in place.
    pub fn over(queue: &'q mut VecDeque<T>) -> Self {
        Self {
            queue,
            _marker: PhantomData,
        }
    }
}

impl<T, Q> QueueDrain<T, Q>
where
    Q: BorrowMut<VecDeque<T>>,
{
    /// Elements not yet drained.
    pub fn remaining(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl<T, Q> Produce for QueueDrain<T, Q>
where
    Q: BorrowMut<VecDeque<T>>,
{
    type Item = T;

    fn produce(&mut self) -> Option<T> {
        self.queue.borrow_mut().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::LazyCursor;

    /// Invariant: the drain yields exactly the input elements, in order,
    /// exactly once each.
    #[test]
    fn yields_input_in_order() {
        let drain = QueueDrain::from_elements(vec![1, 2, 3]);
        assert_eq!(drain.remaining(), 3);
        let c = LazyCursor::new(drain);
        assert_eq!(c.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    /// Invariant: draining a caller-supplied queue shrinks it; the queue is
    /// empty once the cursor is exhausted.
    #[test]
    fn borrowed_queue_is_consumed() {
        let mut q: VecDeque<i32> = (0..4).collect();
        {
            let mut c = LazyCursor::new(QueueDrain::over(&mut q));
            assert_eq!(c.next(), Some(0));
            assert_eq!(c.next(), Some(1));
        }
        assert_eq!(q.len(), 2, "partial drain leaves the tail");

        let mut c = LazyCursor::new(QueueDrain::over(&mut q));
        assert_eq!(c.by_ref().count(), 2);
        assert!(!c.has_next());
        drop(c);
        assert!(q.is_empty());
    }
}
