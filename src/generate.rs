//! Generator-driven producer: a cooperative push/pull bridge.
//!
//! A *generator* is code that yields zero or more values per activation by
//! calling into a [`Sink`], then returns control. [`Generate`] bridges that
//! push style into the pull-based [`Produce`] contract:
//!
//! 1. values already in the buffer are served first, oldest first;
//! 2. on an empty buffer the generator is invoked exactly once with a sink
//!    bound to the buffer;
//! 3. if the buffer is still empty after the invocation, the generator is
//!    finished: exhaustion is permanent and the generator is never invoked
//!    again.
//!
//! Generator and cursor run on one logical thread of control, strictly
//! alternating. An infinite generator must yield a finite batch and return;
//! that promptness is a contract with the caller, not something this module
//! enforces with a step cap.

use crate::lazy::Produce;
use std::collections::VecDeque;

/// The yield target handed to a generator. Values emitted here are buffered
/// by the owning [`Generate`] cursor and served in emission order.
pub struct Sink<T> {
    buf: VecDeque<T>,
}

impl<T> Sink<T> {
    pub fn emit(&mut self, value: T) {
        self.buf.push_back(value);
    }
}

/// A [`Produce`] implementation driven by a generator callback.
pub struct Generate<T, G> {
    // `None` once the generator has signaled completion; dropping it also
    // releases whatever the closure captured.
    generator: Option<G>,
    sink: Sink<T>,
}

impl<T, G> Generate<T, G>
where
    G: FnMut(&mut Sink<T>),
{
    pub fn new(generator: G) -> Self {
        Self {
            generator: Some(generator),
            sink: Sink {
                buf: VecDeque::new(),
            },
        }
    }

    /// Produced-but-unconsumed values currently buffered.
    pub fn buffered(&self) -> usize {
        self.sink.buf.len()
    }
}

impl<T, G> Produce for Generate<T, G>
where
    G: FnMut(&mut Sink<T>),
{
    type Item = T;

    fn produce(&mut self) -> Option<T> {
        if let Some(value) = self.sink.buf.pop_front() {
            return Some(value);
        }
        // At most one invocation per empty-buffer produce call.
        let generator = self.generator.as_mut()?;
        generator(&mut self.sink);
        let front = self.sink.buf.pop_front();
        if front.is_none() {
            // An empty batch is the completion signal.
            self.generator = None;
        }
        front
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::LazyCursor;
    use std::cell::Cell;

    /// Invariant: batches are served in emission order across invocations;
    /// the invocation that yields nothing confirms exhaustion and the
    /// generator is never invoked afterwards.
    #[test]
    fn batch_protocol() {
        let calls = Cell::new(0u32);
        let mut c = LazyCursor::new(Generate::new(|sink| {
            calls.set(calls.get() + 1);
            match calls.get() {
                1 => {
                    sink.emit(1);
                    sink.emit(2);
                }
                2 => sink.emit(3),
                _ => {}
            }
        }));

        assert_eq!(c.try_next(), Ok(1));
        assert_eq!(c.peek(), Some(&2), "second value sits in the buffer");
        assert_eq!(c.by_ref().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(calls.get(), 3, "two refills plus the exhaustion check");
        assert!(!c.has_next());
        assert_eq!(calls.get(), 3, "finished generator is not re-invoked");
    }

    /// Invariant: values are buffered in emission order and served from the
    /// buffer before the generator runs again.
    #[test]
    fn buffer_serves_before_reinvocation() {
        let mut g = Generate::new(|sink| {
            sink.emit('x');
            sink.emit('y');
        });
        assert_eq!(g.buffered(), 0);
        assert_eq!(g.produce(), Some('x'));
        assert_eq!(g.buffered(), 1);
        assert_eq!(g.produce(), Some('y'));
        assert_eq!(g.buffered(), 0);
    }

    /// Invariant: a generator that yields nothing on first activation makes
    /// an immediately exhausted cursor after exactly one invocation.
    #[test]
    fn empty_first_batch_is_terminal() {
        let calls = Cell::new(0u32);
        let mut c = LazyCursor::new(Generate::new(|_sink: &mut Sink<i32>| {
            calls.set(calls.get() + 1);
        }));
        assert!(!c.has_next());
        assert!(!c.has_next());
        assert_eq!(calls.get(), 1);
    }

    /// Invariant: an infinite generator is consumed lazily, one batch per
    /// refill.
    #[test]
    fn infinite_generator_consumed_lazily() {
        let mut n = 0;
        let c = LazyCursor::new(Generate::new(move |sink| {
            sink.emit(n);
            sink.emit(n + 1);
            n += 2;
        }));
        let out: Vec<i32> = c.take(5).collect();
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
    }
}
