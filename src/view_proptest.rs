#![cfg(test)]

// Property tests for the cursor layers kept inside the crate so they can
// observe producer internals (invocation counts, buffer state) directly.

use crate::generate::Generate;
use crate::lazy::LazyCursor;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

// Property: for any input and any interleaving of has_next/peek probes,
// the producer is invoked at most once per element plus once to confirm
// exhaustion, and the consumed sequence equals the input.
proptest! {
    #[test]
    fn prop_produce_called_once_per_element(
        input in proptest::collection::vec(any::<i32>(), 0..32),
        probes in proptest::collection::vec(0u8..=2u8, 0..64),
    ) {
        let calls = Rc::new(Cell::new(0usize));
        let counter = calls.clone();
        let mut items = input.clone().into_iter();
        let mut cursor = LazyCursor::new(move || {
            counter.set(counter.get() + 1);
            items.next()
        });

        let mut consumed = Vec::new();
        for probe in probes {
            match probe {
                0 => { let _ = cursor.has_next(); }
                1 => { let _ = cursor.peek(); }
                _ => {
                    if let Ok(v) = cursor.try_next() {
                        consumed.push(v);
                    }
                }
            }
            // Never more than one call per element already consumed or
            // cached, plus at most one exhaustion probe.
            prop_assert!(calls.get() <= input.len() + 1);
        }
        while let Ok(v) = cursor.try_next() {
            consumed.push(v);
        }
        prop_assert_eq!(consumed, input.clone());
        prop_assert_eq!(calls.get(), input.len() + 1);
    }
}

// Property: a generator emitting scripted batches is invoked once per
// refill up to and including the first empty batch, which terminates it;
// the produced sequence is the concatenation of the batches before that.
proptest! {
    #[test]
    fn prop_generator_invocation_budget(
        batches in proptest::collection::vec(
            proptest::collection::vec(any::<i16>(), 0..5),
            1..8,
        ),
    ) {
        let first_empty = batches.iter().position(|b| b.is_empty());
        let served: Vec<i16> = match first_empty {
            Some(i) => batches[..i].iter().flatten().copied().collect(),
            None => batches.iter().flatten().copied().collect(),
        };

        let calls = Rc::new(Cell::new(0usize));
        let counter = calls.clone();
        let script = batches.clone();
        let mut cursor = LazyCursor::new(Generate::new(move |sink| {
            let i = counter.get();
            counter.set(i + 1);
            if let Some(batch) = script.get(i) {
                for v in batch {
                    sink.emit(*v);
                }
            }
        }));

        let out: Vec<i16> = cursor.by_ref().collect();
        prop_assert_eq!(out, served);
        prop_assert!(!cursor.has_next());

        // One invocation per non-empty refill batch, plus the one that
        // confirmed exhaustion (the first empty batch, or the first call
        // past the script).
        let expected_calls = match first_empty {
            Some(i) => i + 1,
            None => batches.len() + 1,
        };
        prop_assert_eq!(calls.get(), expected_calls);
    }
}
