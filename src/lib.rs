//! lazy-views: lazy cursors, iterator decorators, and predicate-filtered
//! multimap views over backing collections.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: small, reusable building blocks for *views* — objects that
//!   present a transformed, filtered, or restricted perspective of an
//!   underlying collection without copying data, delegating mutation (or
//!   refusing it) according to well-defined rules.
//! - Layers:
//!   - `lazy`: the pull contract. `Produce` supplies one primitive
//!     (`produce() -> Option<T>`, `None` = permanent exhaustion);
//!     `LazyCursor` derives the checked surface on top, caching at most one
//!     computed element so `has_next` is idempotent and a finished producer
//!     is never polled again.
//!   - `drain`: a producer that consumes a backing queue front-first.
//!   - `generate`: the cooperative push/pull bridge — a generator yields
//!     batches into a `Sink`; the cursor serves the buffer before invoking
//!     the generator again, at most once per empty-buffer pull.
//!   - `bidi` + `read_only` + `transform`: the bidirectional cursor
//!     contract, a concrete vector cursor, and decorators that restrict
//!     (read-only) or map (transform, with optional inverse) a wrapped
//!     cursor. Decorators compose around a stored inner cursor; there is no
//!     shared mutable base.
//!   - `multimap` + `filtered`: the multimap contract, one hash-indexed
//!     implementation, and the filtering views (key-level and entry-level)
//!     that validate every mutation before delegating it. The key-level
//!     view implements the contract it wraps, so views chain.
//!   - `order`: the stateless natural-ordering comparator collaborator.
//!
//! Constraints
//! - Single-threaded, non-reentrant value types; no locking, no async, no
//!   I/O, no timeouts. Generator "suspension" is cooperative control
//!   transfer within one thread.
//! - Exhaustion is terminal and irreversible; lazy cursors are
//!   forward-only and non-restartable (bidirectional cursors traverse both
//!   ways but never resurrect a finished lazy producer).
//! - Failed mutations are guaranteed no-ops: a refused `set`/`insert`/
//!   `remove` or a predicate-rejected multimap mutation leaves backing
//!   state unmodified.
//! - All failures are explicit `Result` values surfaced at the offending
//!   call; nothing is retried, logged, or swallowed.
//!
//! Why this split?
//! - Localize invariants: each layer has a small, precise contract, and
//!   decorators rely only on the contract of what they wrap.
//! - The delegation seams are traits (`Produce`, `BidiCursor`,
//!   `MultiMap`), so behavior variants are concrete implementing types
//!   rather than an inheritance chain.
//!
//! Notes and non-goals
//! - No concrete collection storage beyond the one backing multimap the
//!   views need; no serialization; no full multimap hierarchy — only the
//!   filtering decorators.
//! - Predicates must be pure and stable for the lifetime of a view; the
//!   views document rather than detect violations.
//! - Concurrent external mutation of a backing collection while a cursor
//!   is live is ruled out by the borrow checker, not by any runtime
//!   isolation in this crate.

mod bidi;
mod drain;
mod filtered;
mod generate;
mod lazy;
mod multimap;
pub mod order;
mod read_only;
mod transform;
mod view_proptest;

// Public surface
pub use bidi::{BidiCursor, MutateError, VecCursor};
pub use drain::QueueDrain;
pub use filtered::{
    FilteredEntries, FilteredEntryMultiMap, FilteredKeyMultiMap, FilteredKeys, FilteredValues,
};
pub use generate::{Generate, Sink};
pub use lazy::{Exhausted, LazyCursor, Produce};
pub use multimap::{Entries, IndexMultiMap, MultiMap, Rejected};
pub use order::{Comparator, NaturalOrder, NATURAL};
pub use read_only::ReadOnly;
pub use transform::{Transform, TransformBack};
