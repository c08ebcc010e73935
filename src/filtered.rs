//! Predicate-filtered multimap views.
//!
//! Both views are live, non-copying lenses over a backing [`MultiMap`]: no
//! data is duplicated, every read consults the backing mapping through the
//! predicate, and every mutation is validated before it is delegated. A
//! rejected mutation leaves the backing mapping untouched.
//!
//! The predicate must be pure and stable for the lifetime of the view;
//! a predicate that changes its verdict between calls can make the view's
//! invariants unobservable. That discipline is the caller's responsibility,
//! not something the view detects.

use crate::multimap::{MultiMap, Rejected};
use core::marker::PhantomData;

/// Restricts a backing multimap to the keys satisfying a predicate.
///
/// Implements [`MultiMap`] itself, so filtered views chain: wrapping a
/// filtered view filters by the conjunction of both predicates.
pub struct FilteredKeyMultiMap<M, P> {
    backing: M,
    predicate: P,
}

impl<M, P> FilteredKeyMultiMap<M, P> {
    pub fn new(backing: M, predicate: P) -> Self {
        Self { backing, predicate }
    }

    /// The backing mapping, unwrapped.
    pub fn unfiltered(&self) -> &M {
        &self.backing
    }

    pub fn unfiltered_mut(&mut self) -> &mut M {
        &mut self.backing
    }

    pub fn into_unfiltered(self) -> M {
        self.backing
    }
}

/// Key iterator of a [`FilteredKeyMultiMap`].
pub struct FilteredKeys<'a, I, P> {
    inner: I,
    predicate: &'a P,
}

impl<'a, K, I, P> Iterator for FilteredKeys<'a, I, P>
where
    K: 'a,
    I: Iterator<Item = &'a K>,
    P: Fn(&K) -> bool,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let predicate = self.predicate;
        self.inner.find(|key| predicate(key))
    }
}

/// Entry iterator of a [`FilteredKeyMultiMap`].
pub struct FilteredEntries<'a, I, P> {
    inner: I,
    predicate: &'a P,
}

impl<'a, K, V, I, P> Iterator for FilteredEntries<'a, I, P>
where
    K: 'a,
    V: 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
    P: Fn(&K) -> bool,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.inner.find(|(key, _)| predicate(key))
    }
}

impl<K, V, M, P> MultiMap<K, V> for FilteredKeyMultiMap<M, P>
where
    M: MultiMap<K, V>,
    P: Fn(&K) -> bool,
{
    type Keys<'a>
        = FilteredKeys<'a, M::Keys<'a>, P>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type Entries<'a>
        = FilteredEntries<'a, M::Entries<'a>, P>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        self.keys().map(|key| self.backing.get(key).len()).sum()
    }

    fn contains_key(&self, key: &K) -> bool {
        (self.predicate)(key) && self.backing.contains_key(key)
    }

    fn get(&self, key: &K) -> &[V] {
        if (self.predicate)(key) {
            self.backing.get(key)
        } else {
            &[]
        }
    }

    /// Refuses keys outside the view's domain: the view never creates an
    /// entry it could not observe.
    fn insert(&mut self, key: K, value: V) -> Result<(), Rejected> {
        if !(self.predicate)(&key) {
            return Err(Rejected);
        }
        self.backing.insert(key, value)
    }

    /// No-op outside the view's domain: reports nothing removed rather than
    /// touching backing data the view cannot see.
    fn remove_all(&mut self, key: &K) -> Vec<V> {
        if !(self.predicate)(key) {
            return Vec::new();
        }
        self.backing.remove_all(key)
    }

    fn replace_values(&mut self, key: K, values: Vec<V>) -> Result<Vec<V>, Rejected> {
        if !(self.predicate)(&key) {
            return Err(Rejected);
        }
        self.backing.replace_values(key, values)
    }

    fn keys(&self) -> Self::Keys<'_> {
        FilteredKeys {
            inner: self.backing.keys(),
            predicate: &self.predicate,
        }
    }

    fn entries(&self) -> Self::Entries<'_> {
        FilteredEntries {
            inner: self.backing.entries(),
            predicate: &self.predicate,
        }
    }
}

/// Restricts a backing multimap per (key, value) pair, for filters that
/// depend on the value as well as the key.
///
/// Unlike the key-level view this cannot hand out contiguous value slices
/// (admitted values need not be adjacent in the backing sequence), so `get`
/// returns a lazy filtering iterator and the type does not implement
/// [`MultiMap`].
pub struct FilteredEntryMultiMap<M, P, K, V> {
    backing: M,
    predicate: P,
    _marker: PhantomData<fn(&K, &V)>,
}

impl<M, P, K, V> FilteredEntryMultiMap<M, P, K, V> {
    pub fn new(backing: M, predicate: P) -> Self {
        Self {
            backing,
            predicate,
            _marker: PhantomData,
        }
    }

    pub fn unfiltered(&self) -> &M {
        &self.backing
    }

    pub fn unfiltered_mut(&mut self) -> &mut M {
        &mut self.backing
    }

    pub fn into_unfiltered(self) -> M {
        self.backing
    }
}

/// Value iterator of a [`FilteredEntryMultiMap`] for one key.
pub struct FilteredValues<'a, K, V, P> {
    key: &'a K,
    values: core::slice::Iter<'a, V>,
    predicate: &'a P,
}

impl<'a, K, V, P> Iterator for FilteredValues<'a, K, V, P>
where
    P: Fn(&K, &V) -> bool,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let key = self.key;
        let predicate = self.predicate;
        self.values.find(|value| predicate(key, value))
    }
}

impl<K, V, M, P> FilteredEntryMultiMap<M, P, K, V>
where
    M: MultiMap<K, V>,
    P: Fn(&K, &V) -> bool,
{
    /// Admitted values at `key`, lazily filtered from the backing sequence.
    pub fn get<'a>(&'a self, key: &'a K) -> FilteredValues<'a, K, V, P> {
        FilteredValues {
            key,
            values: self.backing.get(key).iter(),
            predicate: &self.predicate,
        }
    }

    /// Whether at least one value at `key` is admitted.
    pub fn contains_key(&self, key: &K) -> bool {
        self.backing
            .get(key)
            .iter()
            .any(|value| (self.predicate)(key, value))
    }

    /// Number of admitted (key, value) pairs.
    pub fn len(&self) -> usize {
        self.backing
            .entries()
            .filter(|(key, value)| (self.predicate)(key, value))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Admitted (key, value) pairs across all keys.
    pub fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
    where
        K: 'a,
        V: 'a,
    {
        self.backing
            .entries()
            .filter(|(key, value)| (self.predicate)(key, value))
    }

    /// Refuses pairs the view could not observe.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), Rejected> {
        if !(self.predicate)(&key, &value) {
            return Err(Rejected);
        }
        self.backing.insert(key, value)
    }

    /// Remove and return the admitted values at `key`; values outside the
    /// view's domain stay in the backing mapping.
    pub fn remove_all(&mut self, key: &K) -> Vec<V>
    where
        K: Clone,
    {
        let all = self.backing.remove_all(key);
        if all.is_empty() {
            return all;
        }
        let mut removed = Vec::new();
        let mut kept = Vec::new();
        for value in all {
            if (self.predicate)(key, &value) {
                removed.push(value);
            } else {
                kept.push(value);
            }
        }
        if !kept.is_empty() {
            let restored = self.backing.replace_values(key.clone(), kept);
            debug_assert!(
                restored.is_ok(),
                "backing accepted remove_all for this key but refused the restore"
            );
        }
        removed
    }

    /// Replace the admitted values at `key` with `values`, returning the
    /// removed admitted values. Every replacement value must be admitted;
    /// otherwise the whole call fails before anything is mutated. Values
    /// outside the view's domain are preserved ahead of the replacements.
    pub fn replace_values(&mut self, key: K, values: Vec<V>) -> Result<Vec<V>, Rejected>
    where
        K: Clone,
    {
        if values.iter().any(|value| !(self.predicate)(&key, value)) {
            return Err(Rejected);
        }
        let all = self.backing.remove_all(&key);
        let mut removed = Vec::new();
        let mut next = Vec::new();
        for value in all {
            if (self.predicate)(&key, &value) {
                removed.push(value);
            } else {
                next.push(value);
            }
        }
        next.extend(values);
        if !next.is_empty() {
            self.backing.replace_values(key, next)?;
        }
        Ok(removed)
    }
}
