//! The growable slot table behind every memoization cache.

use cxrt_common::CacheKey;
use tracing::{debug, trace};

use crate::error::CacheError;

/// A dense, growable table of optional values indexed by [`CacheKey`].
///
/// Most keys may stay empty for the lifetime of the cache. The table grows to
/// `key + 1` slots the first time a key beyond its end is set, filling the new
/// slots with empties, and never shrinks.
///
/// A stored value is never the absence marker: [`set`](Self::set) takes a `T`,
/// and [`store`](Self::store) rejects `None`.
#[derive(Debug, Clone)]
pub struct SparseCache<T> {
    slots: Vec<Option<T>>,
}

impl<T> SparseCache<T> {
    /// Creates an empty cache. Nothing is allocated until the first `set`.
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of slots, set or not. Never decreases.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a value.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns `true` if `key` is within capacity and its slot holds a value.
    pub fn is_set(&self, key: CacheKey) -> bool {
        self.slot(key).is_some()
    }

    /// Returns the value stored at `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not set. Callers check [`is_set`](Self::is_set) first.
    pub fn get(&self, key: CacheKey) -> &T {
        match self.slot(key) {
            Some(value) => value,
            None => panic!("cache key {key} read before it was set"),
        }
    }

    /// Returns the value stored at `key`, or `None` for an empty or missing slot.
    pub fn slot(&self, key: CacheKey) -> Option<&T> {
        self.slots.get(key.index()).and_then(Option::as_ref)
    }

    /// Mutable access to the value stored at `key`.
    pub fn slot_mut(&mut self, key: CacheKey) -> Option<&mut T> {
        self.slots.get_mut(key.index()).and_then(Option::as_mut)
    }

    /// Returns the value stored at `key`, or [`CacheError::Unset`].
    pub fn try_get(&self, key: CacheKey) -> Result<&T, CacheError> {
        self.slot(key).ok_or(CacheError::Unset { key })
    }

    /// Stores `value` at `key`, growing the table if needed.
    ///
    /// An existing occupant is replaced and handed back to the caller.
    pub fn set(&mut self, key: CacheKey, value: T) -> Option<T> {
        let previous = self.slot_entry(key).replace(value);
        if previous.is_some() {
            trace!(%key, "cache slot overwritten");
        }
        previous
    }

    /// Fallible form of [`set`](Self::set) for values that may be absent.
    ///
    /// Returns [`CacheError::EmptyValue`] without touching the table when `value`
    /// is `None`.
    pub fn store(&mut self, key: CacheKey, value: Option<T>) -> Result<Option<T>, CacheError> {
        match value {
            Some(value) => Ok(self.set(key, value)),
            None => Err(CacheError::EmptyValue { key }),
        }
    }

    /// Returns the value at `key`, computing and storing it with `compute` first
    /// if the slot is empty.
    pub fn get_or_insert_with<F>(&mut self, key: CacheKey, compute: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.slot_entry(key).get_or_insert_with(compute)
    }

    /// Empties the slot at `key` and returns its value. Capacity is unchanged.
    pub fn take(&mut self, key: CacheKey) -> Option<T> {
        self.slots.get_mut(key.index()).and_then(Option::take)
    }

    /// Iterates over the occupied slots in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (CacheKey, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let value = slot.as_ref()?;
            let key = CacheKey::try_from(index).ok()?;
            Some((key, value))
        })
    }

    /// Returns the slot for `key`, growing the table to reach it.
    fn slot_entry(&mut self, key: CacheKey) -> &mut Option<T> {
        let index = key.index();
        if index >= self.slots.len() {
            let old = self.slots.len();
            self.slots.resize_with(index + 1, || None);
            debug!(old, new = self.slots.len(), "cache slot table grown");
        }
        &mut self.slots[index]
    }
}

impl<T> Default for SparseCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(index: u32) -> CacheKey {
        CacheKey::new(index)
    }

    #[test]
    fn fresh_cache_is_empty() {
        let cache: SparseCache<String> = SparseCache::new();
        assert_eq!(cache.capacity(), 0);
        assert!(cache.is_empty());
        assert!(!cache.is_set(key(0)));
        assert!(!cache.is_set(key(1000)));
    }

    #[test]
    fn set_grows_to_key() {
        let mut cache = SparseCache::new();
        cache.set(key(5), "v");

        assert_eq!(cache.capacity(), 6);
        for index in 0..5 {
            assert!(!cache.is_set(key(index)), "slot {index} should be empty");
        }
        assert!(cache.is_set(key(5)));
        assert_eq!(*cache.get(key(5)), "v");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn growth_keeps_existing_values() {
        let mut cache = SparseCache::new();
        cache.set(key(1), 10);
        cache.set(key(8), 80);

        assert_eq!(cache.capacity(), 9);
        assert_eq!(*cache.get(key(1)), 10);
        assert_eq!(*cache.get(key(8)), 80);
        assert!(!cache.is_set(key(4)));
    }

    #[test]
    fn capacity_never_shrinks() {
        let mut cache = SparseCache::new();
        cache.set(key(9), 1);
        cache.set(key(2), 2);
        assert_eq!(cache.capacity(), 10);
        assert_eq!(cache.take(key(9)), Some(1));
        assert_eq!(cache.capacity(), 10);
        assert!(!cache.is_set(key(9)));
    }

    #[test]
    fn overwrite_replaces_only_that_key() {
        let mut cache = SparseCache::new();
        cache.set(key(2), "first");
        cache.set(key(3), "neighbour");

        let previous = cache.set(key(2), "second");
        assert_eq!(previous, Some("first"));
        assert_eq!(*cache.get(key(2)), "second");
        assert_eq!(*cache.get(key(3)), "neighbour");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn set_on_fresh_slot_returns_none() {
        let mut cache = SparseCache::new();
        assert_eq!(cache.set(key(0), 'x'), None);
    }

    #[test]
    fn store_rejects_empty_value() {
        let mut cache: SparseCache<u32> = SparseCache::new();
        let err = cache.store(key(4), None).unwrap_err();
        assert_eq!(err, CacheError::EmptyValue { key: key(4) });
        assert_eq!(cache.capacity(), 0);
        assert!(!cache.is_set(key(4)));
    }

    #[test]
    fn store_accepts_present_value() {
        let mut cache = SparseCache::new();
        assert_eq!(cache.store(key(1), Some(7u32)), Ok(None));
        assert_eq!(cache.store(key(1), Some(8u32)), Ok(Some(7)));
        assert_eq!(*cache.get(key(1)), 8);
    }

    #[test]
    #[should_panic(expected = "read before it was set")]
    fn get_unset_panics() {
        let mut cache = SparseCache::new();
        cache.set(key(3), 1u8);
        cache.get(key(1));
    }

    #[test]
    #[should_panic(expected = "read before it was set")]
    fn get_beyond_capacity_panics() {
        let cache: SparseCache<u8> = SparseCache::new();
        cache.get(key(0));
    }

    #[test]
    fn try_get_reports_unset() {
        let cache: SparseCache<u8> = SparseCache::new();
        assert_eq!(cache.try_get(key(2)), Err(CacheError::Unset { key: key(2) }));
    }

    #[test]
    fn get_or_insert_with_computes_once() {
        let mut cache = SparseCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            let value = cache.get_or_insert_with(key(6), || {
                calls += 1;
                "artifact".to_string()
            });
            assert_eq!(value.as_str(), "artifact");
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.capacity(), 7);
    }

    #[test]
    fn slot_mut_updates_in_place() {
        let mut cache = SparseCache::new();
        cache.set(key(0), vec![1]);
        cache.slot_mut(key(0)).unwrap().push(2);
        assert_eq!(cache.get(key(0)), &vec![1, 2]);
        assert!(cache.slot_mut(key(5)).is_none());
    }

    #[test]
    fn iter_yields_occupied_in_order() {
        let mut cache = SparseCache::new();
        cache.set(key(7), 'c');
        cache.set(key(0), 'a');
        cache.set(key(3), 'b');

        let items: Vec<_> = cache.iter().map(|(k, v)| (k.as_raw(), *v)).collect();
        assert_eq!(items, vec![(0, 'a'), (3, 'b'), (7, 'c')]);
    }
}
