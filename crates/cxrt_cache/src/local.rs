//! One lazily created cache per thread.
//!
//! Each thread gets its own [`SparseCache`] of [`CachedValue`]s the first time it
//! touches this module. It lives until the thread exits and is never shared, so no
//! locking is involved. Code that can take the cache as an argument should own a
//! [`SparseCache`] instead; this module serves callers that only have a key.

use std::cell::{Cell, RefCell};

use cxrt_common::CacheKey;
use tracing::debug;

use crate::sparse::SparseCache;
use crate::value::CachedValue;

thread_local! {
    static LOCAL: RefCell<SparseCache<CachedValue>> = RefCell::new(SparseCache::new());
    static ANNOUNCED: Cell<bool> = const { Cell::new(false) };
}

/// Runs `f` against this thread's cache cell. The first call on a thread logs
/// the cache's creation before the cell is initialized, never from inside the
/// initializer.
fn access<R>(f: impl FnOnce(&RefCell<SparseCache<CachedValue>>) -> R) -> R {
    if !ANNOUNCED.replace(true) {
        debug!(thread = ?std::thread::current().id(), "creating thread-local cache");
    }
    LOCAL.with(f)
}

/// Runs `f` with exclusive access to this thread's cache.
///
/// # Panics
///
/// Panics if called re-entrantly from inside another `with` on the same thread.
pub fn with<R>(f: impl FnOnce(&mut SparseCache<CachedValue>) -> R) -> R {
    access(|cache| f(&mut cache.borrow_mut()))
}

/// Returns `true` if `key` holds a value in this thread's cache.
pub fn is_set(key: CacheKey) -> bool {
    access(|cache| cache.borrow().is_set(key))
}

/// Returns a shared view of the value at `key` in this thread's cache.
///
/// # Panics
///
/// Panics if `key` is not set.
pub fn get(key: CacheKey) -> CachedValue {
    access(|cache| cache.borrow().get(key).clone())
}

/// Stores `value` at `key` in this thread's cache, returning the displaced value.
pub fn set(key: CacheKey, value: impl Into<CachedValue>) -> Option<CachedValue> {
    let value = value.into();
    access(|cache| cache.borrow_mut().set(key, value))
}
