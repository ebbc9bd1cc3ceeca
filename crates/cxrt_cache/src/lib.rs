//! Sparse, integer-keyed memoization storage.
//!
//! A [`SparseCache`] maps small dense [`CacheKey`](cxrt_common::CacheKey)s to one
//! stored value each, growing its slot table on demand. It is plain per-worker
//! state: whoever needs memoization owns a cache and passes it down by `&mut`.
//! For callers that rely on the ambient per-thread contract, [`local`] keeps one
//! lazily created cache of [`CachedValue`]s per thread.

#![warn(missing_docs)]

pub mod error;
pub mod local;
pub mod sparse;
pub mod value;

pub use error::CacheError;
pub use sparse::SparseCache;
pub use value::CachedValue;
