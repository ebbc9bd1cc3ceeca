//! Error types for cache operations.

use cxrt_common::CacheKey;

/// Errors reported by the fallible cache entry points.
///
/// Both variants are caller bugs. The direct API (`get`, `set`) treats the same
/// conditions as fatal; these exist for boundaries that must report instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// The absence marker was offered as a value to store.
    #[error("refusing to store an empty value at cache key {key}")]
    EmptyValue {
        /// The key the store was attempted at.
        key: CacheKey,
    },

    /// A read was attempted on a slot that holds no value.
    #[error("cache key {key} is not set")]
    Unset {
        /// The key that was read.
        key: CacheKey,
    },
}
