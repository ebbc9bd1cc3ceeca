//! Dense cache keys and the symbol table that hands them out.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative, dense index into a sparse memoization cache.
///
/// Keys are assigned by the caller, typically one per symbol or call site, and
/// carry no meaning beyond their position. Non-negativity is enforced by the type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct CacheKey(u32);

impl CacheKey {
    /// Creates a key from a raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns the slot position this key addresses.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CacheKey {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl TryFrom<i64> for CacheKey {
    type Error = KeyError;

    /// Converts a signed key as handed over by generated code.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(KeyError::Negative(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| KeyError::OutOfRange(value))
    }
}

impl TryFrom<usize> for CacheKey {
    type Error = KeyError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| KeyError::OutOfRange(i64::try_from(value).unwrap_or(i64::MAX)))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// SAFETY: `CacheKey` wraps a `u32` which is always a valid `usize` on 32-bit and
// 64-bit platforms. `try_from_usize` rejects values that don't fit in `u32`.
unsafe impl lasso::Key for CacheKey {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(CacheKey)
    }
}

/// Errors converting a caller-supplied integer into a [`CacheKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Cache keys are never negative.
    #[error("cache key must not be negative, got {0}")]
    Negative(i64),

    /// The value does not fit the key width.
    #[error("cache key {0} is out of range")]
    OutOfRange(i64),
}

/// Thread-safe table assigning dense [`CacheKey`]s to symbol names.
///
/// The first symbol interned receives key 0, the next key 1, and so on, so the
/// keys can index a sparse memoization cache directly. Interning the same name
/// twice returns the same key.
pub struct SymbolTable {
    rodeo: ThreadedRodeo<CacheKey>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Returns the key for `symbol`, assigning the next free key if it is new.
    pub fn get_or_intern(&self, symbol: &str) -> CacheKey {
        self.rodeo.get_or_intern(symbol)
    }

    /// Returns the key for `symbol` if it was interned before.
    pub fn get(&self, symbol: &str) -> Option<CacheKey> {
        self.rodeo.get(symbol)
    }

    /// Resolves a key back to its symbol name.
    ///
    /// # Panics
    ///
    /// Panics if the key was not handed out by this table.
    pub fn resolve(&self, key: CacheKey) -> &str {
        self.rodeo.resolve(&key)
    }

    /// Number of distinct symbols interned so far.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns `true` if no symbol has been interned.
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
