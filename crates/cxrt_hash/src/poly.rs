//! Combinable polynomial hashing.
//!
//! For content `b[0..n]` the state is
//!
//! ```text
//! add  = b[0]*P^(n-1) + b[1]*P^(n-2) + ... + b[n-1]*P^0
//! mult = P^n
//! ```
//!
//! so the first byte carries the highest power of `P`. Appending content `r` after
//! content `l` is then `add = l.add * r.mult + r.add`, `mult = l.mult * r.mult`,
//! which is associative but not commutative.

use std::hash::Hasher;

use cxrt_common::Fingerprint;
use serde::{Deserialize, Serialize};

use crate::{OFFSET_BASIS, PRIME};

/// A combinable fingerprint: accumulated polynomial value plus `PRIME^length`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PolyHashState {
    add: u64,
    mult: u64,
}

impl PolyHashState {
    /// The state of empty content. Combining with it on either side is a no-op.
    pub const IDENTITY: Self = Self { add: 0, mult: 1 };

    /// Creates a state seeded with [`OFFSET_BASIS`] and no content.
    pub const fn new() -> Self {
        Self {
            add: OFFSET_BASIS,
            mult: 1,
        }
    }

    /// Reassembles a state from its two components.
    pub const fn from_parts(add: u64, mult: u64) -> Self {
        Self { add, mult }
    }

    /// Accumulated polynomial value.
    pub const fn add(&self) -> u64 {
        self.add
    }

    /// `PRIME` raised to the number of bytes absorbed.
    pub const fn mult(&self) -> u64 {
        self.mult
    }

    /// Hashes a byte buffer on its own, starting from [`Self::IDENTITY`].
    pub fn of_bytes(bytes: &[u8]) -> Self {
        // Horner form: each new byte pushes everything before it up one power.
        let mut state = Self::IDENTITY;
        for &byte in bytes {
            state.add = state.add.wrapping_mul(PRIME).wrapping_add(u64::from(byte));
            state.mult = state.mult.wrapping_mul(PRIME);
        }
        state
    }

    /// Hashes the 8 bytes of `value` as a polynomial whose byte `i` (counting from
    /// the least significant) carries `PRIME^i`.
    ///
    /// Equivalent to [`Self::of_bytes`] over the big-endian bytes, so appending an
    /// integer agrees with appending those bytes.
    pub fn of_integer(value: u64) -> Self {
        Self::of_bytes(&value.to_be_bytes())
    }

    /// Returns the state of `self`'s content followed by `right`'s content.
    #[must_use]
    pub const fn combine(self, right: &Self) -> Self {
        Self {
            add: self.add.wrapping_mul(right.mult).wrapping_add(right.add),
            mult: self.mult.wrapping_mul(right.mult),
        }
    }

    /// Appends `right`'s content to `self` in place. `right` is only read.
    #[inline]
    pub fn apply(&mut self, right: &Self) {
        *self = self.combine(right);
    }

    /// Appends a byte buffer after the content already represented.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.apply(&Self::of_bytes(bytes));
    }

    /// Appends an integer after the content already represented.
    pub fn add_integer(&mut self, value: u64) {
        self.apply(&Self::of_integer(value));
    }

    /// Returns `add` as a [`Fingerprint`].
    pub const fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from_raw(self.add)
    }

    /// Renders `add` as 16 uppercase hex characters.
    pub fn hex_digest(&self) -> String {
        self.fingerprint().to_hex()
    }
}

impl Default for PolyHashState {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for PolyHashState {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.add_bytes(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.add
    }
}

impl FromIterator<PolyHashState> for PolyHashState {
    /// Combines the states in iteration order, starting from [`Self::IDENTITY`].
    fn from_iter<I: IntoIterator<Item = PolyHashState>>(iter: I) -> Self {
        let mut state = Self::IDENTITY;
        state.extend(iter);
        state
    }
}

impl Extend<PolyHashState> for PolyHashState {
    fn extend<I: IntoIterator<Item = PolyHashState>>(&mut self, iter: I) {
        for right in iter {
            self.apply(&right);
        }
    }
}

/// Single-scalar fingerprint of one buffer: `new()` combined with `of_bytes(bytes)`.
pub fn whole_string_hash(bytes: &[u8]) -> u64 {
    PolyHashState::new()
        .combine(&PolyHashState::of_bytes(bytes))
        .add
}
