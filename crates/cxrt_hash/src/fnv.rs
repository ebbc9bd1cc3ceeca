//! Streaming FNV-1a hashing.

use std::hash::Hasher;

use cxrt_common::Fingerprint;

use crate::{OFFSET_BASIS, PRIME};

/// A streaming 64-bit FNV-1a accumulator.
///
/// Every update consumes the previous state. There is no merge: two accumulators
/// can only be related by re-feeding the bytes of one into the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    /// Creates an accumulator seeded with [`OFFSET_BASIS`].
    pub const fn new() -> Self {
        Self {
            state: OFFSET_BASIS,
        }
    }

    /// Folds each byte in order: `state = (state ^ b) * PRIME`.
    #[inline]
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = (self.state ^ u64::from(byte)).wrapping_mul(PRIME);
        }
    }

    /// Folds the 8 little-endian bytes of `value`, least significant first.
    #[inline]
    pub fn add_integer(&mut self, value: u64) {
        self.add_bytes(&value.to_le_bytes());
    }

    /// Folds a signed integer through its two's complement bit pattern.
    #[inline]
    pub fn add_signed(&mut self, value: i64) {
        self.add_bytes(&value.to_le_bytes());
    }

    /// Returns the current accumulator.
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Returns the current accumulator as a [`Fingerprint`].
    pub const fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from_raw(self.state)
    }

    /// Renders the accumulator as 16 uppercase hex characters.
    pub fn hex_digest(&self) -> String {
        self.fingerprint().to_hex()
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.add_bytes(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}
