//! Hierarchical fingerprints of composite values.
//!
//! A composite's state is the in-order combination of its parts' states, so the
//! fingerprint of a sequence equals the fingerprint of its parts' contents laid end
//! to end. Part boundaries are not encoded: `["ab", "c"]` and `["a", "bc"]` hash
//! alike. Callers that need boundaries fold a length or tag in explicitly.

use cxrt_common::Fingerprint;

use crate::poly::PolyHashState;

/// Values whose content can be expressed as a [`PolyHashState`].
///
/// Implementations start from [`PolyHashState::IDENTITY`], never from the offset
/// basis, so results can be combined freely.
pub trait PolyHash {
    /// Returns the combinable state of this value's content.
    fn poly_hash(&self) -> PolyHashState;
}

impl PolyHash for PolyHashState {
    fn poly_hash(&self) -> PolyHashState {
        *self
    }
}

impl PolyHash for u8 {
    fn poly_hash(&self) -> PolyHashState {
        PolyHashState::of_bytes(&[*self])
    }
}

impl PolyHash for u64 {
    fn poly_hash(&self) -> PolyHashState {
        PolyHashState::of_integer(*self)
    }
}

impl PolyHash for i64 {
    fn poly_hash(&self) -> PolyHashState {
        PolyHashState::of_integer(*self as u64)
    }
}

impl PolyHash for str {
    fn poly_hash(&self) -> PolyHashState {
        PolyHashState::of_bytes(self.as_bytes())
    }
}

impl PolyHash for String {
    fn poly_hash(&self) -> PolyHashState {
        self.as_str().poly_hash()
    }
}

impl<T: PolyHash> PolyHash for [T] {
    fn poly_hash(&self) -> PolyHashState {
        self.iter().map(T::poly_hash).collect()
    }
}

impl<T: PolyHash, const N: usize> PolyHash for [T; N] {
    fn poly_hash(&self) -> PolyHashState {
        self.as_slice().poly_hash()
    }
}

impl<T: PolyHash> PolyHash for Vec<T> {
    fn poly_hash(&self) -> PolyHashState {
        self.as_slice().poly_hash()
    }
}

impl<T: PolyHash + ?Sized> PolyHash for &T {
    fn poly_hash(&self) -> PolyHashState {
        (**self).poly_hash()
    }
}

impl<T: PolyHash + ?Sized> PolyHash for Box<T> {
    fn poly_hash(&self) -> PolyHashState {
        (**self).poly_hash()
    }
}

impl<A: PolyHash, B: PolyHash> PolyHash for (A, B) {
    fn poly_hash(&self) -> PolyHashState {
        self.0.poly_hash().combine(&self.1.poly_hash())
    }
}

impl<A: PolyHash, B: PolyHash, C: PolyHash> PolyHash for (A, B, C) {
    fn poly_hash(&self) -> PolyHashState {
        self.0
            .poly_hash()
            .combine(&self.1.poly_hash())
            .combine(&self.2.poly_hash())
    }
}

/// Fingerprint of a value: the seeded state with the value's content appended.
pub fn fingerprint_of<T: PolyHash + ?Sized>(value: &T) -> Fingerprint {
    PolyHashState::new()
        .combine(&value.poly_hash())
        .fingerprint()
}
