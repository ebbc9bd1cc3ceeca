//! The closed set of payloads the per-thread cache can hold.

use std::sync::Arc;

use cxrt_common::Fingerprint;
use cxrt_hash::PolyHashState;

/// A memoized result.
///
/// Every variant is `Copy` or reference counted, so cloning a value out of a
/// cache hands the caller a shared view rather than a fresh allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    /// A finished fingerprint.
    Fingerprint(Fingerprint),
    /// A combinable state, kept open so callers can append to it later.
    Poly(PolyHashState),
    /// A produced string, e.g. a mangled name or an artifact path.
    Text(Arc<str>),
    /// A produced binary artifact.
    Bytes(Arc<[u8]>),
    /// Marks that the unit's work has already happened.
    Flag(bool),
}

impl CachedValue {
    /// Returns the fingerprint this value stands for, if it has one.
    ///
    /// An open [`Poly`](Self::Poly) state reports its current `add` component.
    pub fn fingerprint(&self) -> Option<Fingerprint> {
        match self {
            Self::Fingerprint(fp) => Some(*fp),
            Self::Poly(state) => Some(state.fingerprint()),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a [`Text`](Self::Text) value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the byte payload, if this is a [`Bytes`](Self::Bytes) value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<Fingerprint> for CachedValue {
    fn from(fp: Fingerprint) -> Self {
        Self::Fingerprint(fp)
    }
}

impl From<PolyHashState> for CachedValue {
    fn from(state: PolyHashState) -> Self {
        Self::Poly(state)
    }
}

impl From<&str> for CachedValue {
    fn from(text: &str) -> Self {
        Self::Text(Arc::from(text))
    }
}

impl From<String> for CachedValue {
    fn from(text: String) -> Self {
        Self::Text(Arc::from(text))
    }
}

impl From<Vec<u8>> for CachedValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Arc::from(bytes))
    }
}

impl From<bool> for CachedValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}
