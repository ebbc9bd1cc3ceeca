//! Shared foundational types used across the cxrt runtime support crates.
//!
//! This crate provides the fixed-width [`Fingerprint`] produced by the hashers,
//! the dense [`CacheKey`] used to index memoization slots, and a [`SymbolTable`]
//! that assigns those keys to symbol names.

#![warn(missing_docs)]

pub mod fingerprint;
pub mod key;

pub use fingerprint::{Fingerprint, ParseFingerprintError};
pub use key::{CacheKey, KeyError, SymbolTable};
