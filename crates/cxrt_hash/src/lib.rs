//! Deterministic content fingerprinting.
//!
//! Two hash algorithms share the same 64-bit accumulator width and starting value:
//!
//! - [`FnvHasher`] is a streaming FNV-1a hasher. Content is folded in one byte at a
//!   time and a state cannot be split or merged with another state.
//! - [`PolyHashState`] is a combinable polynomial hash. A state is the pair
//!   `(add, mult)` where `mult = PRIME^n` for the `n` bytes absorbed, which lets two
//!   independently computed states be merged in O(1) as if the right-hand content
//!   had been appended after the left-hand content.
//!
//! The combinable form is what makes hierarchical fingerprinting possible: leaves are
//! hashed independently (see [`PolyHash`] and the [`parallel`] helpers) and parents
//! combine their children's states in left-to-right order without revisiting any
//! bytes.
//!
//! All arithmetic wraps modulo 2^64. These are checksums, not cryptographic digests.

#![warn(missing_docs)]

pub mod compose;
pub mod fnv;
pub mod parallel;
pub mod poly;

pub use compose::{fingerprint_of, PolyHash};
pub use fnv::FnvHasher;
pub use parallel::{hash_chunked, hash_parts};
pub use poly::{whole_string_hash, PolyHashState};

/// Starting value of both accumulators (the 64-bit FNV offset basis).
pub const OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;

/// Multiplier of both algorithms (the 64-bit FNV prime).
pub const PRIME: u64 = 1_099_511_628_211;
