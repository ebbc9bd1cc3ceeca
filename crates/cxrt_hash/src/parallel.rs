//! Out-of-order hashing on the rayon pool.
//!
//! rayon's `reduce` keeps the relative order of an indexed iterator's items and only
//! regroups them, which is exactly what an associative, non-commutative combine
//! needs.

use rayon::prelude::*;
use tracing::trace;

use crate::poly::PolyHashState;

/// Hashes `bytes` as `chunk_size`-byte chunks in parallel and combines them in order.
///
/// The result equals [`PolyHashState::of_bytes`] on the whole buffer.
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
pub fn hash_chunked(bytes: &[u8], chunk_size: usize) -> PolyHashState {
    assert!(chunk_size > 0, "chunk size must be non-zero");
    trace!(len = bytes.len(), chunk_size, "hashing in parallel chunks");

    bytes
        .par_chunks(chunk_size)
        .map(PolyHashState::of_bytes)
        .reduce(|| PolyHashState::IDENTITY, |left, right| left.combine(&right))
}

/// Hashes independent buffers in parallel and combines them in slice order.
///
/// The result equals hashing the buffers' concatenation.
pub fn hash_parts<P>(parts: &[P]) -> PolyHashState
where
    P: AsRef<[u8]> + Sync,
{
    trace!(parts = parts.len(), "hashing parts in parallel");

    parts
        .par_iter()
        .map(|part| PolyHashState::of_bytes(part.as_ref()))
        .reduce(|| PolyHashState::IDENTITY, |left, right| left.combine(&right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 % 251) as u8).collect()
    }

    #[test]
    fn chunked_matches_sequential() {
        let data = sample(10_000);
        let expected = PolyHashState::of_bytes(&data);
        for chunk_size in [1, 7, 64, 4096, 10_000, 20_000] {
            assert_eq!(hash_chunked(&data, chunk_size), expected, "chunk size {chunk_size}");
        }
    }

    #[test]
    fn chunked_empty_is_identity() {
        assert_eq!(hash_chunked(&[], 16), PolyHashState::IDENTITY);
    }

    #[test]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn zero_chunk_size_panics() {
        hash_chunked(b"data", 0);
    }

    #[test]
    fn parts_match_concatenation() {
        let parts = vec![sample(300), Vec::new(), sample(17), b"tail".to_vec()];
        let joined = parts.concat();
        assert_eq!(hash_parts(&parts), PolyHashState::of_bytes(&joined));
    }

    #[test]
    fn parts_accept_strings() {
        let parts = ["module a;", "module b;"];
        assert_eq!(
            hash_parts(&parts),
            PolyHashState::of_bytes(b"module a;module b;")
        );
    }
}
