//! Configuration types deserialized from `cxrt.toml`.

use serde::Deserialize;

/// Default number of bytes per parallel hashing chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// The top-level configuration parsed from `cxrt.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Hash selection and output settings.
    #[serde(default)]
    pub hash: HashConfig,
    /// Parallel hashing settings.
    #[serde(default)]
    pub parallel: ParallelConfig,
}

/// Which algorithm to run and how to print its digest.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashConfig {
    /// The hash algorithm used when the command line does not pick one.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// The digest rendering used when the command line does not pick one.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Settings for hashing large inputs on the rayon pool.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParallelConfig {
    /// Bytes per chunk. Must be non-zero.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

/// Hash algorithm selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Streaming FNV-1a.
    Fnv,
    /// Combinable polynomial hash.
    #[default]
    Poly,
}

/// Digest rendering selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 16 uppercase hex characters.
    #[default]
    Hex,
    /// Unsigned decimal integer.
    Decimal,
    /// A JSON object with the algorithm and raw state.
    Json,
}
