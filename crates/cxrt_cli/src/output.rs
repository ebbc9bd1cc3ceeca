//! Digest accumulation and rendering shared by the subcommands.

use cxrt_config::{Algorithm, OutputFormat};
use cxrt_hash::{hash_chunked, FnvHasher, PolyHashState};
use serde::Serialize;

/// A running digest of either algorithm.
#[derive(Debug, Clone, Copy)]
pub enum Accumulator {
    /// Streaming FNV-1a state.
    Fnv(FnvHasher),
    /// Seeded polynomial state.
    Poly(PolyHashState),
}

impl Accumulator {
    /// Starts a fresh accumulator for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Fnv => Self::Fnv(FnvHasher::new()),
            Algorithm::Poly => Self::Poly(PolyHashState::new()),
        }
    }

    /// Folds `bytes` in. Polynomial input is hashed in `chunk_size` pieces on the
    /// rayon pool; FNV has no merge and always streams.
    pub fn add_bytes(&mut self, bytes: &[u8], chunk_size: usize) {
        match self {
            Self::Fnv(hasher) => hasher.add_bytes(bytes),
            Self::Poly(state) => state.apply(&hash_chunked(bytes, chunk_size)),
        }
    }

    /// Folds an integer in: FNV streams its 8 little-endian bytes, the polynomial
    /// hash weights byte `i` with `PRIME^i`.
    pub fn add_integer(&mut self, value: u64) {
        match self {
            Self::Fnv(hasher) => hasher.add_integer(value),
            Self::Poly(state) => state.add_integer(value),
        }
    }

    /// Snapshot of the current digest.
    pub fn report(&self) -> DigestReport {
        match self {
            Self::Fnv(hasher) => DigestReport {
                algorithm: "fnv",
                digest: hasher.hex_digest(),
                add: hasher.state(),
                mult: None,
                input: None,
            },
            Self::Poly(state) => DigestReport::poly(state),
        }
    }
}

/// A finished digest, ready to print.
#[derive(Debug, Serialize)]
pub struct DigestReport {
    /// `"fnv"` or `"poly"`.
    pub algorithm: &'static str,
    /// The 16-character hex rendering.
    pub digest: String,
    /// Raw accumulator (the `add` component for the polynomial hash).
    pub add: u64,
    /// `PRIME^length`, polynomial hash only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mult: Option<u64>,
    /// The input this digest belongs to, when printing several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl DigestReport {
    /// Report for a polynomial state.
    pub fn poly(state: &PolyHashState) -> Self {
        Self {
            algorithm: "poly",
            digest: state.hex_digest(),
            add: state.add(),
            mult: Some(state.mult()),
            input: None,
        }
    }

    /// Attaches the input label.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Renders one output line (without the trailing newline).
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        let value = match format {
            OutputFormat::Hex => self.digest.clone(),
            OutputFormat::Decimal => self.add.to_string(),
            OutputFormat::Json => return serde_json::to_string(self),
        };
        Ok(match &self.input {
            Some(input) => format!("{value}  {input}"),
            None => value,
        })
    }
}
