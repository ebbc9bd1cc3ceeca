//! Fixed-width content fingerprints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of hex characters in a rendered [`Fingerprint`].
pub const HEX_WIDTH: usize = 16;

/// A 64-bit content fingerprint produced by one of the cxrt hashers.
///
/// Two values with the same `Fingerprint` are assumed to have identical content.
/// This is a checksum, not a cryptographic digest: it detects accidental change,
/// not adversarial collision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Wraps a raw accumulator value.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw accumulator value.
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    /// Renders the fingerprint as exactly 16 uppercase, zero-padded hex characters.
    ///
    /// The rendering is of the integer value, so it does not depend on the
    /// platform byte order.
    pub fn to_hex(self) -> String {
        format!("{:016X}", self.0)
    }
}

impl From<u64> for Fingerprint {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Fingerprint> for u64 {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:04X}..)", self.0 >> 48)
    }
}

/// Error returned when a string is not a valid rendered [`Fingerprint`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFingerprintError {
    /// The string does not have exactly [`HEX_WIDTH`] characters.
    #[error("fingerprint must be 16 hex characters, got {0}")]
    Length(usize),

    /// The string contains a character that is not a hex digit.
    #[error("invalid hex digit in fingerprint '{0}'")]
    Digit(String),
}

impl FromStr for Fingerprint {
    type Err = ParseFingerprintError;

    /// Parses a 16-character hex string. Lowercase digits are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HEX_WIDTH {
            return Err(ParseFingerprintError::Length(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseFingerprintError::Digit(s.to_string()));
        }
        u64::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| ParseFingerprintError::Digit(s.to_string()))
    }
}
