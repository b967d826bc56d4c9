//! Message digests with value equality and hex rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable sequence of digest bytes.
///
/// The length is not fixed: mined blocks carry 32-byte SHA-256 digests,
/// while a freshly created chain uses the zero-length hash as its
/// "no previous block" marker.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash(Vec<u8>);

impl Hash {
    /// Create a hash by copying `bytes`. Zero-length input is legal.
    pub fn new(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// The zero-length hash, used as the previous hash of a first block.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of bytes in the digest.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The byte at `index`.
    ///
    /// Panics when `index` is out of range; asking for a byte past the
    /// end is a caller bug, not a recoverable condition.
    pub fn byte_at(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Borrow the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Owned copy of the digest bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// Uppercase hex, two digits per byte.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}
