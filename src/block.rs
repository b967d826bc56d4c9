//! Blocks and the nonce search that produces them.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::hash::Hash;
use crate::pow::HashValidator;
use crate::transaction::Transaction;

/// One ledger entry: a transaction bound to its predecessor by hash and
/// stamped with the nonce that made the block hash meet the work target.
///
/// Blocks are built through [`Block::mine`] or [`Block::from_parts`]
/// and never change afterwards, so for any honestly built block the
/// stored hash equals [`Block::compute_hash`]. A block that breaks that
/// equality (possible after deserializing tampered data) is exactly
/// what verification exists to catch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    number: u32,
    transaction: Transaction,
    prev_hash: Hash,
    nonce: u64,
    hash: Hash,
}

impl Block {
    /// Mine a block: try nonces from zero upwards until the digest over
    /// `(number, transaction, prev_hash, nonce)` satisfies `validator`.
    ///
    /// The search is sequential, so the result is a pure function of
    /// the inputs and always carries the smallest satisfying nonce.
    /// Does not return until a nonce is found; with an unsatisfiable
    /// validator that is never.
    pub fn mine(
        number: u32,
        transaction: Transaction,
        prev_hash: Hash,
        validator: &impl HashValidator,
    ) -> Self {
        let mut nonce = 0u64;
        loop {
            let hash = digest_fields(number, &transaction, &prev_hash, nonce);
            if validator.is_valid(&hash) {
                debug!("mined block {} with nonce {} and hash {}", number, nonce, hash);
                return Self {
                    number,
                    transaction,
                    prev_hash,
                    nonce,
                    hash,
                };
            }
            nonce += 1;
        }
    }

    /// Rebuild a block whose nonce is already known, for example one
    /// reloaded from an external store. No search happens; the hash is
    /// computed once from the given fields.
    pub fn from_parts(number: u32, transaction: Transaction, prev_hash: Hash, nonce: u64) -> Self {
        let hash = digest_fields(number, &transaction, &prev_hash, nonce);
        Self {
            number,
            transaction,
            prev_hash,
            nonce,
            hash,
        }
    }

    /// Recompute the digest from the current field values. A result
    /// that differs from [`Block::hash`] is the primary tamper signal.
    pub fn compute_hash(&self) -> Hash {
        digest_fields(self.number, &self.transaction, &self.prev_hash, self.nonce)
    }

    /// Position in the chain, starting at zero.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Hash of the block this one extends; empty for a first block.
    pub fn prev_hash(&self) -> &Hash {
        &self.prev_hash
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// The digest recorded when the block was built.
    pub fn hash(&self) -> &Hash {
        &self.hash
    }
}

/// SHA-256 over the canonical field layout: block number as four
/// big-endian bytes, transaction bytes, previous hash bytes, nonce as
/// eight big-endian bytes.
fn digest_fields(number: u32, transaction: &Transaction, prev_hash: &Hash, nonce: u64) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(number.to_be_bytes());
    hasher.update(transaction.to_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(nonce.to_be_bytes());
    Hash::new(hasher.finalize().as_slice())
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block {} (transaction: {}, nonce: {}, prev: {}, hash: {})",
            self.number, self.transaction, self.nonce, self.prev_hash, self.hash
        )
    }
}
