//! Error types for ledger operations.

use thiserror::Error;

/// Top-level error type for append and verification failures.
///
/// Every variant names the block it was detected at, so a failed
/// chain audit points straight at the first bad block.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("block {number} does not link to the previous block's hash")]
    InvalidLinkage { number: u32 },

    #[error("block {number} stores a hash that does not match its contents")]
    HashMismatch { number: u32 },

    #[error("block {number} has a hash that fails the proof-of-work target")]
    HashInvalid { number: u32 },

    #[error("block {number} carries a negative amount ({amount})")]
    NegativeAmount { number: u32, amount: i32 },

    #[error("block {number} overdraws {user} (balance would be {balance})")]
    InsufficientBalance {
        number: u32,
        user: String,
        balance: i64,
    },
}

/// Result type alias using ChainError.
pub type Result<T> = std::result::Result<T, ChainError>;
