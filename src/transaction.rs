//! The transfer record carried by each block.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single transfer of funds from `source` to `target`.
///
/// An empty source marks a deposit, funds entering the system from
/// nowhere. The amount is signed so that a negative value can be
/// represented and then rejected during verification, rather than
/// silently wrapping at a type boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    source: String,
    target: String,
    amount: i32,
}

impl Transaction {
    pub fn new(source: impl Into<String>, target: impl Into<String>, amount: i32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            amount,
        }
    }

    /// A transfer with no source: `amount` is minted for `target`.
    pub fn deposit(target: impl Into<String>, amount: i32) -> Self {
        Self::new("", target, amount)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// True when the funds come from nowhere (empty source).
    pub fn is_deposit(&self) -> bool {
        self.source.is_empty()
    }

    /// Canonical digest input: source bytes, target bytes, then the
    /// amount as four big-endian bytes.
    ///
    /// The strings are written raw, with no length prefix or separator.
    /// The layout is part of every block hash, so it must never change.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.source.len() + self.target.len() + 4);
        bytes.extend_from_slice(self.source.as_bytes());
        bytes.extend_from_slice(self.target.as_bytes());
        bytes.extend_from_slice(&self.amount.to_be_bytes());
        bytes
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[source: {}, target: {}, amount: {}]",
            self.source, self.target, self.amount
        )
    }
}
