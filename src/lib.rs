//! An in-memory, append-only ledger of hash-chained blocks.
//!
//! Each block carries one transaction and is admitted only when its
//! SHA-256 digest satisfies a caller-supplied proof-of-work target.
//! The [`Ledger`] owns the chain: it mines its first block up front,
//! produces candidates with [`Ledger::mine`], admits them with
//! [`Ledger::append`], and replays the chain on demand to audit
//! integrity and account balances.
//!
//! ```
//! use powledger::{LeadingZeroBytes, Ledger, Transaction};
//!
//! let mut ledger = Ledger::new(LeadingZeroBytes(1));
//! let block = ledger.mine(Transaction::deposit("alice", 100));
//! ledger.append(block)?;
//!
//! assert_eq!(ledger.balance("alice"), 100);
//! assert!(ledger.is_valid());
//! # Ok::<(), powledger::ChainError>(())
//! ```

#![forbid(unsafe_code)]

pub mod block;
mod chain;
pub mod error;
pub mod hash;
pub mod ledger;
pub mod pow;
pub mod transaction;

pub use block::Block;
pub use chain::Blocks;
pub use error::{ChainError, Result};
pub use hash::Hash;
pub use ledger::{Ledger, Transactions};
pub use pow::{HashValidator, LeadingZeroBits, LeadingZeroBytes};
pub use transaction::Transaction;
