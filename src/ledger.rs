//! The ledger: an append-only chain of mined blocks plus the
//! verification and accounting that replay it.

use std::collections::{HashMap, HashSet};

use crate::block::Block;
use crate::chain::{Blocks, Chain};
use crate::error::{ChainError, Result};
use crate::hash::Hash;
use crate::pow::HashValidator;
use crate::transaction::Transaction;

/// An append-only ledger of hash-chained blocks.
///
/// The chain always holds at least its first block: block number zero,
/// with an empty previous hash and a placeholder transaction, mined on
/// construction against the supplied validator. Candidate blocks come
/// from [`Ledger::mine`] and are admitted by [`Ledger::append`]; the
/// chain itself is the single source of truth, so balances and users
/// are replayed from it on every query rather than cached.
///
/// A ledger is a single-writer structure with no interior locking;
/// wrap it in a mutex if it must be shared across threads.
#[derive(Debug)]
pub struct Ledger<V> {
    validator: V,
    chain: Chain,
}

impl<V: HashValidator> Ledger<V> {
    /// Create a ledger by mining its first block against `validator`.
    ///
    /// Does not return until that block's hash satisfies the validator,
    /// which for an unsatisfiable validator means never.
    pub fn new(validator: V) -> Self {
        let genesis = Block::mine(0, Transaction::new("", "", 0), Hash::empty(), &validator);
        Self {
            validator,
            chain: Chain::new(genesis),
        }
    }

    /// Rebuild a ledger around previously produced blocks, for example
    /// blocks reloaded by an external storage layer. Returns `None`
    /// for an empty list.
    ///
    /// Nothing is validated here: the blocks are linked exactly as
    /// given, and a later [`Ledger::verify`] is the audit that decides
    /// whether the reconstruction is trustworthy.
    pub fn restore(validator: V, blocks: Vec<Block>) -> Option<Self> {
        let mut blocks = blocks.into_iter();
        let mut chain = Chain::new(blocks.next()?);
        for block in blocks {
            chain.push(block);
        }
        Some(Self { validator, chain })
    }

    /// Mine a block that would extend the current tail: the next block
    /// number, linked to the tail hash, carrying `transaction`.
    ///
    /// The ledger is not modified; appending the result is a separate
    /// decision.
    pub fn mine(&self, transaction: Transaction) -> Block {
        let tail = self.chain.tail();
        Block::mine(
            tail.number() + 1,
            transaction,
            tail.hash().clone(),
            &self.validator,
        )
    }

    /// Append `block` as the new tail.
    ///
    /// Three structural checks guard admission, each with its own
    /// failure: the block must link to the current tail
    /// ([`ChainError::InvalidLinkage`]), its stored hash must match its
    /// contents ([`ChainError::HashMismatch`]), and that hash must
    /// satisfy the validator ([`ChainError::HashInvalid`]). On failure
    /// the chain is untouched.
    ///
    /// Economic legality is a chain-wide property, not a per-block
    /// one, and is deliberately left to [`Ledger::verify`].
    pub fn append(&mut self, block: Block) -> Result<()> {
        if block.prev_hash() != self.chain.tail().hash() {
            return Err(ChainError::InvalidLinkage {
                number: block.number(),
            });
        }
        if *block.hash() != block.compute_hash() {
            return Err(ChainError::HashMismatch {
                number: block.number(),
            });
        }
        if !self.validator.is_valid(block.hash()) {
            return Err(ChainError::HashInvalid {
                number: block.number(),
            });
        }
        self.chain.push(block);
        Ok(())
    }

    /// Number of blocks in the chain, first block included.
    pub fn size(&self) -> usize {
        self.chain.len()
    }

    /// Hash of the most recent block.
    pub fn tail_hash(&self) -> Hash {
        self.chain.tail().hash().clone()
    }

    /// Remove the most recent block. Returns false, and removes
    /// nothing, when only the first block remains. Costs a scan from
    /// the head; the forward-only chain keeps no back pointers.
    pub fn remove_tail(&mut self) -> bool {
        self.chain.remove_tail().is_some()
    }

    /// Walk the whole chain once and report the first violation, in
    /// block order.
    ///
    /// Per block, in order: the amount must not be negative; a
    /// non-empty source is debited and must not drop below zero; the
    /// target is credited; the previous-hash link must match (skipped
    /// for the first block); the stored hash must match the recomputed
    /// one; and the hash must satisfy the validator. The balance map
    /// lives only for the duration of this call.
    pub fn verify(&self) -> Result<()> {
        let mut balances: HashMap<&str, i64> = HashMap::new();
        let mut prev: Option<&Block> = None;
        for block in self.blocks() {
            let tx = block.transaction();
            if tx.amount() < 0 {
                return Err(ChainError::NegativeAmount {
                    number: block.number(),
                    amount: tx.amount(),
                });
            }
            if !tx.source().is_empty() {
                let balance = balances.entry(tx.source()).or_insert(0);
                *balance -= i64::from(tx.amount());
                if *balance < 0 {
                    return Err(ChainError::InsufficientBalance {
                        number: block.number(),
                        user: tx.source().to_string(),
                        balance: *balance,
                    });
                }
            }
            *balances.entry(tx.target()).or_insert(0) += i64::from(tx.amount());

            if let Some(prev) = prev {
                if block.prev_hash() != prev.hash() {
                    return Err(ChainError::InvalidLinkage {
                        number: block.number(),
                    });
                }
            }
            if *block.hash() != block.compute_hash() {
                return Err(ChainError::HashMismatch {
                    number: block.number(),
                });
            }
            if !self.validator.is_valid(block.hash()) {
                return Err(ChainError::HashInvalid {
                    number: block.number(),
                });
            }
            prev = Some(block);
        }
        Ok(())
    }

    /// Whether [`Ledger::verify`] passes, without the detail.
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Every user that ever received funds: the distinct non-empty
    /// targets across the chain. An address that only ever appears as
    /// a source is not reported.
    pub fn users(&self) -> HashSet<String> {
        self.transactions()
            .filter(|tx| !tx.target().is_empty())
            .map(|tx| tx.target().to_string())
            .collect()
    }

    /// Net funds for `user`: every transaction is replayed in chain
    /// order, crediting where `user` is the target and debiting where
    /// it is the source. A user the chain has never seen nets zero.
    pub fn balance(&self, user: &str) -> i64 {
        let mut total = 0i64;
        for tx in self.transactions() {
            if tx.target() == user {
                total += i64::from(tx.amount());
            }
            if tx.source() == user {
                total -= i64::from(tx.amount());
            }
        }
        total
    }

    /// Iterate the blocks first to last, the first block included.
    /// Every call walks the chain as it is now, from the start.
    pub fn blocks(&self) -> Blocks<'_> {
        self.chain.iter()
    }

    /// Iterate the transactions in chain order, skipping the first
    /// block's placeholder. Fresh and independent on every call.
    pub fn transactions(&self) -> Transactions<'_> {
        let mut blocks = self.chain.iter();
        blocks.next();
        Transactions { blocks }
    }
}

/// Forward iterator over a ledger's transactions, oldest first, with
/// the first block's placeholder skipped.
pub struct Transactions<'a> {
    blocks: Blocks<'a>,
}

impl<'a> Iterator for Transactions<'a> {
    type Item = &'a Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        self.blocks.next().map(Block::transaction)
    }
}

impl<'a, V: HashValidator> IntoIterator for &'a Ledger<V> {
    type Item = &'a Transaction;
    type IntoIter = Transactions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions()
    }
}
