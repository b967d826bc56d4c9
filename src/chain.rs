//! The singly linked spine of the ledger.
//!
//! Nodes own their block and the link to the next node. There are no
//! back pointers, so finding the tail walks from the head; that linear
//! scan is the accepted cost of a forward-only structure built for an
//! append-mostly log.

use std::fmt;

use crate::block::Block;

struct Node {
    block: Block,
    next: Option<Box<Node>>,
}

/// A non-empty forward list of blocks. The first block never leaves;
/// pushes go to the tail and only the tail can be removed.
pub(crate) struct Chain {
    head: Box<Node>,
    len: usize,
}

impl Chain {
    pub(crate) fn new(genesis: Block) -> Self {
        Self {
            head: Box::new(Node {
                block: genesis,
                next: None,
            }),
            len: 1,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The most recently pushed block. Walks the list.
    pub(crate) fn tail(&self) -> &Block {
        let mut node = &*self.head;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        &node.block
    }

    pub(crate) fn push(&mut self, block: Block) {
        let mut link = &mut self.head.next;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { block, next: None }));
        self.len += 1;
    }

    /// Unlink and return the tail block, or `None` when only the head
    /// remains. Walks to the second-to-last node to cut the link.
    pub(crate) fn remove_tail(&mut self) -> Option<Block> {
        if self.len == 1 {
            return None;
        }
        let mut node = &mut *self.head;
        for _ in 0..self.len - 2 {
            node = node.next.as_deref_mut()?;
        }
        let tail = node.next.take()?;
        self.len -= 1;
        Some(tail.block)
    }

    pub(crate) fn iter(&self) -> Blocks<'_> {
        Blocks {
            next: Some(&self.head),
        }
    }
}

// Unlink front to back so dropping a long chain cannot recurse off
// the stack.
impl Drop for Chain {
    fn drop(&mut self) {
        let mut link = self.head.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Forward iterator over the blocks of a ledger, first to last.
///
/// Each call to [`crate::Ledger::blocks`] produces a fresh, independent
/// instance positioned at the head.
pub struct Blocks<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.block)
    }
}
