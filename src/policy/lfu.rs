//! LFU (Least Frequently Used) replacement policy.
//!
//! Residents live in an [`OrderedSequence`] ranked by access count. Because
//! the sequence inserts after existing equal-ranked entries, re-adding a
//! block after a hit puts it behind every block with the same count: among
//! equal counts the front is the least recently touched.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::collections::OrderedSequence;
use crate::common::{Address, Result};
use crate::policy::{check_capacity, EvictionPolicy};

/// A resident address and how many times it was accessed since loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    address: Address,
    count: u64,
}

impl Block {
    fn new(address: Address) -> Self {
        Self { address, count: 1 }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Accesses since the block was loaded (at least 1).
    pub fn count(&self) -> u64 {
        self.count
    }

    fn by_count(a: &Block, b: &Block) -> Ordering {
        a.count.cmp(&b.count)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.address, self.count)
    }
}

/// Evicts the least frequently used address, LRU among ties.
#[derive(Debug, Clone)]
pub struct LfuCache {
    capacity: usize,

    /// Ascending by count; equal counts ordered LRU to MRU.
    storage: OrderedSequence<Block>,
}

impl LfuCache {
    /// Create an empty LFU cache.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        debug!(capacity, "created LFU cache");
        Ok(Self {
            capacity,
            storage: OrderedSequence::with_comparator(Block::by_count),
        })
    }

    /// Access count of a resident address.
    pub fn count_of(&self, addr: &Address) -> Option<u64> {
        self.storage
            .find_by(|block| block.address == *addr)
            .and_then(|id| self.storage.get(id))
            .map(Block::count)
    }

    /// Resident blocks in eviction order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.storage.iter()
    }
}

impl EvictionPolicy for LfuCache {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.storage.len()
    }

    fn next_victim(&self) -> Option<&Address> {
        if self.is_full() {
            self.storage.first().map(Block::address)
        } else {
            None
        }
    }

    fn access(&mut self, addr: &Address) -> bool {
        // Re-rank by remove / bump / add; the count is never mutated in place
        if let Some(mut block) = self.storage.remove_by(|block| block.address == *addr) {
            block.count += 1;
            trace!(%addr, count = block.count, "LFU hit");
            self.storage.add(block);
            return true;
        }

        if self.is_full() {
            if let Some(victim) = self.storage.remove_front() {
                debug!(victim = %victim.address, count = victim.count, %addr, "LFU evict");
            }
        }
        self.storage.add(Block::new(addr.clone()));
        trace!(%addr, "LFU miss");
        false
    }
}

/// LFU to MFU, LRU to MRU within equal counts.
impl fmt::Display for LfuCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage, f)
    }
}
