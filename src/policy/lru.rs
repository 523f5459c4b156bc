//! LRU (Least Recently Used) replacement policy.

use std::fmt;

use tracing::{debug, trace};

use crate::collections::Sequence;
use crate::common::{Address, Result};
use crate::policy::{check_capacity, EvictionPolicy};

/// Evicts the address that has gone longest without an access.
///
/// Residents are kept least-recently-used first. A hit splices the
/// address to the back of the sequence; a miss evicts the front.
#[derive(Debug, Clone)]
pub struct LruCache {
    capacity: usize,

    /// Resident addresses, LRU first, MRU last.
    storage: Sequence<Address>,
}

impl LruCache {
    /// Create an empty LRU cache.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        debug!(capacity, "created LRU cache");
        Ok(Self {
            capacity,
            storage: Sequence::new(),
        })
    }
}

impl EvictionPolicy for LruCache {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.storage.len()
    }

    fn next_victim(&self) -> Option<&Address> {
        if self.is_full() {
            self.storage.first()
        } else {
            None
        }
    }

    fn access(&mut self, addr: &Address) -> bool {
        // move_to_back reports false for the current MRU, which is still a hit
        if self.storage.last() == Some(addr) || self.storage.move_to_back(addr) {
            trace!(%addr, "LRU hit");
            return true;
        }

        if self.is_full() {
            if let Some(victim) = self.storage.remove_front() {
                debug!(%victim, %addr, "LRU evict");
            }
        }
        self.storage.insert_back(addr.clone());
        trace!(%addr, "LRU miss");
        false
    }
}

/// LRU to MRU.
impl fmt::Display for LruCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage, f)
    }
}
