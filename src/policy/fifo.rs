//! FIFO (First-In-First-Out) replacement policy.

use std::fmt;

use tracing::{debug, trace};

use crate::collections::Sequence;
use crate::common::{Address, Result};
use crate::policy::{check_capacity, EvictionPolicy};

/// Evicts addresses in the order they were loaded.
///
/// A hit does not change the order: the oldest resident is always the
/// next victim, however often it has been accessed since.
#[derive(Debug, Clone)]
pub struct FifoCache {
    capacity: usize,

    /// Resident addresses, oldest first.
    storage: Sequence<Address>,
}

impl FifoCache {
    /// Create an empty FIFO cache.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        debug!(capacity, "created FIFO cache");
        Ok(Self {
            capacity,
            storage: Sequence::new(),
        })
    }
}

impl EvictionPolicy for FifoCache {
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
        if self.storage.contains(addr) {
            trace!(%addr, "FIFO hit");
            return true;
        }

        if self.is_full() {
            if let Some(victim) = self.storage.remove_front() {
                debug!(%victim, %addr, "FIFO evict");
            }
        }
        self.storage.insert_back(addr.clone());
        trace!(%addr, "FIFO miss");
        false
    }
}

/// Oldest to newest.
impl fmt::Display for FifoCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage, f)
    }
}
