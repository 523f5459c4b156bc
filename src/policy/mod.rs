//! Eviction policy implementations.
//!
//! Every policy answers the same questions (how big, how full, who goes
//! next) and accepts one access at a time:
//! - [`FifoCache`] - evicts in arrival order, never reorders on a hit
//! - [`LruCache`] - evicts the least recently used address
//! - [`LfuCache`] - evicts the least frequently used address, LRU among ties
//!
//! [`Cache`] is the closed set of the three, selected by [`PolicyKind`].

mod fifo;
mod lfu;
mod lru;

use std::fmt;
use std::str::FromStr;

use crate::common::{Address, Error, Result};

pub use fifo::FifoCache;
pub use lfu::{Block, LfuCache};
pub use lru::LruCache;

/// Capability set shared by all replacement policies.
pub trait EvictionPolicy {
    /// Maximum number of addresses the cache holds.
    fn capacity(&self) -> usize;

    /// Number of addresses currently cached.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Address that would be evicted if the next access misses.
    ///
    /// `None` while the cache still has room: a miss would not evict.
    fn next_victim(&self) -> Option<&Address>;

    /// Record an access to `addr`.
    ///
    /// Returns `true` on a hit. On a miss the address is loaded, evicting
    /// [`next_victim`](Self::next_victim) first if the cache is full.
    fn access(&mut self, addr: &Address) -> bool;

    /// Parse `token` as an address and access it.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `token` is not a valid address.
    fn access_token(&mut self, token: &str) -> Result<bool> {
        let addr = Address::new(token)?;
        Ok(self.access(&addr))
    }
}

/// Reject a zero capacity.
fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(Error::invalid_argument("cache capacity must be positive"));
    }
    Ok(())
}

/// Which replacement policy to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Lfu,
}

impl PolicyKind {
    /// All policies, in menu order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Lfu];

    /// Policy for a 1-based menu option (`1` FIFO, `2` LRU, `3` LFU).
    pub fn from_option(option: u32) -> Option<Self> {
        match option {
            1 => Some(PolicyKind::Fifo),
            2 => Some(PolicyKind::Lru),
            3 => Some(PolicyKind::Lfu),
            _ => None,
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Lfu => "LFU",
        };
        f.write_str(name)
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" | "1" => Ok(PolicyKind::Fifo),
            "lru" | "2" => Ok(PolicyKind::Lru),
            "lfu" | "3" => Ok(PolicyKind::Lfu),
            other => Err(Error::invalid_argument(format!(
                "unknown policy {:?} (expected fifo, lru or lfu)",
                other
            ))),
        }
    }
}

/// One of the three replacement policies.
///
/// # Example
/// ```
/// use cachesim::{Address, Cache, EvictionPolicy, PolicyKind};
///
/// let mut cache = Cache::new(PolicyKind::Lru, 2).unwrap();
/// let hits: Vec<bool> = ["a", "b", "a", "c"]
///     .iter()
///     .map(|t| cache.access(&Address::new(*t).unwrap()))
///     .collect();
/// assert_eq!(hits, vec![false, false, true, false]);
/// assert_eq!(cache.to_string(), "a c");
/// ```
#[derive(Debug, Clone)]
pub enum Cache {
    Fifo(FifoCache),
    Lru(LruCache),
    Lfu(LfuCache),
}

impl Cache {
    /// Build an empty cache of the given kind.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `capacity` is 0.
    pub fn new(kind: PolicyKind, capacity: usize) -> Result<Self> {
        Ok(match kind {
            PolicyKind::Fifo => Cache::Fifo(FifoCache::new(capacity)?),
            PolicyKind::Lru => Cache::Lru(LruCache::new(capacity)?),
            PolicyKind::Lfu => Cache::Lfu(LfuCache::new(capacity)?),
        })
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Cache::Fifo(_) => PolicyKind::Fifo,
            Cache::Lru(_) => PolicyKind::Lru,
            Cache::Lfu(_) => PolicyKind::Lfu,
        }
    }

    fn policy(&self) -> &dyn EvictionPolicy {
        match self {
            Cache::Fifo(c) => c,
            Cache::Lru(c) => c,
            Cache::Lfu(c) => c,
        }
    }

    fn policy_mut(&mut self) -> &mut dyn EvictionPolicy {
        match self {
            Cache::Fifo(c) => c,
            Cache::Lru(c) => c,
            Cache::Lfu(c) => c,
        }
    }
}

impl EvictionPolicy for Cache {
    fn capacity(&self) -> usize {
        self.policy().capacity()
    }

    fn len(&self) -> usize {
        self.policy().len()
    }

    fn next_victim(&self) -> Option<&Address> {
        self.policy().next_victim()
    }

    fn access(&mut self, addr: &Address) -> bool {
        self.policy_mut().access(addr)
    }
}

/// Cache contents in eviction order, leftmost goes first.
impl fmt::Display for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cache::Fifo(c) => fmt::Display::fmt(c, f),
            Cache::Lru(c) => fmt::Display::fmt(c, f),
            Cache::Lfu(c) => fmt::Display::fmt(c, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LRU".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!("3".parse::<PolicyKind>().unwrap(), PolicyKind::Lfu);
        assert!("clock".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_policy_kind_from_option() {
        assert_eq!(PolicyKind::from_option(1), Some(PolicyKind::Fifo));
        assert_eq!(PolicyKind::from_option(3), Some(PolicyKind::Lfu));
        assert_eq!(PolicyKind::from_option(0), None);
        assert_eq!(PolicyKind::from_option(4), None);
    }

    #[test]
    fn test_cache_new_rejects_zero_capacity() {
        for kind in PolicyKind::ALL {
            assert!(matches!(
                Cache::new(kind, 0),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_cache_dispatch() {
        for kind in PolicyKind::ALL {
            let mut cache = Cache::new(kind, 3).unwrap();
            assert_eq!(cache.kind(), kind);
            assert_eq!(cache.capacity(), 3);
            assert!(cache.is_empty());
            assert!(!cache.access_token("a").unwrap());
            assert!(cache.access_token("a").unwrap());
            assert_eq!(cache.len(), 1);
            assert!(!cache.is_full());
            assert_eq!(cache.next_victim(), None);
        }
    }

    #[test]
    fn test_access_token_rejects_empty() {
        let mut cache = Cache::new(PolicyKind::Fifo, 1).unwrap();
        assert!(matches!(
            cache.access_token(""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(cache.is_empty());
    }
}
