//! Fixed-size hash map with separate chaining.
//!
//! Each bucket is a [`Sequence`] of key/value pairs. Pairs compare equal
//! when their keys are equal, whatever their values, so a chain lookup is
//! an ordinary by-value search on the bucket's sequence.
//!
//! The bucket count is chosen at construction and never changes: there is
//! no rehashing. With a reasonable hash function, operations are O(1) on
//! average; if every key lands in one bucket they degrade to O(n).

use std::fmt;

use crate::collections::Sequence;
use crate::common::config::DEFAULT_BUCKET_COUNT;
use crate::common::{Error, Result};

/// Caller-supplied hash function for keys.
pub type KeyHasher<K> = fn(&K) -> u64;

/// CRC32 of a key's text.
///
/// Deterministic across runs and platforms, so bucket layouts (and
/// therefore [`HashIndex::to_debug_string`]) are reproducible.
///
/// # Example
/// ```
/// use cachesim::collections::{crc32_hash, HashIndex};
///
/// let mut counts: HashIndex<String, u64> = HashIndex::with_hasher(crc32_hash::<String>);
/// counts.put("a".to_string(), 1);
/// assert_eq!(counts.get(&"a".to_string()), Some(&1));
/// ```
pub fn crc32_hash<K: AsRef<str>>(key: &K) -> u64 {
    u64::from(crc32fast::hash(key.as_ref().as_bytes()))
}

/// One chain entry. Equality looks at the key only.
#[derive(Debug, Clone)]
struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K: PartialEq, V> PartialEq for Pair<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.key, self.value)
    }
}

/// Hash map with a fixed bucket array and chained buckets.
///
/// # Invariants
/// - every present key has exactly one entry across all chains
/// - `len()` equals the total number of chain entries
pub struct HashIndex<K, V> {
    buckets: Vec<Sequence<Pair<K, V>>>,
    size: usize,
    hasher: KeyHasher<K>,
}

impl<K, V> HashIndex<K, V> {
    /// Create an index with `bucket_count` chains.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `bucket_count` is 0.
    pub fn new(bucket_count: usize, hasher: KeyHasher<K>) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::invalid_argument("bucket count must be positive"));
        }
        Ok(Self {
            buckets: (0..bucket_count).map(|_| Sequence::new()).collect(),
            size: 0,
            hasher,
        })
    }

    /// Create an index with [`DEFAULT_BUCKET_COUNT`] chains.
    pub fn with_hasher(hasher: KeyHasher<K>) -> Self {
        Self {
            buckets: (0..DEFAULT_BUCKET_COUNT).map(|_| Sequence::new()).collect(),
            size: 0,
            hasher,
        }
    }

    /// Number of key/value mappings.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets (fixed for the lifetime of the index).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// All mappings, bucket by bucket, each chain in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|pair| (&pair.key, &pair.value)))
    }

    #[inline]
    fn bucket_of(&self, key: &K) -> usize {
        // bucket_count > 0 is guaranteed by construction
        ((self.hasher)(key) % self.buckets.len() as u64) as usize
    }
}

impl<K: PartialEq, V> HashIndex<K, V> {
    /// Map `key` to `value`.
    ///
    /// An existing entry is updated in place and keeps its chain position;
    /// its previous value is returned. A new key is appended to the end of
    /// its bucket's chain.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let bucket = self.bucket_of(&key);
        let chain = &mut self.buckets[bucket];
        let pair = Pair { key, value };

        if let Some(id) = chain.find(&pair) {
            if let Some(existing) = chain.get_mut(id) {
                return Some(std::mem::replace(&mut existing.value, pair.value));
            }
        }

        chain.insert_back(pair);
        self.size += 1;
        None
    }

    /// Value mapped to `key`, or `None` if absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        let chain = &self.buckets[self.bucket_of(key)];
        chain
            .find_by(|pair| pair.key == *key)
            .and_then(|id| chain.get(id))
            .map(|pair| &pair.value)
    }

    /// Mutable access to the value mapped to `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let bucket = self.bucket_of(key);
        let chain = &mut self.buckets[bucket];
        let id = chain.find_by(|pair| pair.key == *key)?;
        chain.get_mut(id).map(|pair| &mut pair.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning the value it was mapped to.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let bucket = self.bucket_of(key);
        let pair = self.buckets[bucket].remove_by(|pair| pair.key == *key)?;
        self.size -= 1;
        Some(pair.value)
    }
}

impl<K: fmt::Display, V: fmt::Display> HashIndex<K, V> {
    /// Every bucket, empty ones included: `{[<a:1> <b:2>],[],...}`.
    pub fn to_debug_string(&self) -> String {
        let buckets: Vec<String> = self
            .buckets
            .iter()
            .map(|chain| format!("[{}]", chain))
            .collect();
        format!("{{{}}}", buckets.join(","))
    }
}

/// Non-empty chains only, comma-separated: `<a:1> <b:2>,<c:3>`.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for HashIndex<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for chain in self.buckets.iter().filter(|chain| !chain.is_empty()) {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", chain)?;
            first = false;
        }
        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for HashIndex<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
