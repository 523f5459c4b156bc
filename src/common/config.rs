//! Configuration constants for the simulator.

/// Number of buckets in a [`HashIndex`](crate::collections::HashIndex)
/// created without an explicit bucket count.
///
/// The index never rehashes, so this value is fixed for the lifetime of
/// the map. A small prime keeps the chains evenly spread for the short
/// address tokens found in workload files.
pub const DEFAULT_BUCKET_COUNT: usize = 7;

/// Smallest cache capacity the command-line driver accepts.
pub const MIN_CACHE_CAPACITY: usize = 1;

/// Largest cache capacity the command-line driver accepts.
///
/// The policies themselves accept any positive capacity; this bound only
/// applies to interactive and flag-based selection in the binary.
pub const MAX_CACHE_CAPACITY: usize = 256;
