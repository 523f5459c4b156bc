//! Hand-built containers behind the eviction policies.
//!
//! # Components
//! - [`Sequence`] - singly linked sequence with positional moves
//! - [`OrderedSequence`] - stable ascending sequence
//! - [`HashIndex`] - fixed-bucket hash map chained over [`Sequence`]
//!
//! All nodes live in an index-addressed slot arena, so splices relink
//! integer ids rather than references.

mod arena;
mod hash_index;
mod ordered;
mod sequence;

pub use arena::NodeId;
pub use hash_index::{crc32_hash, HashIndex, KeyHasher};
pub use ordered::{Comparator, OrderedSequence};
pub use sequence::{IntoIter, Iter, Sequence};
