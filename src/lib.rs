//! cachesim - A cache replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            cachesim                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Driver (sim/, main.rs)                   │   │
//! │  │     Workload → Simulator → AccessTrace / Report          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Eviction Policies (policy/)                 │   │
//! │  │             FifoCache | LruCache | LfuCache              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Containers (collections/)                  │   │
//! │  │     Sequence  ←  OrderedSequence      HashIndex          │   │
//! │  │            (slot arena + forward links)                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Address, Error, config)
//! - [`collections`] - Linked sequence, ordered sequence, hash index
//! - [`policy`] - FIFO, LRU and LFU eviction policies
//! - [`sim`] - Workload ingestion and step-by-step simulation
//!
//! # Quick Start
//! ```
//! use cachesim::{Address, EvictionPolicy, LfuCache};
//!
//! let mut cache = LfuCache::new(2).unwrap();
//! for token in ["a", "b", "a", "c"] {
//!     cache.access(&Address::new(token).unwrap());
//! }
//! assert_eq!(cache.to_string(), "<c,1> <a,2>");
//! assert_eq!(cache.next_victim().map(Address::as_str), Some("c"));
//! ```

pub mod collections;
pub mod common;
pub mod policy;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Address, Error, Result};

pub use collections::{HashIndex, OrderedSequence, Sequence};
pub use policy::{Cache, EvictionPolicy, FifoCache, LfuCache, LruCache, PolicyKind};
pub use sim::{SimulationReport, SimulationStats, Simulator, Workload};
