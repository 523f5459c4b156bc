//! Simulation driver layer.
//!
//! Everything here sits on the caller side of the policy interface: it only
//! passes addresses in and reads outcomes back.
//!
//! # Components
//! - [`Workload`] - whitespace-tokenized access sequence
//! - [`Simulator`] - replays a workload through a [`Cache`](crate::Cache)
//! - [`SimulationStats`] - hit/miss/eviction counters

mod simulator;
mod stats;
mod workload;

pub use simulator::{AccessRecord, AccessTrace, SimulationReport, Simulator};
pub use stats::SimulationStats;
pub use workload::Workload;
