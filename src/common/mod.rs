//! Common types and utilities shared across the simulator.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The [`Address`] token type

mod address;
pub mod config;
pub mod error;

pub use address::Address;
pub use error::{Error, Result};
