//! Workload ingestion.
//!
//! A workload is a text source holding one address per whitespace-separated
//! token. Line structure carries no meaning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::collections::{Iter, Sequence};
use crate::common::{Address, Result};

/// A finite, pre-materialized sequence of accesses.
#[derive(Debug, Clone, Default)]
pub struct Workload {
    addresses: Sequence<Address>,
}

impl Workload {
    /// Tokenize a workload from any buffered reader.
    ///
    /// # Errors
    /// `Error::Io` if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut addresses = Sequence::new();
        for line in reader.lines() {
            for token in line?.split_whitespace() {
                addresses.insert_back(Address::new(token)?);
            }
        }
        debug!(accesses = addresses.len(), "loaded workload");
        Ok(Self { addresses })
    }

    /// Tokenize the workload file at `path`.
    ///
    /// # Errors
    /// `Error::Io` if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Tokenize a workload held in memory.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Number of accesses.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Accesses in order.
    pub fn iter(&self) -> Iter<'_, Address> {
        self.addresses.iter()
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a Address;
    type IntoIter = Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Address> for Workload {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self {
            addresses: iter.into_iter().collect(),
        }
    }
}
