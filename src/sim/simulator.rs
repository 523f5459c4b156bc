//! Step-by-step cache simulation.
//!
//! The [`Simulator`] feeds addresses one at a time into a [`Cache`] and
//! reports what happened after each access. In detailed mode it also keeps
//! two address-to-count records, one for every access and one for hits.
//! The cache itself never sees those records.

use std::fmt;

use tracing::{debug, info};

use crate::collections::{crc32_hash, HashIndex};
use crate::common::{Address, Result};
use crate::policy::{Cache, EvictionPolicy, PolicyKind};
use crate::sim::{SimulationStats, Workload};

/// Per-address access counter backed by a [`HashIndex`].
#[derive(Debug)]
pub struct AccessRecord {
    counts: HashIndex<Address, u64>,
}

impl AccessRecord {
    pub fn new() -> Self {
        Self {
            counts: HashIndex::with_hasher(crc32_hash::<Address>),
        }
    }

    /// Increment the counter for `addr`, starting from 1.
    pub fn record(&mut self, addr: &Address) {
        let count = self.counts.get(addr).copied().unwrap_or(0);
        self.counts.put(addr.clone(), count + 1);
    }

    /// Times `addr` was recorded, or `None` if never.
    pub fn count(&self, addr: &Address) -> Option<u64> {
        self.counts.get(addr).copied()
    }

    /// Number of distinct addresses recorded.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for AccessRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.counts, f)
    }
}

/// What one access did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTrace {
    /// Zero-based position in the workload.
    pub index: usize,
    pub address: Address,
    pub hit: bool,
    /// Address displaced by this access, if it missed on a full cache.
    pub evicted: Option<Address>,
    /// Cache contents after the access, in eviction order.
    pub contents: String,
    pub full: bool,
    pub next_victim: Option<Address>,
}

impl fmt::Display for AccessTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Access {}: {} - {}",
            self.index,
            self.address,
            if self.hit { "Hit" } else { "Miss" }
        )?;
        writeln!(f, "cache content after access: ")?;
        writeln!(f, "{}", self.contents)?;
        write!(
            f,
            "{}next to replace: ",
            if self.full {
                "cache full, "
            } else {
                "cache not full, "
            }
        )?;
        match &self.next_victim {
            Some(victim) => write!(f, "{}", victim),
            None => write!(f, "none"),
        }
    }
}

/// Access and hit records kept in detailed mode.
#[derive(Debug, Default)]
struct DetailedRecords {
    accesses: AccessRecord,
    hits: AccessRecord,
}

/// Drives a [`Cache`] through a workload.
///
/// # Example
/// ```
/// use cachesim::{PolicyKind, Simulator, Workload};
///
/// let workload = Workload::parse("a b a c").unwrap();
/// let mut sim = Simulator::new(PolicyKind::Fifo, 2, false).unwrap();
/// let report = sim.run(&workload, |_| {});
/// assert_eq!(report.stats.hits, 1);
/// assert_eq!(sim.cache().to_string(), "b c");
/// ```
#[derive(Debug)]
pub struct Simulator {
    cache: Cache,
    stats: SimulationStats,
    records: Option<DetailedRecords>,
    steps: usize,
}

impl Simulator {
    /// Create a simulator over an empty cache.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `capacity` is 0.
    pub fn new(kind: PolicyKind, capacity: usize, detailed: bool) -> Result<Self> {
        let cache = Cache::new(kind, capacity)?;
        info!(policy = %kind, capacity, detailed, "simulator ready");
        Ok(Self {
            cache,
            stats: SimulationStats::new(),
            records: detailed.then(DetailedRecords::default),
            steps: 0,
        })
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn is_detailed(&self) -> bool {
        self.records.is_some()
    }

    /// Per-address access counts (detailed mode only).
    pub fn access_record(&self) -> Option<&AccessRecord> {
        self.records.as_ref().map(|r| &r.accesses)
    }

    /// Per-address hit counts (detailed mode only).
    pub fn hit_record(&self) -> Option<&AccessRecord> {
        self.records.as_ref().map(|r| &r.hits)
    }

    /// Feed one address to the cache.
    pub fn step(&mut self, addr: &Address) -> AccessTrace {
        let candidate = self.cache.next_victim().cloned();

        if let Some(records) = self.records.as_mut() {
            records.accesses.record(addr);
        }

        let hit = self.cache.access(addr);
        let evicted = if hit { None } else { candidate };

        if hit {
            self.stats.record_hit();
            if let Some(records) = self.records.as_mut() {
                records.hits.record(addr);
            }
        } else {
            self.stats.record_miss(evicted.is_some());
        }

        let trace = AccessTrace {
            index: self.steps,
            address: addr.clone(),
            hit,
            evicted,
            contents: self.cache.to_string(),
            full: self.cache.is_full(),
            next_victim: self.cache.next_victim().cloned(),
        };
        self.steps += 1;
        trace
    }

    /// Replay `workload`, handing each trace to `on_step`.
    pub fn run<F>(&mut self, workload: &Workload, mut on_step: F) -> SimulationReport
    where
        F: FnMut(&AccessTrace),
    {
        for addr in workload {
            let trace = self.step(addr);
            on_step(&trace);
        }
        debug!(stats = %self.stats, "simulation finished");
        self.report()
    }

    /// Summary of everything simulated so far.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            policy: self.cache.kind(),
            capacity: self.cache.capacity(),
            stats: self.stats,
            accesses: self.access_record().map(ToString::to_string),
            hits: self.hit_record().map(ToString::to_string),
        }
    }
}

/// Final outcome of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub policy: PolicyKind,
    pub capacity: usize,
    pub stats: SimulationStats,
    /// Rendered access record, detailed mode only.
    pub accesses: Option<String>,
    /// Rendered hit record, detailed mode only.
    pub hits: Option<String>,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hit Rate: {:.2}%", self.stats.hit_rate() * 100.0)?;
        if let Some(accesses) = &self.accesses {
            write!(f, "\nAccesses: {}", accesses)?;
        }
        if let Some(hits) = &self.hits {
            write!(f, "\nHits: {}", hits)?;
        }
        Ok(())
    }
}
