//! Simulation statistics tracking.

use std::fmt;

/// Counters accumulated over one simulation run.
///
/// # Example
/// ```
/// use cachesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_hit();
/// stats.record_miss(false);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Accesses that found their address resident.
    pub hits: u64,

    /// Accesses that had to load their address.
    pub misses: u64,

    /// Misses that displaced a resident address.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Count a miss, and an eviction if one happened.
    pub fn record_miss(&mut self, evicted: bool) {
        self.misses += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Total accesses seen.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate (0.0 to 1.0). Zero when nothing was accessed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SimulationStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_increment() {
        let mut stats = SimulationStats::new();
        for _ in 0..7 {
            stats.record_hit();
        }
        stats.record_miss(false);
        stats.record_miss(true);
        stats.record_miss(true);

        assert_eq!(stats.accesses(), 10);
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SimulationStats::new();
        stats.record_hit();
        stats.record_miss(true);

        stats.reset();

        assert_eq!(stats, SimulationStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = SimulationStats {
            hits: 80,
            misses: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("misses: 20"));
        assert!(display.contains("evictions: 5"));
        assert!(display.contains("80.00%"));
    }
}
