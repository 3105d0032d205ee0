//! Hit and fault accounting for a simulation run.

use std::fmt;

/// Aggregate outcome counts of one run.
///
/// `hits + faults` always equals the length of the reference stream the
/// run consumed.
///
/// # Example
/// ```
/// use pagesim::FaultStats;
///
/// let mut stats = FaultStats::new();
/// stats.record_fault();
/// stats.record_hit();
/// assert_eq!(stats.total(), 2);
/// assert_eq!(stats.hit_ratio(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultStats {
    /// References found resident.
    pub hits: u64,

    /// References that had to be loaded.
    pub faults: u64,
}

impl FaultStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub fn record_fault(&mut self) {
        self.faults += 1;
    }

    /// Number of references processed.
    pub fn total(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit ratio (0.0 to 1.0), 0.0 before any reference.
    pub fn hit_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Miss ratio (0.0 to 1.0), 0.0 before any reference.
    pub fn miss_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.faults as f64 / total as f64,
        }
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hits: {}, Faults: {}, Hit Ratio: {:.2}, Miss Ratio: {:.2}",
            self.hits,
            self.faults,
            self.hit_ratio(),
            self.miss_ratio()
        )
    }
}
