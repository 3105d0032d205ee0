//! The eviction policies the simulator knows.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;
use crate::sim::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};

/// Which victim-selection rule a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-In-First-Out: evict in arrival order.
    Fifo,
    /// Least-Recently-Used: evict the page referenced longest ago.
    Lru,
    /// Belady's clairvoyant policy: evict the page needed furthest ahead.
    Optimal,
}

impl Policy {
    /// Every policy, in reporting order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// Fresh replacer state for a frame set of `capacity` slots.
    pub(crate) fn replacer(self, capacity: usize) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new(capacity)),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Optimal => Box::new(OptimalReplacer::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" | "belady" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
