//! The step loop shared by every policy.
//!
//! The [`Simulator`] provides:
//! - One pass over the reference stream, left to right
//! - Hit/fault accounting
//! - A snapshot of the frame set after every reference
//! - Victim selection delegated to the policy's [`Replacer`]

use std::collections::HashSet;
use std::ops::RangeInclusive;

use tracing::{debug, info, trace};

use crate::common::config;
use crate::common::{ConfigError, PageId, Result};
use crate::sim::replacer::Replacer;
use crate::sim::{FaultStats, FrameSet, Policy, StepOutcome, StepRecord, Trace};

/// Result of one run: the trace and its totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub trace: Trace,
    pub stats: FaultStats,
}

impl Simulation {
    pub fn policy(&self) -> Policy {
        self.trace.policy()
    }

    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    pub fn faults(&self) -> u64 {
        self.stats.faults
    }
}

/// Drives one policy over one reference stream.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                        Simulator                         │
/// │  ┌──────────────┐   hit / insert   ┌──────────────────┐  │
/// │  │   FrameSet   │ ───────────────▶ │ Box<dyn Replacer>│  │
/// │  │ slots + table│ ◀─────────────── │ FIFO | LRU | OPT │  │
/// │  └──────────────┘    victim slot   └──────────────────┘  │
/// │          │ snapshot per step                             │
/// │          ▼                                               │
/// │  ┌──────────────┐  ┌──────────────┐                      │
/// │  │ Vec<Step-    │  │  FaultStats  │                      │
/// │  │   Record>    │  │ hits, faults │                      │
/// │  └──────────────┘  └──────────────┘                      │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// `run` consumes the simulator, so no state survives into another run.
///
/// # Usage
/// ```
/// use pagesim::{PageId, Policy, Simulator};
///
/// let refs = PageId::stream(&[1, 2, 1]);
/// let sim = Simulator::new(Policy::Lru, 2).unwrap().run(&refs).unwrap();
/// assert_eq!(sim.hits(), 1);
/// ```
#[derive(Debug)]
pub struct Simulator {
    policy: Policy,

    /// Resident pages.
    frames: FrameSet,

    /// Victim-selection rule for `policy`.
    replacer: Box<dyn Replacer>,

    stats: FaultStats,
}

impl Simulator {
    /// Create a simulator with an empty frame set of `capacity` slots.
    ///
    /// # Errors
    /// - `ConfigError::NonPositiveCapacity` if `capacity` is 0
    pub fn new(policy: Policy, capacity: usize) -> Result<Self> {
        if capacity < config::MIN_CAPACITY {
            return Err(ConfigError::NonPositiveCapacity(capacity as i64).into());
        }

        Ok(Self {
            policy,
            frames: FrameSet::new(capacity),
            replacer: policy.replacer(capacity),
            stats: FaultStats::new(),
        })
    }

    /// Process every reference and return the trace.
    ///
    /// # Errors
    /// - `ConfigError::EmptyReferences` if `references` is empty; nothing runs
    pub fn run(mut self, references: &[PageId]) -> Result<Simulation> {
        config::validate(references, self.frames.capacity())?;

        // Slots past the number of distinct pages can never be filled.
        let distinct = references.iter().collect::<HashSet<_>>().len();
        let slots = self.frames.capacity().min(distinct);

        let mut steps = Vec::with_capacity(references.len());
        for (step, &page) in references.iter().enumerate() {
            let outcome = self.step(step, page, &references[step + 1..]);
            steps.push(StepRecord {
                step,
                reference: page,
                frames: self.frames.snapshot(slots),
                outcome,
            });
        }

        info!(
            policy = %self.policy,
            capacity = self.frames.capacity(),
            references = references.len(),
            hits = self.stats.hits,
            faults = self.stats.faults,
            "simulation complete"
        );

        Ok(Simulation {
            trace: Trace::new(self.policy, self.frames.capacity(), slots, steps),
            stats: self.stats,
        })
    }

    /// Apply one reference to the frame set.
    fn step(&mut self, step: usize, page: PageId, future: &[PageId]) -> StepOutcome {
        if let Some(slot) = self.frames.slot_of(page) {
            self.stats.record_hit();
            self.replacer.record_access(page, step);
            trace!(step, %page, slot = slot.0, "hit");
            return StepOutcome::Hit { slot };
        }

        self.stats.record_fault();

        if !self.frames.is_full() {
            let slot = self.frames.push(page);
            self.replacer.record_insert(page, slot, step);
            debug!(step, %page, slot = slot.0, "fault, free slot");
            return StepOutcome::Fill { slot };
        }

        let slot = self.replacer.evict(&self.frames, future);
        let victim = self.frames.replace(slot, page);
        self.replacer.remove(victim);
        self.replacer.record_insert(page, slot, step);
        debug!(step, %page, slot = slot.0, %victim, "fault, evicted");

        StepOutcome::Replace { slot, victim }
    }
}

/// Simulate `policy` over `references` with `capacity` frames.
///
/// # Errors
/// - `Error::InvalidConfiguration` if `capacity` is 0 or `references` is
///   empty; no partial trace is produced
pub fn simulate(policy: Policy, references: &[PageId], capacity: usize) -> Result<Simulation> {
    Simulator::new(policy, capacity)?.run(references)
}

/// Every policy run over the same stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    runs: Vec<Simulation>,
}

impl Comparison {
    /// Runs in [`Policy::ALL`] order.
    pub fn runs(&self) -> &[Simulation] {
        &self.runs
    }

    pub fn get(&self, policy: Policy) -> Option<&Simulation> {
        self.runs.iter().find(|run| run.policy() == policy)
    }

    /// Run with the fewest faults; the earliest policy wins ties.
    pub fn best(&self) -> Option<&Simulation> {
        self.runs
            .iter()
            .reduce(|best, run| if run.faults() < best.faults() { run } else { best })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Simulation> {
        self.runs.iter()
    }
}

/// Simulate every policy over `references`, each on its own frame set.
///
/// # Errors
/// Same as [`simulate`].
pub fn simulate_all(references: &[PageId], capacity: usize) -> Result<Comparison> {
    let runs = Policy::ALL
        .iter()
        .map(|&policy| simulate(policy, references, capacity))
        .collect::<Result<Vec<_>>>()?;

    Ok(Comparison { runs })
}

/// Fault count of `policy` for each capacity in `capacities`.
///
/// # Errors
/// - `ConfigError::EmptyCapacityRange` if `capacities` is empty (e.g. `1..=0`)
/// - otherwise as [`simulate`]; a range starting at 0 is rejected
pub fn fault_curve(
    policy: Policy,
    references: &[PageId],
    capacities: RangeInclusive<usize>,
) -> Result<Vec<(usize, u64)>> {
    if capacities.is_empty() {
        return Err(ConfigError::EmptyCapacityRange.into());
    }

    capacities
        .map(|capacity| Ok((capacity, simulate(policy, references, capacity)?.faults())))
        .collect()
}

/// True if some larger capacity faults more than a smaller one.
///
/// `curve` is expected in increasing capacity order, as produced by
/// [`fault_curve`].
pub fn has_belady_anomaly(curve: &[(usize, u64)]) -> bool {
    curve.windows(2).any(|pair| pair[1].1 > pair[0].1)
}
