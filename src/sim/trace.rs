//! Per-step records of a simulation run.

use std::ops::Index;

use crate::common::{FrameId, PageId};
use crate::sim::{FaultStats, Policy};

/// What happened to the frame set at one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The reference was already resident in `slot`.
    Hit { slot: FrameId },

    /// Fault while a slot was still free; the page went into `slot`.
    Fill { slot: FrameId },

    /// Fault on a full set; `victim` was overwritten in `slot`.
    Replace { slot: FrameId, victim: PageId },
}

impl StepOutcome {
    #[inline]
    pub fn faulted(&self) -> bool {
        !matches!(self, StepOutcome::Hit { .. })
    }

    /// Slot the reference ended up in.
    #[inline]
    pub fn slot(&self) -> FrameId {
        match *self {
            StepOutcome::Hit { slot }
            | StepOutcome::Fill { slot }
            | StepOutcome::Replace { slot, .. } => slot,
        }
    }
}

/// Snapshot of the frame set right after one reference was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// 0-based position in the reference stream.
    pub step: usize,

    /// The page referenced at this step.
    pub reference: PageId,

    /// Slot contents, one entry per [`Trace::slots`]; `None` for an empty slot.
    pub frames: Vec<Option<PageId>>,

    pub outcome: StepOutcome,
}

impl StepRecord {
    #[inline]
    pub fn faulted(&self) -> bool {
        self.outcome.faulted()
    }

    /// Slot overwritten by an eviction, if this step evicted.
    pub fn replaced_slot(&self) -> Option<FrameId> {
        match self.outcome {
            StepOutcome::Replace { slot, .. } => Some(slot),
            _ => None,
        }
    }

    /// Page evicted at this step, if any.
    pub fn victim(&self) -> Option<PageId> {
        match self.outcome {
            StepOutcome::Replace { victim, .. } => Some(victim),
            _ => None,
        }
    }

    /// Number of occupied slots.
    pub fn occupancy(&self) -> usize {
        self.frames.iter().filter(|slot| slot.is_some()).count()
    }
}

/// The ordered step records of one run, one per reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    policy: Policy,
    capacity: usize,
    slots: usize,
    steps: Vec<StepRecord>,
}

impl Trace {
    pub(crate) fn new(
        policy: Policy,
        capacity: usize,
        slots: usize,
        steps: Vec<StepRecord>,
    ) -> Self {
        Self {
            policy,
            capacity,
            slots,
            steps,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Configured frame count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots each record holds: `capacity`, or fewer when the
    /// stream has fewer distinct pages than that.
    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn get(&self, step: usize) -> Option<&StepRecord> {
        self.steps.get(step)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }

    /// The reference stream the trace was produced from.
    pub fn references(&self) -> impl Iterator<Item = PageId> + '_ {
        self.steps.iter().map(|record| record.reference)
    }

    /// Steps at which a fault occurred.
    pub fn fault_steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .filter(|record| record.faulted())
            .map(|record| record.step)
    }

    /// Recount hits and faults from the records.
    pub fn stats(&self) -> FaultStats {
        let mut stats = FaultStats::new();
        for record in &self.steps {
            if record.faulted() {
                stats.record_fault();
            } else {
                stats.record_hit();
            }
        }
        stats
    }
}

impl Index<usize> for Trace {
    type Output = StepRecord;

    fn index(&self, step: usize) -> &StepRecord {
        &self.steps[step]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
