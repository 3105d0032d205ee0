//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{FrameId, PageId};
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// FIFO eviction over slot positions.
///
/// Slots fill in order `0..capacity`, so arrival order and slot order agree
/// until the first eviction. From then on a cursor names the slot whose page
/// has been resident longest; each eviction overwrites it and moves the
/// cursor one slot to the right, wrapping at `capacity`.
///
/// Hits never move the cursor.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    /// Slot of the oldest resident page.
    cursor: usize,

    /// Number of slots the cursor rotates over.
    capacity: usize,
}

impl FifoReplacer {
    /// Create a FIFO replacer for `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            cursor: 0,
            capacity,
        }
    }

    /// Slot the next eviction will overwrite.
    pub fn cursor(&self) -> FrameId {
        FrameId::new(self.cursor)
    }
}

impl Replacer for FifoReplacer {
    fn record_access(&mut self, _page: PageId, _step: usize) {}

    fn record_insert(&mut self, _page: PageId, _slot: FrameId, _step: usize) {}

    fn evict(&mut self, _frames: &FrameSet, _future: &[PageId]) -> FrameId {
        let victim = FrameId::new(self.cursor);
        self.cursor = (self.cursor + 1) % self.capacity;
        victim
    }

    fn remove(&mut self, _page: PageId) {}
}
