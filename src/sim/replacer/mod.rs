//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - rotating cursor over slots (arrival order)
//! - [`LruReplacer`] - minimum last-use step
//! - [`OptimalReplacer`] - furthest next use (Belady)
//!
//! Ties in LRU and Optimal go to the lowest [`PageId`].

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::sim::FrameSet;

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// Victim-selection rule driven by the step loop.
///
/// The simulator calls, per reference at step `i`:
/// - hit: `record_access(page, i)`
/// - fault into a free slot: `record_insert(page, slot, i)`
/// - fault on a full set: `evict(frames, &references[i + 1..])`, then
///   `remove(victim)` and `record_insert(page, slot, i)`
pub trait Replacer: fmt::Debug {
    /// A resident page was referenced again.
    fn record_access(&mut self, page: PageId, step: usize);

    /// A page was written into `slot`.
    fn record_insert(&mut self, page: PageId, slot: FrameId, step: usize);

    /// Pick the slot to overwrite.
    ///
    /// Only called when `frames` is full. `future` is the part of the
    /// reference stream after the current step.
    fn evict(&mut self, frames: &FrameSet, future: &[PageId]) -> FrameId;

    /// Forget an evicted page.
    fn remove(&mut self, page: PageId);
}
