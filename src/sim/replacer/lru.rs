//! LRU (Least-Recently-Used) replacement policy.

use std::collections::HashMap;

use crate::common::{FrameId, PageId};
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// LRU eviction by last-use step.
///
/// Tracks, for every resident page, the step at which it was last
/// referenced (set on insert, refreshed on every hit). The victim is the
/// resident page with the smallest step; equal steps go to the lowest
/// page id. A single stream references one page per step, so equal steps
/// only arise when the replacer is driven directly.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    /// Resident page → step of its latest reference.
    last_used: HashMap<PageId, usize>,
}

impl LruReplacer {
    /// Create an empty LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Step at which `page` was last referenced, if tracked.
    pub fn last_used(&self, page: PageId) -> Option<usize> {
        self.last_used.get(&page).copied()
    }

    /// Number of tracked pages.
    pub fn size(&self) -> usize {
        self.last_used.len()
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, page: PageId, step: usize) {
        self.last_used.insert(page, step);
    }

    fn record_insert(&mut self, page: PageId, _slot: FrameId, step: usize) {
        self.last_used.insert(page, step);
    }

    fn evict(&mut self, frames: &FrameSet, _future: &[PageId]) -> FrameId {
        // Untracked pages count as oldest.
        frames
            .residents()
            .min_by_key(|&(_, page)| (self.last_used(page).unwrap_or(0), page))
            .map(|(slot, _)| slot)
            .unwrap_or_default()
    }

    fn remove(&mut self, page: PageId) {
        self.last_used.remove(&page);
    }
}
