//! Optimal (Belady) replacement policy.

use std::cmp::Reverse;

use crate::common::{FrameId, PageId};
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// Distance given to a page that is never referenced again.
pub const NEVER: usize = usize::MAX;

/// Clairvoyant eviction: the resident page whose next reference lies
/// furthest in the future is evicted; pages never referenced again come
/// first. Equal distances (only possible between [`NEVER`]s) go to the
/// lowest page id.
///
/// Keeps no state; every decision rescans the remaining stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        OptimalReplacer
    }

    /// Offset of the next reference to `page` in `future`, or [`NEVER`].
    pub fn next_use(page: PageId, future: &[PageId]) -> usize {
        future.iter().position(|&p| p == page).unwrap_or(NEVER)
    }
}

impl Replacer for OptimalReplacer {
    fn record_access(&mut self, _page: PageId, _step: usize) {}

    fn record_insert(&mut self, _page: PageId, _slot: FrameId, _step: usize) {}

    fn evict(&mut self, frames: &FrameSet, future: &[PageId]) -> FrameId {
        frames
            .residents()
            .max_by_key(|&(_, page)| (Self::next_use(page, future), Reverse(page)))
            .map(|(slot, _)| slot)
            .unwrap_or_default()
    }

    fn remove(&mut self, _page: PageId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set(pages: &[i64]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len());
        for &p in pages {
            frames.push(PageId::new(p));
        }
        frames
    }

    #[test]
    fn test_next_use() {
        let future = PageId::stream(&[4, 2, 4]);
        assert_eq!(OptimalReplacer::next_use(PageId::new(4), &future), 0);
        assert_eq!(OptimalReplacer::next_use(PageId::new(2), &future), 1);
        assert_eq!(OptimalReplacer::next_use(PageId::new(9), &future), NEVER);
    }

    #[test]
    fn test_optimal_evicts_furthest() {
        let frames = full_set(&[1, 2, 3]);
        let future = PageId::stream(&[2, 3, 1]);

        assert_eq!(OptimalReplacer.evict(&frames, &future), FrameId::new(0));
    }

    #[test]
    fn test_optimal_prefers_never_used() {
        let frames = full_set(&[1, 2, 3]);
        let future = PageId::stream(&[1, 3, 1, 3]);

        assert_eq!(OptimalReplacer.evict(&frames, &future), FrameId::new(1));
    }

    #[test]
    fn test_optimal_tie_goes_to_lowest_page() {
        let frames = full_set(&[8, 3, 5]);

        // Nothing is used again: page 3 (slot 1) is lowest
        assert_eq!(OptimalReplacer.evict(&frames, &[]), FrameId::new(1));

        // 8 is still needed, 3 and 5 tie on NEVER
        let future = PageId::stream(&[8]);
        assert_eq!(OptimalReplacer.evict(&frames, &future), FrameId::new(1));
    }
}
