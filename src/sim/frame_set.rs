//! FrameSet - the fixed-size resident set being simulated.
//!
//! A [`FrameSet`] owns up to `capacity` resident pages in numbered slots.
//! Slots fill left to right and a replacement reuses the victim's slot,
//! so a page never moves once placed.

use std::collections::HashMap;

use crate::common::{FrameId, PageId};

/// The resident pages of one simulation run.
///
/// # Layout
/// ```text
/// slots:      [ 7 ][ 0 ][ 1 ][   ]     occupied prefix, capacity = 4
/// page_table: {7 → 0, 0 → 1, 1 → 2}    PageId → FrameId
/// ```
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// Resident pages by slot. Only the occupied prefix is stored.
    slots: Vec<PageId>,

    /// Maps resident pages to their slot.
    page_table: HashMap<PageId, FrameId>,

    /// Number of slots (immutable after construction).
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set with `capacity` slots.
    ///
    /// Storage grows with the pages placed, not with `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            page_table: HashMap::new(),
            capacity,
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once every slot holds a page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.page_table.contains_key(&page)
    }

    /// Slot currently holding `page`, if resident.
    #[inline]
    pub fn slot_of(&self, page: PageId) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }

    /// Page held in `slot`, or None if the slot is empty.
    #[inline]
    pub fn get(&self, slot: FrameId) -> Option<PageId> {
        self.slots.get(slot.0).copied()
    }

    /// Place `page` in the first free slot and return that slot.
    ///
    /// The caller must check [`is_full`](Self::is_full) first.
    pub fn push(&mut self, page: PageId) -> FrameId {
        debug_assert!(!self.is_full(), "push into a full frame set");
        debug_assert!(!self.contains(page), "page {} already resident", page);

        let slot = FrameId::new(self.slots.len());
        self.slots.push(page);
        self.page_table.insert(page, slot);
        slot
    }

    /// Overwrite `slot` with `page`, returning the evicted page.
    ///
    /// `slot` must be occupied.
    pub fn replace(&mut self, slot: FrameId, page: PageId) -> PageId {
        let victim = std::mem::replace(&mut self.slots[slot.0], page);
        self.page_table.remove(&victim);
        self.page_table.insert(page, slot);
        victim
    }

    /// Iterate `(slot, page)` over occupied slots in slot order.
    pub fn residents(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, &page)| (FrameId::new(i), page))
    }

    /// Owned copy of the first `width` slots, empty slots as `None`.
    ///
    /// `width` is clamped to `[len, capacity]`, so occupied slots are
    /// never cut off.
    pub fn snapshot(&self, width: usize) -> Vec<Option<PageId>> {
        let width = width.min(self.capacity).max(self.slots.len());
        let mut snapshot: Vec<Option<PageId>> = self.slots.iter().copied().map(Some).collect();
        snapshot.resize(width, None);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_set_new() {
        let frames = FrameSet::new(3);
        assert_eq!(frames.capacity(), 3);
        assert_eq!(frames.len(), 0);
        assert!(frames.is_empty());
        assert!(!frames.is_full());
    }

    #[test]
    fn test_push_fills_slots_in_order() {
        let mut frames = FrameSet::new(2);

        assert_eq!(frames.push(PageId::new(9)), FrameId::new(0));
        assert_eq!(frames.push(PageId::new(4)), FrameId::new(1));

        assert!(frames.is_full());
        assert_eq!(frames.slot_of(PageId::new(4)), Some(FrameId::new(1)));
        assert_eq!(frames.get(FrameId::new(0)), Some(PageId::new(9)));
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut frames = FrameSet::new(2);
        frames.push(PageId::new(1));
        frames.push(PageId::new(2));

        let victim = frames.replace(FrameId::new(0), PageId::new(3));

        assert_eq!(victim, PageId::new(1));
        assert!(!frames.contains(PageId::new(1)));
        assert_eq!(frames.slot_of(PageId::new(3)), Some(FrameId::new(0)));
        assert_eq!(frames.slot_of(PageId::new(2)), Some(FrameId::new(1)));
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_snapshot_pads_to_width() {
        let mut frames = FrameSet::new(3);
        frames.push(PageId::new(5));

        assert_eq!(frames.snapshot(3), vec![Some(PageId::new(5)), None, None]);
        assert_eq!(frames.snapshot(2), vec![Some(PageId::new(5)), None]);
    }

    #[test]
    fn test_snapshot_width_clamped() {
        let mut frames = FrameSet::new(2);
        frames.push(PageId::new(1));
        frames.push(PageId::new(2));

        // Never narrower than the occupied prefix, never wider than capacity
        assert_eq!(frames.snapshot(0).len(), 2);
        assert_eq!(frames.snapshot(10).len(), 2);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut frames = FrameSet::new(usize::MAX);
        frames.push(PageId::new(4));

        assert!(!frames.is_full());
        assert_eq!(frames.snapshot(1), vec![Some(PageId::new(4))]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut frames = FrameSet::new(1);
        frames.push(PageId::new(1));
        let before = frames.snapshot(1);

        frames.replace(FrameId::new(0), PageId::new(2));

        assert_eq!(before, vec![Some(PageId::new(1))]);
        assert_eq!(frames.snapshot(1), vec![Some(PageId::new(2))]);
    }

    #[test]
    fn test_residents_in_slot_order() {
        let mut frames = FrameSet::new(3);
        frames.push(PageId::new(30));
        frames.push(PageId::new(10));

        let residents: Vec<_> = frames.residents().collect();
        assert_eq!(
            residents,
            vec![
                (FrameId::new(0), PageId::new(30)),
                (FrameId::new(1), PageId::new(10)),
            ]
        );
    }
}
