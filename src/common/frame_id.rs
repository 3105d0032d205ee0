//! Frame identifier type.

use std::fmt;

/// Identifies a slot in the frame set.
///
/// Slot positions are stable: a replacement always reuses the slot its
/// victim occupied, so a `FrameId` doubles as the row of a rendered trace.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(2);
/// // Can use directly as index: slots[frame_id.0]
/// assert_eq!(frame_id.0, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
