//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference stream.
///
/// Pages are plain signed integers as typed by the user. `PageId` is `Ord`
/// so the replacers can break ties by "lowest page identifier".
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert!(PageId::new(-1) < page_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }

    /// Wrap a slice of raw integers as a reference stream.
    pub fn stream(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId).collect()
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
