//! Configuration constants and validation for a simulation run.

use crate::common::{ConfigError, PageId, Result};

/// Frame count used by the command line when `--frames` is omitted.
pub const DEFAULT_CAPACITY: usize = 3;

/// Smallest usable frame count.
pub const MIN_CAPACITY: usize = 1;

/// Check a (references, capacity) pair before any step executes.
///
/// Capacity is checked first, so a run with both problems reports
/// [`ConfigError::NonPositiveCapacity`].
///
/// # Errors
/// - `ConfigError::NonPositiveCapacity` if `capacity < MIN_CAPACITY`
/// - `ConfigError::EmptyReferences` if `references` is empty
pub fn validate(references: &[PageId], capacity: usize) -> Result<()> {
    if capacity < MIN_CAPACITY {
        return Err(ConfigError::NonPositiveCapacity(capacity as i64).into());
    }
    if references.is_empty() {
        return Err(ConfigError::EmptyReferences.into());
    }
    Ok(())
}
