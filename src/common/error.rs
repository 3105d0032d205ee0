//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulator itself only ever fails on configuration; the other
/// variants come from the input layer that turns text into arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Capacity or reference stream rejected before any step ran.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// A token in the raw input is not an integer.
    #[error("Malformed input: token {token:?} at position {position} is not an integer")]
    MalformedInput {
        /// The offending token, as typed.
        token: String,
        /// 0-based index of the token in the input.
        position: usize,
    },

    /// Policy name not recognised.
    #[error("Unknown policy {0:?} (expected FIFO, LRU or Optimal)")]
    UnknownPolicy(String),
}

/// Why a simulation configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Frame count must be at least one.
    #[error("number of frames must be greater than 0 (got {0})")]
    NonPositiveCapacity(i64),

    /// Nothing to simulate.
    #[error("reference string cannot be empty")]
    EmptyReferences,

    /// A capacity sweep with no capacities in it.
    #[error("capacity range is empty")]
    EmptyCapacityRange,
}
